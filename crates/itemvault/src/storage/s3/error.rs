//! S3 error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `itemvault_core::storage`.

use std::fmt::Debug;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::delete_object::DeleteObjectError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use itemvault_core::storage::StoreError;

/// True when a HeadBucket error means the bucket does not exist (404).
///
/// The provisioning path relies on this exact distinction: not-found
/// short-circuits to bucket creation, anything else is retried.
pub fn is_bucket_not_found<R>(err: &SdkError<HeadBucketError, R>) -> bool {
    matches!(err.as_service_error(), Some(HeadBucketError::NotFound(_)))
}

/// True when a GetObject error means the key is absent.
pub fn is_no_such_key<R>(err: &SdkError<GetObjectError, R>) -> bool {
    matches!(err.as_service_error(), Some(GetObjectError::NoSuchKey(_)))
}

/// Classify transport-level failures that never reached the service.
fn transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError> {
    match err {
        SdkError::DispatchFailure(_) => Some(StoreError::ConnectionFailed(
            "request dispatch failed".to_string(),
        )),
        SdkError::TimeoutError(_) => {
            Some(StoreError::ConnectionFailed("request timed out".to_string()))
        }
        _ => None,
    }
}

/// Map a HeadBucket SDK error to StoreError.
pub fn map_head_bucket_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<HeadBucketError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    StoreError::RequestFailed(format!(
        "HeadBucket failed: {:?}",
        err.into_service_error()
    ))
}

/// Map a GetObject SDK error to StoreError.
pub fn map_get_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetObjectError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        GetObjectError::InvalidObjectState(_) => {
            StoreError::RequestFailed("Object is archived and unavailable".to_string())
        }
        err => StoreError::RequestFailed(format!("GetObject failed: {:?}", err)),
    }
}

/// Map a PutObject SDK error to StoreError.
pub fn map_put_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutObjectError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    StoreError::RequestFailed(format!("PutObject failed: {:?}", err.into_service_error()))
}

/// Map a DeleteObject SDK error to StoreError.
pub fn map_delete_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteObjectError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    StoreError::RequestFailed(format!(
        "DeleteObject failed: {:?}",
        err.into_service_error()
    ))
}
