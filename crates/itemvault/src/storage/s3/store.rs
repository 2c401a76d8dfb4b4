//! S3-backed blob store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use itemvault_core::storage::{BlobStore, StoreError, StoreResult};

use super::error::{
    is_bucket_not_found, is_no_such_key, map_delete_object_error, map_get_object_error,
    map_head_bucket_error, map_put_object_error,
};
use crate::storage::provision::{probe_with_retry, Probe};

/// Single-bucket store for raw item payloads, keyed by the item id.
pub struct S3BlobStore {
    client: Client,
    bucket_name: String,
}

impl S3BlobStore {
    /// Creates a new store with the given S3 client and bucket name.
    pub fn new(client: Client, bucket_name: impl Into<String>) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }

    /// Probes bucket existence. A 404 means the bucket is missing and is
    /// kept distinct from transient failures; anything else (including a
    /// 403 for a bucket owned by someone else) consumes retry attempts.
    async fn probe_bucket(&self) -> StoreResult<Probe> {
        match self
            .client
            .head_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await
        {
            Ok(_) => Ok(Probe::Exists),
            Err(err) if is_bucket_not_found(&err) => Ok(Probe::Missing),
            Err(err) => Err(map_head_bucket_error(err)),
        }
    }

    async fn create_bucket(&self) -> StoreResult<()> {
        self.client
            .create_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await
            .map_err(|e| StoreError::Provisioning(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn ensure_ready(&self) -> StoreResult<()> {
        let resource = format!("bucket {}", self.bucket_name);
        match probe_with_retry(&resource, || self.probe_bucket()).await? {
            Probe::Exists => Ok(()),
            Probe::Missing => {
                tracing::info!(bucket = %self.bucket_name, "Creating blob bucket");
                self.create_bucket().await
            }
        }
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await;

        match result {
            Ok(output) => {
                let bytes = output.body.collect().await.map_err(|e| {
                    StoreError::RequestFailed(format!("reading object body: {e}"))
                })?;
                Ok(Some(bytes.into_bytes().to_vec()))
            }
            Err(err) if is_no_such_key(&err) => Ok(None),
            Err(err) => Err(map_get_object_error(err)),
        }
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(bytes.to_vec()))
            .content_type("application/json")
            .send()
            .await
            .map_err(map_put_object_error)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        // DeleteObject on a missing key succeeds, which matches the
        // "absence is not an error" contract.
        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await
            .map_err(map_delete_object_error)?;

        Ok(())
    }
}
