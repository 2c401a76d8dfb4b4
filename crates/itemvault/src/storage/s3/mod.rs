//! S3 blob store backend.
//!
//! Implements the `BlobStore` trait from `itemvault_core::storage` using
//! `aws-sdk-s3`.

mod error;
mod store;

pub use store::S3BlobStore;
