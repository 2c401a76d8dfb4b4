//! Backing-store implementations.
//!
//! Concrete implementations of the store traits from
//! `itemvault_core::storage`: DynamoDB for item records, S3 for raw
//! payload blobs, and an in-memory pair for tests.

pub mod dynamodb;
#[cfg(test)]
pub mod inmemory;
pub mod s3;

mod provision;

pub use dynamodb::DynamoKeyValueStore;
pub use s3::S3BlobStore;
