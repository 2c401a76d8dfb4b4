use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding item records (default: "ItemsTable")
    pub table_name: String,
    /// S3 bucket holding raw payload blobs (default: "my-bucket")
    pub bucket_name: String,
    /// Custom DynamoDB endpoint for local backends, if set
    pub dynamodb_endpoint: Option<String>,
    /// Custom S3 endpoint for local backends, if set
    pub s3_endpoint: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - table for item records (default: "ItemsTable")
    /// - `S3_BUCKET_NAME` - bucket for raw payloads (default: "my-bucket")
    /// - `DYNAMODB_ENDPOINT` - custom DynamoDB endpoint (optional)
    /// - `S3_ENDPOINT` - custom S3 endpoint, served path-style (optional)
    /// - `AWS_DEFAULT_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "ItemsTable".to_string()),
            bucket_name: env::var("S3_BUCKET_NAME").unwrap_or_else(|_| "my-bucket".to_string()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            region: env::var("AWS_DEFAULT_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}
