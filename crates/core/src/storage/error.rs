use thiserror::Error;

/// Errors that can occur during backing-store operations.
///
/// Absence of a key is not an error; store reads report it as `None`.
/// These variants describe actual backend failures, so callers can tell
/// "truly absent" apart from "backend unreachable" even where the HTTP
/// contract hides the difference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Provisioning failed: {0}")]
    Provisioning(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
