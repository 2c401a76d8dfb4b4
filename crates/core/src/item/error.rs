use thiserror::Error;

/// Errors surfaced by item validation and CRUD orchestration.
///
/// The display strings double as the HTTP error bodies, so they are part
/// of the external contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item ID not provided")]
    MissingId,
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),
    #[error("Item not found")]
    NotFound,
    #[error("Item already exists")]
    AlreadyExists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_display() {
        assert_eq!(ItemError::MissingId.to_string(), "Item ID not provided");
    }

    #[test]
    fn test_invalid_payload_display() {
        let error = ItemError::InvalidPayload("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid JSON payload: expected value at line 1"
        );
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(ItemError::NotFound.to_string(), "Item not found");
    }

    #[test]
    fn test_already_exists_display() {
        assert_eq!(ItemError::AlreadyExists.to_string(), "Item already exists");
    }
}
