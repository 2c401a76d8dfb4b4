use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use itemvault_core::item::{item_error_to_status_code, ItemError};

/// Error wrapper for handler results.
///
/// Item errors map to their taxonomy status codes; anything else is an
/// internal error. Every failure renders as a JSON `{"error": ...}` body
/// carrying the error's message.
pub struct ApiError(pub anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = if let Some(item_error) = self.0.downcast_ref::<ItemError>() {
            let code = item_error_to_status_code(item_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
