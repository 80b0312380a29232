//! Error types for the text-share service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Paste Error Enum ==
/// Unified error type for the text-share service.
#[derive(Error, Debug)]
pub enum PasteError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Code not found in the store
    #[error("code not found or expired")]
    NotFound,

    /// Code found but past its TTL. Must be indistinguishable from NotFound
    /// at the API boundary so callers cannot probe code existence.
    #[error("code not found or expired")]
    Expired,

    /// Code already maps to a live paste. Internal signal for the generator
    /// retry loop; never surfaced to clients.
    #[error("Code already in use: {0}")]
    CodeTaken(String),

    /// The code generator exhausted its collision retries
    #[error("could not allocate a unique code, try again shortly")]
    CapacityExhausted,
}

// == IntoResponse Implementation ==
impl IntoResponse for PasteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PasteError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // NotFound and Expired share one status and one message: the
            // response body must not leak whether a code ever existed
            PasteError::NotFound | PasteError::Expired => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            PasteError::CodeTaken(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            PasteError::CapacityExhausted => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the text-share service.
pub type Result<T> = std::result::Result<T, PasteError>;
