//! Response DTOs for the text-share API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::store::Paste;

/// Response body for the send operation (POST /api/send)
#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    /// The retrieval code assigned to the paste
    pub code: String,
    /// Shareable link embedding the code
    pub link: String,
}

impl SendResponse {
    /// Creates a new SendResponse with a link built from the base URL
    pub fn new(code: impl Into<String>, base_url: &str) -> Self {
        let code = code.into();
        let link = format!("{}/receive?code={}", base_url.trim_end_matches('/'), code);
        Self { code, link }
    }
}

/// Response body for the receive operation (GET /api/receive/:code)
///
/// Timestamps are RFC 3339 strings; the caller computes remaining lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiveResponse {
    /// The stored text
    pub text: String,
    /// When the paste was created
    pub created_at: String,
    /// When the paste stops being retrievable
    pub expires_at: String,
}

impl ReceiveResponse {
    /// Creates a new ReceiveResponse from a stored paste
    pub fn from_paste(paste: &Paste) -> Self {
        Self {
            text: paste.text.clone(),
            created_at: to_rfc3339(paste.created_at),
            expires_at: to_rfc3339(paste.expires_at),
        }
    }
}

fn to_rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
