//! Request DTOs for the text-share API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::store::{MAX_TEXT_BYTES, MAX_TEXT_CHARS};

/// Request body for the send operation (POST /api/send)
///
/// # Fields
/// - `text`: The text to share
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    /// The text to share
    pub text: String,
}

impl SendRequest {
    /// Validates the request data
    ///
    /// Both the character count and the byte size are checked; the byte
    /// limit is the one that bites for multi-byte text.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.text.is_empty() {
            return Some("Text is required".to_string());
        }
        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Some(format!(
                "Text exceeds maximum length of {} characters",
                MAX_TEXT_CHARS
            ));
        }
        if self.text.len() > MAX_TEXT_BYTES {
            return Some(format!(
                "Text exceeds maximum size of {} bytes",
                MAX_TEXT_BYTES
            ));
        }
        None
    }
}
