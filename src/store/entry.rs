//! Paste Entry Module
//!
//! Defines the structure for individual stored pastes with TTL support.

use chrono::{DateTime, Duration, Utc};

// == Paste ==
/// Represents a single stored paste with its text and lifetime metadata.
///
/// All fields are immutable once the paste is inserted: reads never extend
/// or shorten the TTL.
#[derive(Debug, Clone)]
pub struct Paste {
    /// The stored text
    pub text: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Expiration timestamp (`created_at + TTL`)
    pub expires_at: DateTime<Utc>,
}

impl Paste {
    // == Constructor ==
    /// Creates a new paste expiring `ttl_secs` seconds from now.
    pub fn new(text: String, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            text,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs as i64),
        }
    }

    // == Is Expired ==
    /// Checks if the paste has expired as of `now`.
    ///
    /// Boundary condition: a paste is visible iff `now < expires_at`, so it
    /// is considered expired the instant the expiration time is reached.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks if the paste has expired against the current wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_creation() {
        let paste = Paste::new("hello".to_string(), 1800);

        assert_eq!(paste.text, "hello");
        assert!(paste.expires_at > paste.created_at);
        assert!(!paste.is_expired());
    }

    #[test]
    fn test_paste_ttl_spans_full_duration() {
        let paste = Paste::new("hello".to_string(), 1800);
        let span = paste.expires_at - paste.created_at;
        assert_eq!(span, Duration::seconds(1800));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let paste = Paste::new("hello".to_string(), 1800);

        // Visible strictly before expires_at, expired at and after it
        assert!(!paste.is_expired_at(paste.expires_at - Duration::milliseconds(1)));
        assert!(paste.is_expired_at(paste.expires_at));
        assert!(paste.is_expired_at(paste.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let paste = Paste::new("hello".to_string(), 0);
        assert!(paste.is_expired());
    }
}
