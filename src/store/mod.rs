//! Store Module
//!
//! Provides the in-memory paste store with TTL expiration and retrieval
//! code generation.

pub mod codes;
mod entry;
mod store;


// Re-export public types
pub use entry::Paste;
pub use store::PasteStore;

// == Public Constants ==
/// Length of every retrieval code
pub const CODE_LENGTH: usize = 6;

/// Maximum allowed text length in characters
pub const MAX_TEXT_CHARS: usize = 5120;

/// Maximum allowed text size in bytes (5 KiB; governs multi-byte text)
pub const MAX_TEXT_BYTES: usize = 5 * 1024;

/// Maximum number of generation attempts before giving up on a unique code
pub const MAX_CODE_RETRIES: usize = 8;
