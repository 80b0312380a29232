//! Textdrop - An ephemeral text-sharing service
//!
//! Stores short text pastes under unguessable 6-character retrieval codes
//! with a fixed TTL and background expiry reaping.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_reaper_task;
