//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry Reaper: removes expired pastes at configured intervals

mod reaper;

pub use reaper::{spawn_reaper_task, sweep_expired};
