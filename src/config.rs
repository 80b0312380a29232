//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed TTL in seconds applied to every paste
    pub paste_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
    /// Base URL used to build shareable retrieval links
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PASTE_TTL` - Paste lifetime in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Reaper sweep frequency in seconds (default: 60)
    /// - `BASE_URL` - Base URL for retrieval links (default: http://localhost:3000)
    pub fn from_env() -> Self {
        Self {
            paste_ttl: env::var("PASTE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paste_ttl: 1800,
            server_port: 3000,
            sweep_interval: 60,
            base_url: "http://localhost:3000".to_string(),
        }
    }
}
