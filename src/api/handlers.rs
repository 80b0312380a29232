//! API Handlers
//!
//! HTTP request handlers for each text-share endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::Config;
use crate::error::{PasteError, Result};
use crate::models::{HealthResponse, ReceiveResponse, SendRequest, SendResponse};
use crate::store::{codes, PasteStore, CODE_LENGTH};

/// Application state shared across all handlers and the reaper.
///
/// The store is owned here and injected everywhere it is needed; nothing in
/// the crate reaches for it as a global.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe paste store
    pub store: Arc<RwLock<PasteStore>>,
    /// Base URL used to build retrieval links
    pub base_url: String,
}

impl AppState {
    /// Creates a new AppState with the given store and base URL.
    pub fn new(store: PasteStore, base_url: impl Into<String>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            base_url: base_url.into(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PasteStore::new(config.paste_ttl), config.base_url.clone())
    }
}

/// Handler for POST /api/send
///
/// Validates the text, assigns a unique retrieval code and stores the paste.
/// Generation and insertion run under one write lock, so concurrent sends
/// can never share a code.
pub async fn send_handler(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<(StatusCode, Json<SendResponse>)> {
    // Validation never reaches the store
    if let Some(error_msg) = req.validate() {
        return Err(PasteError::Validation(error_msg));
    }

    let mut store = state.store.write().await;
    let (code, _paste) = store.create(req.text)?;
    drop(store);

    debug!("Stored paste under code {}", code);
    Ok((
        StatusCode::CREATED,
        Json(SendResponse::new(code, &state.base_url)),
    ))
}

/// Handler for GET /api/receive/:code
///
/// Codes are matched case-insensitively; input is normalized to the
/// generator's uppercase alphabet before lookup. A code that exists but has
/// expired is lazily removed and reported exactly like one that never
/// existed.
pub async fn receive_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ReceiveResponse>> {
    let code = codes::normalize(&code);
    if code.chars().count() != CODE_LENGTH {
        return Err(PasteError::Validation(format!(
            "Code must be exactly {} characters",
            CODE_LENGTH
        )));
    }

    // Read lock only: lookups do not serialize behind each other
    let lookup = {
        let store = state.store.read().await;
        store.get(&code)
    };

    match lookup {
        Ok(paste) => Ok(Json(ReceiveResponse::from_paste(&paste))),
        Err(PasteError::Expired) => {
            // Lazy expiry cleanup. The reaper would get to it eventually;
            // removing here just reclaims memory sooner. Re-checked under
            // the write lock in case the code was reused in between.
            let mut store = state.store.write().await;
            store.remove_expired(&code, Utc::now());
            Err(PasteError::NotFound)
        }
        Err(e) => Err(e),
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
