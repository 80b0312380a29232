//! API Module
//!
//! HTTP handlers and routing for the text-share REST API.
//!
//! # Endpoints
//! - `POST /api/send` - Store a text paste, returns code and link
//! - `GET /api/receive/:code` - Retrieve a paste by code
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
