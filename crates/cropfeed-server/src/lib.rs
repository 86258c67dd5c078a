//! HTTP API for the Cropfeed service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /daily_conditions`** -- the next recorded condition record,
//!   round-robin over the loaded dataset
//! - **`GET /daily_conditions_progress`** -- the next standalone progress
//!   document, round-robin over a configured file list
//! - **`POST /water`** -- a stateless placeholder that only logs
//! - **`GET /health`** -- liveness plus dataset and cursor status
//!
//! # Architecture
//!
//! One [`AppState`] is built at startup from the loaded dataset and the
//! progress source list, wrapped in an [`Arc`](std::sync::Arc), and shared
//! with every handler. Each cursor lives inside its own server object, so
//! tests can build as many independent instances as they need.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
