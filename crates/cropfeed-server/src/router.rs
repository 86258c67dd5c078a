//! Axum router construction for the Cropfeed API.
//!
//! Assembles all routes into a single [`Router`] with request tracing and
//! CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Cropfeed server.
///
/// The router includes:
/// - `GET /daily_conditions` -- next recorded condition record
/// - `GET /daily_conditions_progress` -- next progress document
/// - `POST /water` -- placeholder
/// - `GET /health` -- liveness and cursor status
///
/// CORS allows any origin; the service only serves replayed test data.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/daily_conditions", get(handlers::daily_conditions))
        .route(
            "/daily_conditions_progress",
            get(handlers::daily_conditions_progress),
        )
        .route("/water", post(handlers::water))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
