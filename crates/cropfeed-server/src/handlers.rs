//! REST endpoint handlers for the Cropfeed server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/daily_conditions` | Next recorded condition record |
//! | `GET` | `/daily_conditions_progress` | Next progress document |
//! | `POST` | `/water` | Placeholder, logs only |
//! | `GET` | `/health` | Liveness and cursor status |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cropfeed_core::progress::Document;
use cropfeed_types::ConditionRecord;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: &'static str,
    /// Crop of the loaded dataset.
    pub crop_name: String,
    /// Planting date of the loaded dataset.
    pub planting_date: String,
    /// Number of daily entries being replayed.
    pub entries: usize,
    /// Index of the entry the next `/daily_conditions` call returns.
    pub cursor: usize,
}

// ---------------------------------------------------------------------------
// GET /daily_conditions
// ---------------------------------------------------------------------------

/// Return the record under the dataset cursor and advance it.
pub async fn daily_conditions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConditionRecord>, ApiError> {
    let entry = state.records.next_entry()?;
    debug!(day = entry.day, "Serving daily conditions");
    Ok(Json(entry.conditions))
}

// ---------------------------------------------------------------------------
// GET /daily_conditions_progress
// ---------------------------------------------------------------------------

/// Return the next progress document in the rotation.
///
/// The file read runs on the blocking pool. A missing or unparsable file
/// fails this request only; the rotation has already moved on.
pub async fn daily_conditions_progress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Document>, ApiError> {
    let document = tokio::task::spawn_blocking(move || state.progress.next_document())
        .await
        .map_err(|e| ApiError::Internal(format!("progress read task failed: {e}")))??;
    Ok(Json(document))
}

// ---------------------------------------------------------------------------
// POST /water
// ---------------------------------------------------------------------------

/// Accept a watering request. Nothing is stored or returned.
pub async fn water() -> StatusCode {
    info!("Water request received");
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness and the current replay position.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset = state.records.dataset();
    Json(HealthResponse {
        status: "ok",
        crop_name: dataset.crop_name.clone(),
        planting_date: dataset.planting_date.clone(),
        entries: dataset.len(),
        cursor: state.records.position(),
    })
}
