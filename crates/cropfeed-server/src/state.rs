//! Shared application state for the Cropfeed HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use cropfeed_core::{CursorServer, ProgressFeed};
use cropfeed_types::Dataset;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Holds the
/// two independent rotations; neither ever moves the other's cursor.
#[derive(Debug)]
pub struct AppState {
    /// Replays the recorded dataset.
    pub records: CursorServer,
    /// Rotates the standalone progress documents.
    pub progress: ProgressFeed,
}

impl AppState {
    /// Create state from already-built servers.
    pub const fn new(records: CursorServer, progress: ProgressFeed) -> Self {
        Self { records, progress }
    }

    /// Create state over a loaded dataset and a progress source list.
    pub fn from_parts(dataset: Dataset, progress_sources: Vec<PathBuf>) -> Self {
        Self::new(
            CursorServer::new(Arc::new(dataset)),
            ProgressFeed::new(progress_sources),
        )
    }
}
