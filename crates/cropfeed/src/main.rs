//! Cropfeed service binary.
//!
//! Loads the recorded crop dataset and serves it one day per request.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `cropfeed-config.yaml` (or defaults)
//! 3. Load the dataset; an absent, corrupt, or empty dataset aborts startup
//! 4. Build shared state with both rotations at position 0
//! 5. Serve HTTP until `Ctrl-C`

mod error;

use std::sync::Arc;

use cropfeed_core::{dataset, FeedConfig};
use cropfeed_server::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, dataset loading, or the server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("cropfeed starting");

    // 2. Load configuration.
    let config = FeedConfig::load_or_default()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        dataset_path = %config.data.dataset_path.display(),
        progress_sources = config.data.progress_sources.len(),
        "Configuration loaded"
    );

    // 3. Load the dataset. Any failure here is fatal.
    let dataset = dataset::require_entries(dataset::load(&config.data.dataset_path)?)?;

    // 4. Assemble shared state.
    let state = Arc::new(AppState::from_parts(
        dataset,
        config.data.progress_sources.clone(),
    ));

    // 5. Serve.
    cropfeed_server::start_server(&ServerConfig::from(&config.server), state).await?;

    info!("cropfeed shutdown complete");
    Ok(())
}
