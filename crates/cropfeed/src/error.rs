//! Error types for the Cropfeed binary.
//!
//! [`AppError`] is the top-level error type that wraps every failure mode
//! during startup and serving.

/// Top-level error for the Cropfeed binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: cropfeed_core::ConfigError,
    },

    /// The dataset could not be loaded or is empty.
    #[error("dataset error: {source}")]
    Dataset {
        /// The underlying feed error.
        #[from]
        source: cropfeed_core::FeedError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: cropfeed_server::ServerError,
    },
}
