//! Error taxonomy for dataset loading and record serving.

/// Errors raised while loading or serving recorded data.
///
/// At startup every variant is fatal. At request time only the progress
/// rotation can produce [`SourceUnavailable`](Self::SourceUnavailable) or
/// [`MalformedData`](Self::MalformedData), and only for that one call.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The backing source could not be opened or read.
    #[error("{origin}: cannot open source: {source}")]
    SourceUnavailable {
        /// Where the data was expected (usually a file path).
        origin: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The source was readable but did not match the expected shape.
    #[error("{origin}: cannot parse source: {source}")]
    MalformedData {
        /// Where the data came from.
        origin: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// There is nothing to rotate over.
    #[error("dataset is empty")]
    EmptyDataset,
}
