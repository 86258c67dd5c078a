//! Round-robin rotation over standalone JSON documents.
//!
//! [`ProgressFeed`] cycles through an ordered list of document paths,
//! reading and parsing one per call. It is a placeholder for a future
//! progressive feed, so documents are returned as opaque JSON objects.
//!
//! The feed owns its own [`RingCursor`]; it never moves the dataset
//! cursor. A failed read still consumes its slot, so the next call moves
//! on to the following document instead of retrying the broken one.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::cursor::RingCursor;
use crate::error::FeedError;

/// A JSON object read from a progress document.
pub type Document = Map<String, Value>;

/// Rotates through a fixed, ordered list of JSON documents.
#[derive(Debug)]
pub struct ProgressFeed {
    sources: Vec<PathBuf>,
    cursor: RingCursor,
}

impl ProgressFeed {
    /// Create a feed over `sources`, starting at the first one.
    pub const fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            cursor: RingCursor::new(),
        }
    }

    /// The configured source paths, in rotation order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Claim the next source path and advance the rotation.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::EmptyDataset`] if no sources are configured.
    pub fn claim_next(&self) -> Result<&Path, FeedError> {
        let index = self.cursor.claim(self.sources.len())?;
        self.sources
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(FeedError::EmptyDataset)
    }

    /// Read the next document in the rotation.
    ///
    /// The rotation advances before the file is touched; I/O happens
    /// outside the cursor lock.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::SourceUnavailable`] or
    /// [`FeedError::MalformedData`] for this call only, or
    /// [`FeedError::EmptyDataset`] if no sources are configured.
    pub fn next_document(&self) -> Result<Document, FeedError> {
        let path = self.claim_next()?;
        debug!(path = %path.display(), "Serving progress document");
        read_document(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Progress document unavailable");
        })
    }

    /// Index of the source the next call will read.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Read one JSON object from `path`.
///
/// # Errors
///
/// Returns [`FeedError::SourceUnavailable`] if the file cannot be opened,
/// or [`FeedError::MalformedData`] if it is not a JSON object.
pub fn read_document(path: &Path) -> Result<Document, FeedError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| FeedError::SourceUnavailable {
        origin: origin.clone(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| FeedError::MalformedData { origin, source })
}
