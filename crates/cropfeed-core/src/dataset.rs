//! Dataset store: load a recorded [`Dataset`] once at startup.
//!
//! The dataset document is JSON with the shape
//! `{crop_name, planting_date, daily_conditions: [{day, conditions}]}`.
//! Unknown keys are ignored; missing keys or wrong types are rejected as
//! [`FeedError::MalformedData`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use cropfeed_types::Dataset;
use tracing::{debug, info};

use crate::error::FeedError;

/// Origin label used for datasets decoded from in-memory bytes.
const MEMORY_ORIGIN: &str = "<memory>";

/// Origin label used for datasets decoded from an arbitrary reader.
const READER_ORIGIN: &str = "<reader>";

/// Load a dataset from a JSON file.
///
/// # Errors
///
/// Returns [`FeedError::SourceUnavailable`] if the file cannot be opened,
/// or [`FeedError::MalformedData`] if its content is not a dataset.
pub fn load(path: &Path) -> Result<Dataset, FeedError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| FeedError::SourceUnavailable {
        origin: origin.clone(),
        source,
    })?;

    let dataset = decode(BufReader::new(file), &origin)?;
    info!(
        path = %origin,
        crop_name = dataset.crop_name,
        planting_date = dataset.planting_date,
        entries = dataset.len(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Decode a dataset from any byte stream (embedded resource, HTTP body).
///
/// # Errors
///
/// Returns [`FeedError::SourceUnavailable`] if reading fails partway, or
/// [`FeedError::MalformedData`] if the content is not a dataset.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, FeedError> {
    decode(reader, READER_ORIGIN)
}

/// Decode a dataset from a byte slice.
///
/// # Errors
///
/// Returns [`FeedError::MalformedData`] if the bytes are not a dataset.
pub fn from_slice(bytes: &[u8]) -> Result<Dataset, FeedError> {
    serde_json::from_slice(bytes).map_err(|source| FeedError::MalformedData {
        origin: MEMORY_ORIGIN.to_owned(),
        source,
    })
}

/// Reject a dataset with no entries.
///
/// Startup calls this so the process never begins serving a dataset the
/// cursor cannot rotate over.
///
/// # Errors
///
/// Returns [`FeedError::EmptyDataset`] if `dataset` has no entries.
pub fn require_entries(dataset: Dataset) -> Result<Dataset, FeedError> {
    if dataset.is_empty() {
        return Err(FeedError::EmptyDataset);
    }
    Ok(dataset)
}

fn decode<R: Read>(reader: R, origin: &str) -> Result<Dataset, FeedError> {
    serde_json::from_reader(reader).map_err(|source| {
        debug!(origin, error = %source, "Dataset decode failed");
        // serde_json reports reader failures as I/O-category errors.
        if source.is_io() {
            FeedError::SourceUnavailable {
                origin: origin.to_owned(),
                source: source.into(),
            }
        } else {
            FeedError::MalformedData {
                origin: origin.to_owned(),
                source,
            }
        }
    })
}
