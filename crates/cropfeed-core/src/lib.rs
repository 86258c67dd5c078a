//! Core replay logic for the Cropfeed service.
//!
//! The service replays a recorded crop dataset one day per request. This
//! crate owns everything below the HTTP layer:
//!
//! - [`dataset`] -- Loading a [`Dataset`](cropfeed_types::Dataset) from a
//!   file or any byte source, once at startup
//! - [`cursor`] -- The shared round-robin cursor and the
//!   [`CursorServer`] that hands out one record per call
//! - [`progress`] -- A second, independent rotation over standalone JSON
//!   documents on disk
//! - [`config`] -- Typed configuration loaded from `cropfeed-config.yaml`
//! - [`error`] -- The [`FeedError`] taxonomy shared by all of the above

pub mod config;
pub mod cursor;
pub mod dataset;
pub mod error;
pub mod progress;

pub use config::{ConfigError, FeedConfig};
pub use cursor::{CursorServer, RingCursor};
pub use error::FeedError;
pub use progress::ProgressFeed;
