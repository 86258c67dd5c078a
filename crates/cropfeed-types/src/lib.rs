//! Shared type definitions for the Cropfeed service.
//!
//! The types mirror the recorded dataset document: a crop, its planting
//! date, and one set of environmental readings per day. They flow
//! downstream to `TypeScript` via `ts-rs` for dashboard consumers.
//!
//! # Modules
//!
//! - [`records`] -- Condition records, daily entries, and the dataset

pub mod records;

// Re-export all public types at crate root for convenience.
pub use records::{ConditionRecord, DailyEntry, Dataset};
