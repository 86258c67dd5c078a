//! Round-robin cursor and the record-serving [`CursorServer`].
//!
//! # Concurrency
//!
//! [`RingCursor::claim`] is the only place the cursor is read or written.
//! It takes the lock, records the current position, stores the next one,
//! and releases the lock before returning. Two concurrent claims can never
//! observe the same position, and no advance is lost.
//!
//! The dataset behind a [`CursorServer`] is immutable after load, so the
//! record at a claimed position can be cloned after the lock is released.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cropfeed_types::{ConditionRecord, DailyEntry, Dataset};

use crate::error::FeedError;

/// A position in a fixed-length ring, advanced under a mutex.
///
/// The ring length is supplied on each claim rather than stored, so one
/// cursor type serves both the dataset and the progress document list.
#[derive(Debug, Default)]
pub struct RingCursor {
    /// Next position to hand out. Always `< len` once a claim succeeds.
    position: Mutex<usize>,
}

impl RingCursor {
    /// Create a cursor at position 0.
    pub const fn new() -> Self {
        Self {
            position: Mutex::new(0),
        }
    }

    /// Claim the current position and advance by one, wrapping at `len`.
    ///
    /// Returns the position as it was before the advance.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::EmptyDataset`] if `len` is zero. The cursor is
    /// left untouched in that case.
    pub fn claim(&self, len: usize) -> Result<usize, FeedError> {
        let mut position = self.lock();
        let current = *position;
        *position = wrap_next(current, len).ok_or(FeedError::EmptyDataset)?;
        Ok(current)
    }

    /// The position the next claim will return.
    pub fn position(&self) -> usize {
        *self.lock()
    }

    /// A panic while holding the lock cannot leave a `usize` half-written,
    /// so a poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Position after `current` in a ring of `len` slots, or `None` if `len` is 0.
fn wrap_next(current: usize, len: usize) -> Option<usize> {
    current.checked_add(1)?.checked_rem(len)
}

/// Serves the recorded dataset one entry per call, in order, forever.
///
/// Constructed once at startup and shared by handle with every request
/// handler. Independent instances never share a cursor.
#[derive(Debug)]
pub struct CursorServer {
    dataset: Arc<Dataset>,
    cursor: RingCursor,
}

impl CursorServer {
    /// Create a server over `dataset` with the cursor at the first entry.
    pub const fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            cursor: RingCursor::new(),
        }
    }

    /// The dataset being replayed.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Return the entry under the cursor and advance it.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::EmptyDataset`] if the dataset has no entries.
    pub fn next_entry(&self) -> Result<DailyEntry, FeedError> {
        let index = self.cursor.claim(self.dataset.len())?;
        // `claim` only returns positions below the dataset length.
        self.dataset
            .entry(index)
            .cloned()
            .ok_or(FeedError::EmptyDataset)
    }

    /// Return the condition record under the cursor and advance it.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::EmptyDataset`] if the dataset has no entries.
    pub fn next_record(&self) -> Result<ConditionRecord, FeedError> {
        self.next_entry().map(|entry| entry.conditions)
    }

    /// Index of the entry the next call will return.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}
