//! The shared rotation cursor.
//!
//! One integer decides which run the next page load shows. It is shared by
//! every client of the process and lives only as long as the process does.

use std::sync::Mutex;

/// Rotation pointer over the run directory list.
///
/// The select and the advance happen under a single lock acquisition, so
/// overlapping requests cannot lose an update or skip a run — each served
/// request gets a distinct position and moves the rotation forward exactly
/// once.
#[derive(Debug, Default)]
pub struct Cursor {
    index: Mutex<usize>,
}

impl Cursor {
    /// Starts at the first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index to display for this request and advances to the
    /// next position, wrapping past the end of a list of `len` runs.
    ///
    /// Returns `None` for an empty list. The run list is re-enumerated on
    /// every request, so a stored index can be out of range if runs were
    /// deleted since the last request; it wraps to the first run before use.
    pub fn select_and_advance(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut index = self.index.lock().expect("cursor lock poisoned");
        let current = if *index < len { *index } else { 0 };
        *index = if current + 1 < len { current + 1 } else { 0 };
        Some(current)
    }
}
