//! Deduplication of concurrent thumbnail requests.
//!
//! The engine keys requests by source and size; whichever caller wins
//! `begin` generates the thumbnail, everyone else skips or waits for the
//! winner's result. `finish` must be called on every path out of a won
//! request, including failures.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Set of thumbnail request keys currently being generated.
#[derive(Debug, Default)]
pub struct InFlightSet {
    inner: Mutex<HashSet<String>>,
}

impl InFlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` in flight. Returns false if it already was, in which
    /// case the caller must not generate (and must not call `finish`).
    pub fn begin(&self, key: &str) -> bool {
        self.lock().insert(key.to_string())
    }

    /// Clears `key` after the winning request completes or fails.
    pub fn finish(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Number of requests currently in flight.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The set holds plain strings; a panic in another thread cannot leave it
    // inconsistent, so recover from poisoning instead of propagating.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
