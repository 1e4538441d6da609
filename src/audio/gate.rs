//! Ordering between track loads and their background results.
//!
//! Every load takes a new id. A finished fetch may only touch the sink while
//! its id is still the latest, and that check runs under the same lock as
//! the clear that starts the next load, so a stale append can never land
//! after a newer clear.

use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct LoadGate {
    latest: Mutex<u64>,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        // The guarded value is a plain counter, a panic can't leave it torn
        self.latest.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts a new load. `on_begin` (clearing the sink) runs under the lock
    /// together with the id bump. Returns the new load's id.
    pub fn begin(&self, on_begin: impl FnOnce()) -> u64 {
        let mut latest = self.lock();
        on_begin();
        *latest += 1;
        *latest
    }

    /// Runs `commit` only if `id` is still the latest load, under the lock.
    /// Returns `None` when the load was superseded.
    pub fn commit_if_current<R>(&self, id: u64, commit: impl FnOnce() -> R) -> Option<R> {
        let latest = self.lock();
        if *latest != id {
            return None;
        }
        Some(commit())
    }

    /// Supersedes every outstanding load without starting a new one.
    pub fn invalidate(&self) {
        *self.lock() += 1;
    }

    #[cfg(test)]
    pub fn is_current(&self, id: u64) -> bool {
        *self.lock() == id
    }
}
