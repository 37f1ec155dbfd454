//! Cache Store Module
//!
//! The keyed payload map and its sweep. Callers serialize access through the
//! single mutex owned by [`Cache`](crate::cache::Cache); nothing in here locks.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-to-payload storage with a single shared staleness interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Entries keyed by fully-qualified request URL
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep counters
    stats: CacheStats,
    /// Both the sweep cadence and the staleness threshold
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose sweeps evict entries older than `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    // == Put ==
    /// Inserts or overwrites `key`, stamping the entry with `now`.
    ///
    /// Overwriting resets the entry's age.
    pub fn put(&mut self, key: String, value: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::new(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload stored for `key`, if any.
    ///
    /// Staleness is not checked here; entries live until a sweep removes them.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, interval));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
