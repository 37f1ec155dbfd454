//! Cache Entry Module
//!
//! Defines a single memoized response payload and its insertion time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload paired with the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response body
    pub value: Bytes,
    /// Insertion time, from the tokio clock so paused-time tests can drive it
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether a sweep running at `now` should evict this entry.
    ///
    /// The comparison is strict: an entry exactly `interval` old survives.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[test]
    fn test_entry_age() {
        let t0 = Instant::now();
        let entry = CacheEntry::new(Bytes::from_static(b"AREA_DATA"), t0);

        assert_eq!(entry.age(t0), Duration::ZERO);
        assert_eq!(entry.age(t0 + Duration::from_secs(3)), Duration::from_secs(3));
    }

    #[test]
    fn test_age_saturates_before_creation() {
        let t0 = Instant::now();
        let entry = CacheEntry::new(Bytes::new(), t0 + Duration::from_secs(1));

        assert_eq!(entry.age(t0), Duration::ZERO);
    }

    #[test]
    fn test_fresh_entry_is_not_stale() {
        let t0 = Instant::now();
        let entry = CacheEntry::new(Bytes::from_static(b"v"), t0);

        assert!(!entry.is_stale(t0 + Duration::from_secs(1), INTERVAL));
    }

    #[test]
    fn test_staleness_boundary_is_strict() {
        let t0 = Instant::now();
        let entry = CacheEntry::new(Bytes::from_static(b"v"), t0);

        assert!(!entry.is_stale(t0 + INTERVAL, INTERVAL));
        assert!(entry.is_stale(t0 + INTERVAL + Duration::from_millis(1), INTERVAL));
    }
}
