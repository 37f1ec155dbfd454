//! Cache Module
//!
//! Provides the time-bound response cache: a mutex-guarded payload map plus a
//! background reaper that evicts stale entries once per interval.

mod entry;
mod handle;
mod stats;
mod store;


use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Lock Helper ==
/// Locks the store, recovering the guard if a previous holder panicked.
///
/// Every store operation leaves the map consistent between statements, so a
/// poisoned lock still guards valid data.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
