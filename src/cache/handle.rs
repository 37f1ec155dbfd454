//! Cache Handle Module
//!
//! The public cache object: synchronous `put`/`get` for foreground callers and
//! ownership of the reaper task that keeps the store bounded.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::{lock_store, CacheStats, CacheStore};
use crate::error::CacheError;
use crate::tasks::spawn_reaper;

// == Cache ==
/// Time-bound response cache keyed by request URL.
///
/// Every entry shares one `interval`, which is both how often the reaper
/// wakes and how old an entry must be before a sweep removes it. Residency
/// is therefore at least `interval` and less than `2 * interval`.
///
/// All operations take the same exclusive lock, so each `put`, `get` and
/// sweep is atomic with respect to the others.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    shutdown: CancellationToken,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current runtime.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero
    /// - [`CacheError::NoRuntime`] if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reaper(&runtime, store.clone(), interval, shutdown.clone());

        Ok(Self {
            store,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "Cache put");
        lock_store(&self.store).put(key, value, Instant::now());
    }

    // == Get ==
    /// Returns the payload cached for `key`.
    ///
    /// `None` covers both keys that were never stored and keys already
    /// evicted; callers treat either as "fetch from the origin".
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let value = lock_store(&self.store).get(key);
        debug!(key, hit = value.is_some(), "Cache get");
        value
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        lock_store(&self.store).stats()
    }

    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    // == Close ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Idempotent. Entries already cached stay readable, but nothing will
    /// evict them any more.
    pub async fn close(&self) {
        self.shutdown.cancel();

        let reaper = self
            .reaper
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();

        if let Some(handle) = reaper {
            if let Err(e) = handle.await {
                warn!(error = %e, "Cache reaper exited abnormally");
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // Lets the reaper finish on its next wake-up even without close()
        self.shutdown.cancel();
    }
}
