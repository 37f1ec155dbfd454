//! Cache Reaper Task
//!
//! Background task that periodically evicts stale cache entries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore};

/// Spawns the reaper for `store` on the given runtime.
///
/// The task sleeps for `interval`, sweeps the store under its lock, and
/// repeats. The shutdown token is checked at every wake-up; once it is
/// cancelled the task finishes without sweeping again. Because eviction
/// only happens on wake-ups, an entry stays cached for at least `interval`
/// and strictly less than twice `interval`.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(interval)));
/// let shutdown = CancellationToken::new();
/// let handle = spawn_reaper(&Handle::current(), store.clone(), interval, shutdown.clone());
/// // Later:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_reaper(
    runtime: &Handle,
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "Cache reaper started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            // Guard is dropped at the end of this block, before any logging
            let removed = {
                let mut guard = lock_store(&store);
                guard.sweep(Instant::now())
            };

            if removed > 0 {
                info!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }

        debug!("Cache reaper stopped");
    })
}
