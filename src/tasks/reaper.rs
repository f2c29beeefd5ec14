//! Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! TTL. One reaper runs per cache instance, spawned at construction.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background reaper for a cache store.
///
/// The task sleeps for `reap_interval` between passes. Each pass takes the
/// write lock, removes every entry whose age exceeds the store's TTL, and
/// releases. The pass itself performs no I/O and cannot fail.
///
/// The task exits cleanly when `shutdown` fires, checked at each tick
/// boundary, so a dropped cache never leaks its reaper. Absent a shutdown
/// signal it runs for the life of the process.
///
/// # Arguments
/// * `store` - shared store, locked per pass
/// * `reap_interval` - time between passes; with the default construction
///   this equals the TTL, bounding staleness to one TTL window
/// * `shutdown` - watch receiver flipped to `true` by the owning cache
///
/// # Returns
/// A JoinHandle the owning cache awaits during explicit shutdown.
pub fn spawn_reaper_task(
    store: Arc<RwLock<CacheStore>>,
    reap_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(interval_ms = reap_interval.as_millis() as u64, "reaper started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(reap_interval) => {}
                _ = shutdown.changed() => {
                    debug!("reaper shutting down");
                    return;
                }
            }

            // Take the write lock only for the duration of one pass
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.reap()
            };

            if removed > 0 {
                info!(removed, "reaper removed expired entries");
            } else {
                debug!("reaper pass found no expired entries");
            }
        }
    })
}
