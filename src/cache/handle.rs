//! Cache Handle Module
//!
//! The public face of the cache: a concurrency-safe handle that owns the
//! shared store, the background reaper, and the reaper's shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// A time-bounded in-memory byte cache.
///
/// Construction spawns exactly one background reaper that periodically
/// removes entries older than the TTL. All operations are safe to call from
/// any number of concurrent tasks; the entry map is only ever touched under
/// a single lock, shared with the reaper.
///
/// Expiry is bounded-staleness, not strict: [`get`](Cache::get) returns an
/// entry that has outlived the TTL but not yet been reaped, so a lookup can
/// observe a value up to `ttl + reap_interval` old. With [`Cache::new`] the
/// reap interval equals the TTL, bounding staleness to one TTL window.
///
/// Dropping the cache signals the reaper, which exits at its next tick
/// boundary; no task outlives the instance that spawned it.
#[derive(Debug)]
pub struct Cache {
    /// Shared store, locked for both callers and the reaper
    store: Arc<RwLock<CacheStore>>,
    /// Shutdown signal observed by the reaper at each tick boundary
    shutdown_tx: watch::Sender<bool>,
    /// Reaper task handle, taken by `shutdown`
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl`, reaped on a period
    /// equal to `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self::with_reap_interval(ttl, ttl)
    }

    /// Creates a cache with the reaper tick decoupled from the TTL.
    ///
    /// A shorter `reap_interval` tightens the staleness window at the cost
    /// of more frequent lock acquisition; a longer one lets entries linger
    /// past the TTL for up to one full tick.
    pub fn with_reap_interval(ttl: Duration, reap_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper_task(Arc::clone(&store), reap_interval, shutdown_rx);

        Self {
            store,
            shutdown_tx,
            reaper: Some(reaper),
        }
    }

    // == Add ==
    /// Inserts or fully replaces the entry for `key` with `value`, stamped
    /// with the current time.
    ///
    /// Always succeeds. Replacing refreshes both the bytes and the entry's
    /// TTL window.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.write().await.add(key.into(), value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, or `None` if absent.
    ///
    /// Never blocks on I/O; the only contention is the internal lock. May
    /// return an entry that has exceeded the TTL but not yet been reaped
    /// (see the type-level staleness note).
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == TTL ==
    /// Returns the TTL every entry shares.
    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }

    // == Shutdown ==
    /// Signals the reaper and waits for it to exit.
    ///
    /// Dropping the cache also stops the reaper, but without waiting;
    /// `shutdown` gives deterministic teardown when callers need it.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.reaper.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // Wakes the reaper's select; the detached task then exits cleanly
        let _ = self.shutdown_tx.send(true);
    }
}
