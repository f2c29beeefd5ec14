//! Cache Store Module
//!
//! The locked interior of the cache: a HashMap of entries plus the single
//! TTL shared by all of them. Concurrency lives one level up, in
//! [`Cache`](crate::cache::Cache); every method here runs under that lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key/value storage with a fixed time-to-live for every entry.
///
/// Keys are opaque strings chosen by the caller (in practice, fully-resolved
/// request URLs, byte-for-byte, with no normalization). Values are opaque
/// byte payloads. There is no bound on entry count or total memory; entries
/// leave only by aging out or being overwritten. A TTL much larger than the
/// insertion rate warrants means the map grows until the reaper catches up,
/// so the TTL is an operational knob, not a safety limit.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live shared by all entries, fixed at construction
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or fully replaces the entry for `key`, stamping it with the
    /// current time.
    ///
    /// Cannot fail. Overwriting refreshes both the value and the timestamp,
    /// so a re-added entry gets a full TTL window again.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, or `None` if absent.
    ///
    /// Deliberately does not check expiry: an entry that has outlived the
    /// TTL but not yet been reaped is still returned. Staleness is bounded
    /// by the reaper interval, not enforced per lookup.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                debug!(key, age_ms = entry.age().as_millis() as u64, "cache hit");
                Some(entry.value.clone())
            }
            None => {
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the TTL.
    ///
    /// Collects the expired keys first, then removes them, so the map is
    /// never mutated mid-iteration. Returns the number of entries removed.
    pub fn reap(&mut self) -> usize {
        let now = Instant::now();

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.created_at) > self.ttl)
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == TTL ==
    /// Returns the TTL every entry in this store shares.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(Duration::from_secs(300));
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_store_miss_then_hit() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        assert_eq!(store.get("https://example.com/a"), None);

        store.add("https://example.com/a".to_string(), vec![1, 2, 3]);

        assert_eq!(store.get("https://example.com/a"), Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_replaces_value() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.add("a".to_string(), vec![9]);
        store.add("a".to_string(), vec![8]);

        assert_eq!(store.get("a"), Some(vec![8]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_independent_keys() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.add("k1".to_string(), b"v1".to_vec());
        store.add("k2".to_string(), b"v2".to_vec());

        assert_eq!(store.get("k1"), Some(b"v1".to_vec()));
        assert_eq!(store.get("k2"), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_store_get_returns_copy() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.add("k".to_string(), vec![1, 2, 3]);

        let mut first = store.get("k").unwrap();
        first.push(4);

        // Mutating the returned bytes must not touch the stored copy
        assert_eq!(store.get("k"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_store_reap_removes_only_expired() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.add("old".to_string(), vec![1]);
        sleep(Duration::from_millis(80));
        store.add("fresh".to_string(), vec![2]);

        let removed = store.reap();

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("fresh"), Some(vec![2]));
    }

    #[test]
    fn test_store_reap_empty() {
        let mut store = CacheStore::new(Duration::from_millis(50));
        assert_eq!(store.reap(), 0);
    }

    #[test]
    fn test_store_get_does_not_enforce_ttl() {
        let mut store = CacheStore::new(Duration::from_millis(20));

        store.add("k".to_string(), vec![7]);
        sleep(Duration::from_millis(50));

        // Expired but unreaped entries are still visible
        assert_eq!(store.get("k"), Some(vec![7]));

        store.reap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("k".to_string(), vec![1]);
        sleep(Duration::from_millis(60));
        store.add("k".to_string(), vec![2]);
        sleep(Duration::from_millis(60));

        // 120ms after the first add, but only 60ms after the refresh
        assert_eq!(store.reap(), 0);
        assert_eq!(store.get("k"), Some(vec![2]));
    }
}
