//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its creation timestamp.
///
/// The value is an opaque byte sequence owned by the cache; callers receive
/// clones and can never mutate the stored copy. The timestamp is monotonic
/// and only ever used for relative age comparison, so clock adjustments
/// cannot expire (or resurrect) entries.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload bytes
    pub value: Vec<u8>,
    /// Creation instant, refreshed on every overwrite
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry's age exceeds the given TTL.
    ///
    /// Strictly greater-than: an entry whose age equals the TTL exactly is
    /// still live, matching the reaper's removal condition.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
