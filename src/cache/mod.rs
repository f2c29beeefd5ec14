//! Cache Module
//!
//! A generic, time-bounded, concurrency-safe key/value cache for opaque
//! byte payloads. Entries share a single TTL fixed at construction and are
//! purged by a background reaper owned by each [`Cache`] instance.
//!
//! The cache knows nothing about HTTP, JSON, or what the bytes mean; the
//! fetch layer stores raw response payloads here keyed by request URL.

mod entry;
mod handle;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;
