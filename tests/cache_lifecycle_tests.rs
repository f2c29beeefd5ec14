//! Integration Tests for the Cache Lifecycle
//!
//! Exercises the full cache through its public handle: miss/hit behavior,
//! overwrite semantics, reaper-driven expiry, concurrent callers, and
//! shutdown.

use std::sync::Arc;
use std::time::Duration;

use pokedex::Cache;

// == Helper Functions ==

/// A cache with short, equal TTL and tick for timing tests.
fn fast_cache(ttl_ms: u64) -> Cache {
    Cache::new(Duration::from_millis(ttl_ms))
}

// == Storage Semantics ==

#[tokio::test]
async fn test_miss_then_hit() {
    let cache = Cache::new(Duration::from_secs(300));

    assert_eq!(cache.get("https://example.com/k").await, None);

    cache.add("https://example.com/k", b"payload".to_vec()).await;

    assert_eq!(
        cache.get("https://example.com/k").await,
        Some(b"payload".to_vec())
    );
}

#[tokio::test]
async fn test_overwrite_returns_newer_bytes() {
    let cache = Cache::new(Duration::from_secs(300));

    cache.add("a", vec![9]).await;
    cache.add("a", vec![8]).await;

    assert_eq!(cache.get("a").await, Some(vec![8]));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_independent_keys() {
    let cache = Cache::new(Duration::from_secs(300));

    cache.add("k1", b"v1".to_vec()).await;
    cache.add("k2", b"v2".to_vec()).await;

    assert_eq!(cache.get("k1").await, Some(b"v1".to_vec()));
    assert_eq!(cache.get("k2").await, Some(b"v2".to_vec()));
}

// == Expiry ==

#[tokio::test]
async fn test_hit_before_expiry_miss_after() {
    // TTL = tick = 50ms; hit at ~10ms, miss by 120ms (the second tick at
    // ~100ms is guaranteed to reap the entry)
    let cache = fast_cache(50);

    cache.add("x", vec![1, 2, 3]).await;

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(cache.get("x").await, Some(vec![1, 2, 3]));

    tokio::time::sleep(Duration::from_millis(110)).await;
    assert_eq!(cache.get("x").await, None);
}

#[tokio::test]
async fn test_expiry_after_ttl_plus_tick() {
    let cache = fast_cache(60);

    cache.add("k", b"v".to_vec()).await;

    // Longer than TTL plus one full tick past expiry
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(cache.get("k").await, None);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_reaper_preserves_unexpired_entries() {
    // Tick much faster than the TTL: several passes run, nothing expires
    let cache = Cache::with_reap_interval(Duration::from_secs(60), Duration::from_millis(20));

    cache.add("stable", b"v".to_vec()).await;

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(cache.get("stable").await, Some(b"v".to_vec()));
}

#[tokio::test]
async fn test_readd_restarts_ttl_window() {
    let cache = fast_cache(80);

    cache.add("k", vec![1]).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Refresh before expiry; the entry gets a full window again
    cache.add("k", vec![2]).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.get("k").await, Some(vec![2]));
}

// == Concurrency ==

#[tokio::test]
async fn test_concurrent_callers_on_disjoint_keys() {
    let cache = Arc::new(Cache::new(Duration::from_secs(300)));
    let mut handles = vec![];

    for task_id in 0..8u32 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            for i in 0..50u32 {
                let key = format!("task-{}-key-{}", task_id, i);
                let value = format!("value-{}-{}", task_id, i).into_bytes();

                cache.add(key.clone(), value.clone()).await;

                // Every completed add is retrievable well before the TTL
                assert_eq!(cache.get(&key).await, Some(value));
            }
        }));
    }

    for handle in handles {
        handle.await.expect("caller task should not panic");
    }

    assert_eq!(cache.len().await, 8 * 50);
}

#[tokio::test]
async fn test_concurrent_writers_same_key_last_write_wins_eventually() {
    let cache = Arc::new(Cache::new(Duration::from_secs(300)));
    let mut handles = vec![];

    for i in 0..8u8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            cache.add("shared", vec![i]).await;
        }));
    }

    for handle in handles {
        handle.await.expect("writer task should not panic");
    }

    // Some complete write won, and it is a whole value, never torn
    let value = cache.get("shared").await.expect("key should exist");
    assert_eq!(value.len(), 1);
    assert!(value[0] < 8);
    assert_eq!(cache.len().await, 1);
}

// == Shutdown ==

#[tokio::test]
async fn test_shutdown_stops_reaper_promptly() {
    let cache = Cache::new(Duration::from_secs(3600));
    cache.add("k", b"v".to_vec()).await;

    // Even mid-sleep in a one-hour tick, shutdown must not hang
    tokio::time::timeout(Duration::from_secs(1), cache.shutdown())
        .await
        .expect("shutdown should complete promptly");
}

#[tokio::test]
async fn test_dropped_cache_does_not_block_runtime() {
    {
        let cache = fast_cache(10);
        cache.add("k", b"v".to_vec()).await;
        // Dropped here; the reaper is signaled and exits on its own
    }

    // Give the detached task a moment to observe the signal
    tokio::time::sleep(Duration::from_millis(50)).await;
}
