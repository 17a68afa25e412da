//! Time-based memoization for slow-changing resources
//!
//! [`TtlCache`] is a single-purpose memoizer, not a general cache: one
//! value per string key, refreshed lazily after its TTL elapses. There is
//! no capacity bound, no eviction, and no invalidation API. Each client
//! instance owns its own cache; nothing here is global.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One stored value and its expiry
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// A string-keyed memoizing cache with per-entry TTL
///
/// `get_or_set` returns the stored value while it is fresh and invokes the
/// supplied producer otherwise. Concurrent misses on the same key are
/// collapsed to a single producer invocation: late arrivals wait on a
/// per-key gate and reuse the value the winner stored.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    /// Per-key gates serializing producer invocations
    gates: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Return the fresh value for `key`, producing and storing it if absent
    /// or expired
    ///
    /// On a fresh hit the producer is not invoked. On a miss the producer
    /// runs, its result is stored with `expires_at = now + ttl`
    /// (overwriting any stale entry), and the result is returned. A failed
    /// producer writes nothing: the next call invokes it again, and any
    /// prior expiry is left untouched.
    pub async fn get_or_set<F, Fut, E>(&self, key: &str, ttl: Duration, produce: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        let gate = self.gate(key);
        let _guard = gate.lock().await;

        // A concurrent caller may have filled the entry while we waited
        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        let value = produce().await?;

        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(value)
    }

    fn lookup(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    fn gate(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut gates = self.gates.lock();
        gates.entry(key.to_string()).or_default().clone()
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counting_producer(calls: &AtomicUsize) -> Result<usize, String> {
        Ok(calls.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn failing_producer(calls: &AtomicUsize) -> Result<usize, String> {
        calls.fetch_add(1, Ordering::SeqCst);
        Err("boom".to_string())
    }

    async fn slow_producer(calls: &AtomicUsize) -> Result<String, String> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok("value".to_string())
    }

    #[tokio::test]
    async fn test_hit_skips_producer() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);
        let ttl = Duration::from_secs(10);

        let first = cache
            .get_or_set("k", ttl, || counting_producer(&calls))
            .await
            .unwrap();
        let second = cache
            .get_or_set("k", ttl, || counting_producer(&calls))
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expiry_triggers_refetch() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        cache
            .get_or_set("k", Duration::ZERO, || counting_producer(&calls))
            .await
            .unwrap();
        let second = cache
            .get_or_set("k", Duration::ZERO, || counting_producer(&calls))
            .await
            .unwrap();

        assert_eq!(second, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let cache: TtlCache<usize> = TtlCache::new();
        let calls = AtomicUsize::new(0);
        let ttl = Duration::from_secs(10);

        let failed = cache
            .get_or_set("k", ttl, || failing_producer(&calls))
            .await;
        assert!(failed.is_err());

        let recovered = cache
            .get_or_set("k", ttl, || counting_producer(&calls))
            .await
            .unwrap();
        assert_eq!(recovered, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);
        let ttl = Duration::from_secs(10);

        cache
            .get_or_set("a", ttl, || counting_producer(&calls))
            .await
            .unwrap();
        cache
            .get_or_set("b", ttl, || counting_producer(&calls))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_producer_call() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);
        let ttl = Duration::from_secs(10);

        let (first, second) = tokio::join!(
            cache.get_or_set("k", ttl, || slow_producer(&calls)),
            cache.get_or_set("k", ttl, || slow_producer(&calls)),
        );

        assert_eq!(first.unwrap(), "value");
        assert_eq!(second.unwrap(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_entry() {
        let cache = TtlCache::new();

        cache
            .get_or_set("k", Duration::ZERO, || async { Ok::<_, String>(1) })
            .await
            .unwrap();
        let refreshed = cache
            .get_or_set("k", Duration::from_secs(10), || async { Ok::<_, String>(2) })
            .await
            .unwrap();
        let hit = cache
            .get_or_set("k", Duration::from_secs(10), || async { Ok::<_, String>(3) })
            .await
            .unwrap();

        assert_eq!(refreshed, 2);
        assert_eq!(hit, 2);
    }
}
