//! Read-Through Cache Module
//!
//! Main cache engine: a HashMap of TTL-stamped entries plus a registry of
//! in-flight loads, behind a single lock that is never held across a
//! producer's await.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::FutureExt;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::inflight::{InFlightRegistry, LoadResult};
use crate::cache::{validate_key, CacheEntry, CacheStats, DEFAULT_TTL};
use crate::error::{CacheError, Result};

// == Shared State ==
struct Inner<V> {
    /// Stored values, expired ones included until overwritten or purged
    entries: HashMap<String, CacheEntry<V>>,
    /// Pending producer calls
    in_flight: InFlightRegistry<V>,
    /// Diagnostic counters
    stats: CacheStats,
}

impl<V: Clone> Inner<V> {
    fn fresh_value(&self, key: &str, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh_at(now))
            .map(|entry| entry.value.clone())
    }
}

// == Read-Through Cache ==
/// In-memory read-through cache.
///
/// Cloning is cheap and every clone shares the same store, so one instance
/// built at startup can be handed to every caller.
pub struct ReadThroughCache<V = Value> {
    inner: Arc<RwLock<Inner<V>>>,
    default_ttl: Duration,
}

impl<V> Clone for ReadThroughCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            default_ttl: self.default_ttl,
        }
    }
}

impl<V> std::fmt::Debug for ReadThroughCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadThroughCache")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl<V> Default for ReadThroughCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V> ReadThroughCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL used when a caller passes `None`
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: HashMap::new(),
                in_flight: InFlightRegistry::default(),
                stats: CacheStats::new(),
            })),
            default_ttl,
        }
    }

    /// Rejects a zero TTL and one whose expiry the clock cannot represent.
    fn resolve_ttl(&self, ttl: Option<Duration>) -> Result<Duration> {
        match ttl.unwrap_or(self.default_ttl) {
            ttl if ttl.is_zero() => Err(CacheError::InvalidTtl),
            ttl if Instant::now().checked_add(ttl).is_none() => Err(CacheError::InvalidTtl),
            ttl => Ok(ttl),
        }
    }

    // == Get ==
    /// Returns the stored value if it is still fresh.
    ///
    /// A stale entry is left in place; the next write overwrites it.
    pub async fn get(&self, key: &str) -> Result<Option<V>> {
        validate_key(key)?;

        let mut inner = self.inner.write().await;
        let value = inner.fresh_value(key, Instant::now());
        if value.is_some() {
            inner.stats.record_hit();
        } else {
            inner.stats.record_miss();
        }
        Ok(value)
    }

    // == Peek ==
    /// Returns a fresh value with its remaining lifetime, without touching
    /// the counters.
    pub async fn peek(&self, key: &str) -> Result<Option<(V, Duration)>> {
        validate_key(key)?;

        let now = Instant::now();
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .get(key)
            .filter(|entry| entry.is_fresh_at(now))
            .map(|entry| (entry.value.clone(), entry.ttl_remaining_at(now))))
    }

    /// Checks for a fresh entry without touching the counters.
    pub async fn contains_fresh(&self, key: &str) -> bool {
        let inner = self.inner.read().await;
        inner.fresh_value(key, Instant::now()).is_some()
    }

    // == Set ==
    /// Stores a value, replacing any prior entry for the key.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if None)
    pub async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<()> {
        validate_key(key)?;
        let ttl = self.resolve_ttl(ttl)?;

        let mut inner = self.inner.write().await;
        inner.entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }

    // == Get Or Load ==
    /// Returns a fresh cached value, joins a pending load for the key, or
    /// invokes `producer` and caches its result.
    ///
    /// At most one producer call is in flight per key. Every caller joined on
    /// a load observes the same value or the same error; a failed load leaves
    /// nothing behind, so the next call invokes its producer again.
    pub async fn get_or_load<F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        validate_key(key)?;
        let ttl = self.resolve_ttl(ttl)?;

        let load = {
            let mut inner = self.inner.write().await;

            if let Some(value) = inner.fresh_value(key, Instant::now()) {
                inner.stats.record_hit();
                return Ok(value);
            }
            inner.stats.record_miss();

            match inner.in_flight.join(key) {
                Some(load) => {
                    inner.stats.record_coalesced();
                    debug!(key, "joining in-flight load");
                    load
                }
                None => {
                    inner.stats.record_load();
                    let generation = inner.in_flight.next_generation();
                    let load = settle(
                        Arc::downgrade(&self.inner),
                        key.to_string(),
                        generation,
                        ttl,
                        producer(),
                    )
                    .boxed()
                    .shared();
                    inner
                        .in_flight
                        .register(key.to_string(), generation, load.clone());
                    debug!(key, generation, "starting load");
                    load
                }
            }
        };

        load.await.map_err(CacheError::Load)
    }

    // == Delete ==
    /// Removes the entry and any in-flight record for the key.
    ///
    /// No-op if the key is absent. Callers already awaiting a load still get
    /// its result, but that result is not written back.
    pub async fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;

        let mut inner = self.inner.write().await;
        let removed_entry = inner.entries.remove(key).is_some();
        let removed_load = inner.in_flight.remove(key);
        if removed_entry || removed_load {
            debug!(key, removed_entry, removed_load, "invalidated cache key");
        }
        Ok(())
    }

    /// Alias of [`delete`](Self::delete), for callers reacting to a mutation.
    pub async fn invalidate(&self, key: &str) -> Result<()> {
        self.delete(key).await
    }

    // == Clear ==
    /// Removes all entries and in-flight records.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        let entries = inner.entries.len();
        inner.entries.clear();
        inner.in_flight.clear();
        debug!(entries, "cleared cache");
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.total_entries = inner.entries.len();
        stats.in_flight = inner.in_flight.len();
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut inner = self.inner.write().await;
        let now = Instant::now();
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| entry.is_fresh_at(now));
        before - inner.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

/// Drives one producer call and records its outcome.
///
/// Holds the store weakly so a pending load does not keep a dropped cache
/// alive.
async fn settle<V, Fut>(
    inner: Weak<RwLock<Inner<V>>>,
    key: String,
    generation: u64,
    ttl: Duration,
    producer: Fut,
) -> LoadResult<V>
where
    V: Clone + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
{
    let result = producer.await.map_err(Arc::new);

    let Some(inner) = inner.upgrade() else {
        return result;
    };
    let mut inner = inner.write().await;
    let current = inner.in_flight.settle(&key, generation);

    match &result {
        Ok(value) if current => {
            inner
                .entries
                .insert(key, CacheEntry::new(value.clone(), ttl));
        }
        Ok(_) => {
            debug!(key = %key, generation, "load was invalidated, result not stored");
        }
        Err(err) => {
            inner.stats.record_load_failure();
            warn!(key = %key, generation, error = %err, "load failed");
        }
    }

    result
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cache() -> ReadThroughCache {
        ReadThroughCache::new(Duration::from_secs(300))
    }

    /// Producer that counts invocations and resolves after a short delay.
    fn counted(
        calls: &Arc<AtomicUsize>,
        value: Value,
    ) -> impl FnOnce() -> futures::future::BoxFuture<'static, anyhow::Result<Value>> {
        let calls = Arc::clone(calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(value)
            }
            .boxed()
        }
    }

    fn failing(
        calls: &Arc<AtomicUsize>,
    ) -> impl FnOnce() -> futures::future::BoxFuture<'static, anyhow::Result<Value>> {
        let calls = Arc::clone(calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Err(anyhow::anyhow!("backend unavailable"))
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = cache();

        cache.set("key1", json!("value1"), None).await.unwrap();
        assert_eq!(cache.get("key1").await.unwrap(), Some(json!("value1")));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = cache();
        assert_eq!(cache.get("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let cache = cache();

        cache.set("key1", json!(1), None).await.unwrap();
        cache.set("key1", json!(2), None).await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap(), Some(json!(2)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_a_expiry() {
        let cache = cache();

        cache
            .set("x", json!(42), Some(Duration::from_millis(1000)))
            .await
            .unwrap();
        assert_eq!(cache.get("x").await.unwrap(), Some(json!(42)));

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(cache.get("x").await.unwrap(), None);
        // Stale entry stays until overwritten or purged
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_expiry() {
        let cache = cache();
        let ttl = Some(Duration::from_millis(1000));

        cache.set("x", json!(1), ttl).await.unwrap();
        tokio::time::advance(Duration::from_millis(800)).await;
        cache.set("x", json!(2), ttl).await.unwrap();
        tokio::time::advance(Duration::from_millis(800)).await;

        assert_eq!(cache.get("x").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_ttl_applies() {
        let cache: ReadThroughCache = ReadThroughCache::new(Duration::from_secs(10));

        cache.set("x", json!(true), None).await.unwrap();
        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(cache.contains_fresh("x").await);
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!cache.contains_fresh("x").await);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let cache = cache();

        assert!(matches!(
            cache.get("").await,
            Err(CacheError::InvalidKey(_))
        ));
        assert!(matches!(
            cache.set("", json!(1), None).await,
            Err(CacheError::InvalidKey(_))
        ));
        assert!(matches!(
            cache.set("k", json!(1), Some(Duration::ZERO)).await,
            Err(CacheError::InvalidTtl)
        ));
        assert!(matches!(
            cache.delete("").await,
            Err(CacheError::InvalidKey(_))
        ));

        let calls = Arc::new(AtomicUsize::new(0));
        let result = cache.get_or_load("", counted(&calls, json!(1)), None).await;
        assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_rejected() {
        let cache = cache();

        assert!(matches!(
            cache.set("k", json!(1), Some(Duration::MAX)).await,
            Err(CacheError::InvalidTtl)
        ));
        assert_eq!(cache.get("k").await.unwrap(), None);

        let calls = Arc::new(AtomicUsize::new(0));
        let result = cache
            .get_or_load("k", counted(&calls, json!(1)), Some(Duration::MAX))
            .await;
        assert!(matches!(result, Err(CacheError::InvalidTtl)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // The key stays usable with a sane TTL
        cache.set("k", json!(2), Some(Duration::from_secs(60))).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_peek_reports_remaining_ttl() {
        let cache = cache();
        assert_eq!(cache.peek("k").await.unwrap(), None);

        cache.set("k", json!("v"), Some(Duration::from_secs(60))).await.unwrap();
        tokio::time::advance(Duration::from_secs(15)).await;

        let (value, remaining) = cache.peek("k").await.unwrap().unwrap();
        assert_eq!(value, json!("v"));
        assert_eq!(remaining, Duration::from_secs(45));

        tokio::time::advance(Duration::from_secs(45)).await;
        assert_eq!(cache.peek("k").await.unwrap(), None);

        let stats = cache.stats().await;
        assert_eq!(stats.hits + stats.misses, 0, "peek must not touch counters");
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_or_load_serves_fresh_entry() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        cache.set("y", json!("cached"), None).await.unwrap();
        let value = cache
            .get_or_load("y", counted(&calls, json!("fetched")), None)
            .await
            .unwrap();

        assert_eq!(value, json!("cached"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_or_load_stores_result() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        let value = cache
            .get_or_load("y", counted(&calls, json!([1, 2])), None)
            .await
            .unwrap();
        assert_eq!(value, json!([1, 2]));
        assert_eq!(cache.get("y").await.unwrap(), Some(json!([1, 2])));

        let again = cache
            .get_or_load("y", counted(&calls, json!("other")), None)
            .await
            .unwrap();
        assert_eq!(again, json!([1, 2]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats().await.in_flight, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_b_concurrent_loads_coalesce() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let ttl = Some(Duration::from_millis(500));

        let (a, b, c) = tokio::join!(
            cache.get_or_load("y", counted(&calls, json!("y-value")), ttl),
            cache.get_or_load("y", counted(&calls, json!("y-value")), ttl),
            cache.get_or_load("y", counted(&calls, json!("y-value")), ttl),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap(), json!("y-value"));
        assert_eq!(b.unwrap(), json!("y-value"));
        assert_eq!(c.unwrap(), json!("y-value"));

        let stats = cache.stats().await;
        assert_eq!(stats.loads, 1);
        assert_eq!(stats.coalesced, 2);
    }

    #[tokio::test]
    async fn test_joined_caller_waits_for_load() {
        use tokio_test::{assert_pending, assert_ready_ok, task};

        let cache = cache();
        let (tx, rx) = tokio::sync::oneshot::channel::<Value>();

        let mut leader = task::spawn(cache.get_or_load(
            "k",
            move || async move { Ok(rx.await?) },
            None,
        ));
        assert_pending!(leader.poll());

        let mut follower = task::spawn(cache.get_or_load(
            "k",
            || async { Ok(json!("never used")) },
            None,
        ));
        assert_pending!(follower.poll());

        tx.send(json!("done")).unwrap();

        assert_eq!(assert_ready_ok!(follower.poll()), json!("done"));
        assert_eq!(assert_ready_ok!(leader.poll()), json!("done"));
        assert_eq!(cache.stats().await.coalesced, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_failure_is_shared() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.get_or_load("y", failing(&calls), None),
            cache.get_or_load("y", failing(&calls), None),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let a = a.unwrap_err();
        let b = b.unwrap_err();
        assert!(Arc::ptr_eq(a.load_error().unwrap(), b.load_error().unwrap()));
        assert!(a.to_string().contains("backend unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_failure() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        let result = cache.get_or_load("k", failing(&calls), None).await;
        assert!(matches!(result, Err(CacheError::Load(_))));
        assert_eq!(cache.get("k").await.unwrap(), None);

        let value = cache
            .get_or_load("k", counted(&calls, json!("ok")), None)
            .await
            .unwrap();
        assert_eq!(value, json!("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let stats = cache.stats().await;
        assert_eq!(stats.load_failures, 1);
        assert_eq!(stats.in_flight, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_reloads() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let ttl = Some(Duration::from_millis(100));

        cache
            .get_or_load("k", counted(&calls, json!(1)), ttl)
            .await
            .unwrap();
        tokio::time::advance(Duration::from_millis(200)).await;
        let value = cache
            .get_or_load("k", counted(&calls, json!(2)), ttl)
            .await
            .unwrap();

        assert_eq!(value, json!(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_c_delete_then_load() {
        let cache = cache();
        let ttl = Some(Duration::from_millis(1000));

        cache.set("z", json!({"a": 1}), ttl).await.unwrap();
        cache.delete("z").await.unwrap();
        assert_eq!(cache.get("z").await.unwrap(), None);

        let value = cache
            .get_or_load("z", || async { Ok(json!({"a": 2})) }, ttl)
            .await
            .unwrap();
        assert_eq!(value, json!({"a": 2}));
    }

    #[tokio::test]
    async fn test_delete_absent_is_noop() {
        let cache = cache();
        cache.delete("missing").await.unwrap();
        cache.invalidate("missing").await.unwrap();
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_during_load_discards_result() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        let loading = cache.get_or_load("k", counted(&calls, json!("stale")), None);
        let invalidate = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            cache.invalidate("k").await.unwrap();
        };
        let (value, ()) = tokio::join!(loading, invalidate);

        // The joined caller still gets its value; the store does not
        assert_eq!(value.unwrap(), json!("stale"));
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert_eq!(cache.stats().await.in_flight, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_load_does_not_clear_newer_load() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache.get_or_load("k", counted(&calls, json!("first")), None);
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            cache.invalidate("k").await.unwrap();
            // Starts a fresh load that settles after the first one
            cache
                .get_or_load(
                    "k",
                    || async {
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        Ok(json!("second"))
                    },
                    None,
                )
                .await
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.unwrap(), json!("first"));
        assert_eq!(second.unwrap(), json!("second"));
        assert_eq!(cache.get("k").await.unwrap(), Some(json!("second")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_completes_when_starter_is_dropped() {
        let cache = cache();
        let calls = Arc::new(AtomicUsize::new(0));

        // Poll the first caller just long enough to register the load
        let abandoned = tokio::time::timeout(
            Duration::from_millis(10),
            cache.get_or_load("k", counted(&calls, json!("v")), None),
        )
        .await;
        assert!(abandoned.is_err());
        assert_eq!(cache.stats().await.in_flight, 1);

        let value = cache
            .get_or_load("k", counted(&calls, json!("other")), None)
            .await
            .unwrap();
        assert_eq!(value, json!("v"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_wipes_all() {
        let cache = cache();
        for i in 0..5 {
            cache.set(&format!("k{}", i), json!(i), None).await.unwrap();
        }

        cache.clear().await;

        for i in 0..5 {
            assert_eq!(cache.get(&format!("k{}", i)).await.unwrap(), None);
        }
        assert_eq!(cache.stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_stats() {
        let cache = cache();

        cache.set("key1", json!(1), None).await.unwrap();
        cache.get("key1").await.unwrap(); // hit
        cache.get("nonexistent").await.unwrap(); // miss

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_expired() {
        let cache = cache();

        cache
            .set("short", json!(1), Some(Duration::from_secs(1)))
            .await
            .unwrap();
        cache
            .set("long", json!(2), Some(Duration::from_secs(10)))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("long").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = cache();
        let other = cache.clone();

        cache.set("shared", json!("yes"), None).await.unwrap();
        assert_eq!(other.get("shared").await.unwrap(), Some(json!("yes")));
    }
}
