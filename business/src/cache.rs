//! Entity cache with explicit TTL and invalidation.
//!
//! Clients receive the cache through their constructor as an
//! `Arc<dyn EntityCache<K, V>>`, so tests can hand in a [`TtlCache`] driven by a
//! [`FixedClock`] or any other implementation.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keyed cache of entities.
///
/// Implementations must never return an expired value from [`EntityCache::get`].
pub trait EntityCache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    fn insert(&self, key: K, value: V);

    fn invalidate(&self, key: &K);

    fn clear(&self);
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// In-memory [`EntityCache`] where every entry lives for `ttl`.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
    store: Mutex<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::zero()),
            clock,
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        Self::sweep(&mut self.lock(), now)
    }

    fn sweep(store: &mut HashMap<K, CacheEntry<V>>, now: DateTime<Utc>) -> usize {
        let before = store.len();
        store.retain(|_, entry| entry.expires_at > now);
        before - store.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> EntityCache<K, V> for TtlCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut store = self.lock();
        let entry = store.get(key)?;
        if entry.expires_at <= now {
            store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserting also sweeps expired entries, so keys that are never read
    /// again do not pile up.
    fn insert(&self, key: K, value: V) {
        let now = self.clock.now();
        let mut store = self.lock();
        Self::sweep(&mut store, now);
        store.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    fn invalidate(&self, key: &K) {
        self.lock().remove(key);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
