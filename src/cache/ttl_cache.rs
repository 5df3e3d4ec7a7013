//! TTL Cache Module
//!
//! Cache engine combining the concurrent entry store with lazy TTL expiration
//! and a soft capacity bound.

use std::any::{type_name, Any};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, EntryStore, StatsRecorder};
use crate::config::CacheConfig;

// == TTL Cache ==
/// In-memory key-value cache where every entry carries its own TTL.
///
/// Expired entries are not swept in the background. They stay in the store
/// until a [`get`](Self::get) on that key, a [`remove_expired`](Self::remove_expired)
/// sweep, an explicit [`remove`](Self::remove) or [`clear_cache`](Self::clear_cache).
///
/// Values of any `'static + Send + Sync` type can live side by side; reads name
/// the type they expect and a mismatch is treated as a miss.
///
/// All methods take `&self`; share the cache between threads or tasks with an
/// `Arc`. Single-key operations are atomic, compound ones (the capacity check
/// in [`put`](Self::put)) are not, so the bound is approximate under
/// concurrent writers.
#[derive(Debug)]
pub struct TtlCache {
    /// Key to entry storage
    store: EntryStore,
    /// Soft capacity bound, fixed at construction
    max_size: Option<NonZeroUsize>,
    /// Activity counters
    stats: StatsRecorder,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a cache from a validated configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            store: EntryStore::new(),
            max_size: config.max_size,
            stats: StatsRecorder::new(),
        }
    }

    /// Creates a cache with no capacity bound.
    pub fn unbounded() -> Self {
        Self::new(CacheConfig::unbounded())
    }

    /// The capacity bound, None = unbounded.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size.map(NonZeroUsize::get)
    }

    // == Size ==
    /// Current number of entries, including expired ones not yet purged.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn is_oversize(&self) -> bool {
        self.max_size
            .is_some_and(|max_size| self.store.size() >= max_size.get())
    }

    // == Put ==
    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    ///
    /// A zero `ttl` is ignored and leaves an existing entry untouched. When the
    /// cache is at its bound, expired entries are swept first; if it is still
    /// full the insert is dropped. Live entries are never evicted to make room.
    pub fn put<K, T>(&self, key: K, value: T, ttl: Duration)
    where
        K: Into<String>,
        T: Any + Send + Sync,
    {
        let key = key.into();

        if ttl.is_zero() {
            debug!("Ignoring put for '{}' with zero TTL", key);
            return;
        }

        if self.is_oversize() {
            self.remove_expired();
            if self.is_oversize() {
                self.stats.record_dropped_insert();
                debug!(
                    "Cache full ({} entries), dropping insert for '{}'",
                    self.store.size(),
                    key
                );
                return;
            }
        }

        self.store.put(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// Returns None when the key is absent, expired or holds a value of another
    /// type. The last two also remove the entry.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Send + Sync + Clone,
    {
        self.get_shared::<T>(key).map(|value| T::clone(&value))
    }

    /// Like [`get`](Self::get) but hands out the shared value without cloning it.
    pub fn get_shared<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.lookup::<T>(key).map(|(value, _)| value)
    }

    /// Like [`get`](Self::get) but also returns the remaining TTL.
    ///
    /// The TTL is None for entries whose expiry overflowed the clock.
    pub fn get_with_ttl<T>(&self, key: &str) -> Option<(T, Option<Duration>)>
    where
        T: Any + Send + Sync + Clone,
    {
        self.lookup::<T>(key)
            .map(|(value, entry)| (T::clone(&value), entry.ttl_remaining()))
    }

    fn lookup<T>(&self, key: &str) -> Option<(Arc<T>, CacheEntry)>
    where
        T: Any + Send + Sync,
    {
        let Some(entry) = self.store.get(key) else {
            self.stats.record_miss();
            trace!("Cache miss for '{}'", key);
            return None;
        };

        if entry.is_expired() {
            // Only drop the entry we saw; a concurrent put may have replaced it.
            if self.store.remove_entry(key, &entry) {
                self.stats.record_expirations(1);
            }
            self.stats.record_miss();
            debug!("Purged expired entry '{}' on read", key);
            return None;
        }

        match entry.downcast::<T>() {
            Some(value) => {
                self.stats.record_hit();
                trace!("Cache hit for '{}'", key);
                Some((value, entry))
            }
            None => {
                if self.store.remove_entry(key, &entry) {
                    self.stats.record_type_mismatch();
                }
                self.stats.record_miss();
                debug!(
                    "Purged entry '{}' holding a value that is not a {}",
                    key,
                    type_name::<T>()
                );
                None
            }
        }
    }

    // == Remove ==
    /// Deletes `key` if present.
    pub fn remove(&self, key: &str) {
        if self.store.remove(key).is_some() {
            trace!("Removed '{}'", key);
        }
    }

    // == Remove Expired ==
    /// Deletes every expired entry and returns how many were removed.
    ///
    /// Live entries are untouched.
    pub fn remove_expired(&self) -> usize {
        let removed = self.store.remove_if(CacheEntry::is_expired);
        self.stats.record_expirations(removed);

        if removed > 0 {
            debug!("Expired sweep: removed {} entries", removed);
        } else {
            trace!("Expired sweep: no expired entries found");
        }
        removed
    }

    // == Clear ==
    /// Deletes all entries regardless of expiry.
    pub fn clear_cache(&self) {
        self.store.clear();
        debug!("Cache cleared");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.store.size())
    }

    pub(crate) fn record_load(&self) {
        self.stats.record_load();
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
