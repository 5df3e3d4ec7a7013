//! Entry Store Module
//!
//! Sharded concurrent map from key to [`CacheEntry`].

use dashmap::DashMap;

use crate::cache::CacheEntry;

// == Entry Store ==
/// Thread-safe key to entry mapping.
///
/// Every method is a single map operation and is atomic for the key(s) it
/// touches. Operations on keys in different shards proceed in parallel.
/// Nothing here knows about TTLs beyond what a caller passes as a predicate.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: DashMap<String, CacheEntry>,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    // == Get ==
    /// Returns a copy of the entry stored under `key`.
    ///
    /// The shard lock is released before this returns.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    // == Put ==
    /// Stores `entry` under `key`, returning the entry it replaced.
    pub fn put(&self, key: String, entry: CacheEntry) -> Option<CacheEntry> {
        self.entries.insert(key, entry)
    }

    // == Remove ==
    /// Removes `key`, returning the entry if there was one.
    pub fn remove(&self, key: &str) -> Option<CacheEntry> {
        self.entries.remove(key).map(|(_, entry)| entry)
    }

    /// Removes `key` only while it still maps to `expected`.
    ///
    /// Returns false if the key is gone or was replaced in the meantime.
    pub fn remove_entry(&self, key: &str, expected: &CacheEntry) -> bool {
        self.entries
            .remove_if(key, |_, current| current.same_value(expected))
            .is_some()
    }

    // == Remove If ==
    /// Removes every entry matching `predicate` and returns how many went.
    pub fn remove_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&CacheEntry) -> bool,
    {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            if predicate(&*entry) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    // == Size ==
    /// Raw number of entries, expired ones included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
