//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, lazy expirations, dropped inserts and
//! loader invocations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed retrievals (absent, expired or wrong type)
    pub misses: u64,
    /// Number of expired entries purged by a lookup or a sweep
    pub expirations: u64,
    /// Number of live entries purged because the caller asked for another type
    pub type_mismatches: u64,
    /// Number of inserts dropped because the cache stayed full
    pub dropped_inserts: u64,
    /// Number of loader invocations made by get-or-load
    pub loads: u64,
    /// Current number of entries in the cache (expired ones included)
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters updated from any thread.
///
/// Counters are independent; a snapshot taken while other threads are
/// recording may mix values from slightly different moments.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
    type_mismatches: AtomicU64,
    dropped_inserts: AtomicU64,
    loads: AtomicU64,
}

impl StatsRecorder {
    /// Creates a recorder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_expirations(&self, count: usize) {
        self.expirations.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_type_mismatch(&self) {
        self.type_mismatches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_insert(&self) {
        self.dropped_inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the counters into a [`CacheStats`].
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            type_mismatches: self.type_mismatches.load(Ordering::Relaxed),
            dropped_inserts: self.dropped_inserts.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            total_entries,
        }
    }
}
