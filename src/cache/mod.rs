//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL and lazy expiration.

mod entry;
mod loader;
mod stats;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::{CacheEntry, StoredValue};
pub use stats::{CacheStats, StatsRecorder};
pub use store::EntryStore;
pub use ttl_cache::TtlCache;
