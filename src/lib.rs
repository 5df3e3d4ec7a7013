//! TTL Cache - an in-memory key-value cache with per-entry TTL
//!
//! Entries expire lazily: nothing sweeps them in the background, they are
//! dropped when read after their TTL or when `remove_expired` is called.
//! An optional soft capacity bound rejects inserts while the cache is full of
//! live entries.
//!
//! ```
//! use std::time::Duration;
//! use ttl_cache::{CacheConfig, TtlCache};
//!
//! let cache = TtlCache::new(CacheConfig::bounded(100).unwrap());
//! cache.put("answer", 42u32, Duration::from_secs(60));
//!
//! assert_eq!(cache.get::<u32>("answer"), Some(42));
//! assert_eq!(cache.get::<String>("answer"), None);
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheStats, TtlCache};
pub use config::{CacheConfig, Config};
pub use error::{CacheError, Result};
