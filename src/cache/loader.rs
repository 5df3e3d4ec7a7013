//! Get-or-load Module
//!
//! Read-through access: return the cached value or run a loader, cache what
//! it produced and return it.
//!
//! Concurrent calls that miss on the same key are not coalesced. Each caller
//! runs its own loader and the last `put` wins.

use std::any::Any;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::cache::TtlCache;

impl TtlCache {
    // == Get Or Load ==
    /// Returns the live `T` under `key`, or awaits `loader` on a miss.
    ///
    /// A loaded `Some(value)` is stored with `ttl` under the same rules as
    /// [`put`](TtlCache::put) (so a zero TTL or a full cache returns the value
    /// without caching it). `Ok(None)` caches nothing. A loader error is
    /// returned as is and leaves the cache untouched.
    ///
    /// No lock is held while the loader runs.
    pub async fn get_or_load<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> Result<Option<T>, E>
    where
        T: Any + Send + Sync + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        if let Some(value) = self.get::<T>(key) {
            return Ok(Some(value));
        }

        self.record_load();
        let loaded = loader().await?;
        Ok(self.store_loaded(key, ttl, loaded))
    }

    // == Get Or Compute ==
    /// Blocking counterpart of [`get_or_load`](TtlCache::get_or_load).
    pub fn get_or_compute<T, E, F>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> Result<Option<T>, E>
    where
        T: Any + Send + Sync + Clone,
        F: FnOnce() -> Result<Option<T>, E>,
    {
        if let Some(value) = self.get::<T>(key) {
            return Ok(Some(value));
        }

        self.record_load();
        let loaded = loader()?;
        Ok(self.store_loaded(key, ttl, loaded))
    }

    fn store_loaded<T>(&self, key: &str, ttl: Duration, loaded: Option<T>) -> Option<T>
    where
        T: Any + Send + Sync + Clone,
    {
        match loaded {
            Some(value) => {
                self.put(key, value.clone(), ttl);
                Some(value)
            }
            None => {
                debug!("Loader for '{}' produced no value", key);
                None
            }
        }
    }
}
