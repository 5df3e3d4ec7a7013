//! Configuration Module
//!
//! Cache construction parameters and the demo server settings loaded from
//! environment variables.

use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache Config ==
/// Construction-time parameters of a [`TtlCache`](crate::cache::TtlCache).
///
/// Consumed once when the cache is built; the cache never changes its bound
/// afterwards. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Soft capacity bound, `None` = unbounded
    pub max_size: Option<NonZeroUsize>,
}

impl CacheConfig {
    /// Unbounded cache.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Cache holding at most `max_size` entries (best effort).
    ///
    /// Fails with [`CacheError::InvalidConfig`] when `max_size` is zero.
    pub fn bounded(max_size: usize) -> Result<Self> {
        NonZeroUsize::new(max_size)
            .map(|max_size| Self {
                max_size: Some(max_size),
            })
            .ok_or_else(|| {
                CacheError::InvalidConfig("max_size must be greater than 0".to_string())
            })
    }

    /// Same as [`CacheConfig::bounded`] for signed input from outside the crate.
    pub fn with_max_size(max_size: i64) -> Result<Self> {
        if max_size <= 0 {
            return Err(CacheError::InvalidConfig(format!(
                "max_size must be greater than 0, got {}",
                max_size
            )));
        }

        let max_size = usize::try_from(max_size).map_err(|_| {
            CacheError::InvalidConfig(format!("max_size {} does not fit this platform", max_size))
        })?;
        Self::bounded(max_size)
    }
}

// == Server Config ==
/// Demo server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parameters for the shared cache
    pub cache: CacheConfig,
    /// TTL in milliseconds for `PUT /set` requests without an explicit TTL
    pub default_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Soft capacity bound (default: unbounded)
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// An explicit `CACHE_MAX_SIZE` that is not a positive integer is rejected
    /// rather than silently replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cache = match lookup("CACHE_MAX_SIZE").map(|v| v.trim().to_string()) {
            None => CacheConfig::unbounded(),
            Some(v) if v.is_empty() => CacheConfig::unbounded(),
            Some(v) => {
                let max_size: i64 = v.parse().map_err(|_| {
                    CacheError::InvalidConfig(format!("CACHE_MAX_SIZE is not an integer: {}", v))
                })?;
                CacheConfig::with_max_size(max_size)?
            }
        };

        Ok(Self {
            cache,
            default_ttl_ms: lookup("DEFAULT_TTL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl_ms),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        })
    }

    /// Default TTL as a Duration.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::unbounded(),
            default_ttl_ms: 300_000,
            server_port: 3000,
        }
    }
}
