//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Type-erased value slot shared between the store and readers.
pub type StoredValue = Arc<dyn Any + Send + Sync>;

// == Cache Entry ==
/// A stored value and the monotonic instant at which it expires.
///
/// Entries are never mutated after construction. Replacing a key writes a new
/// entry; cloning one only bumps the reference count of the value.
#[derive(Clone)]
pub struct CacheEntry {
    /// The stored value
    value: StoredValue,
    /// Expiration instant, None = the TTL overflowed the clock and the entry never expires
    expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new<T>(value: T, ttl: Duration) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current instant is greater than or equal
    /// to its expiration instant.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    /// Returns the value if it is a `T`.
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// True if both entries share the same stored value allocation.
    pub fn same_value(&self, other: &CacheEntry) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    // == Time To Live ==
    /// Remaining TTL, or None if the entry never expires.
    ///
    /// Returns `Some(Duration::ZERO)` once the entry has expired.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("expires_at", &self.expires_at)
            .field("expired", &self.is_expired())
            .finish_non_exhaustive()
    }
}
