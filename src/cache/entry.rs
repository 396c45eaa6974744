//! Cache Entry Module
//!
//! Defines a stored value together with the time it was written and its TTL.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A value memoized by the cache plus its freshness metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was written
    pub stored_at: Instant,
    /// How long the value stays servable
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self::with_stored_at(value, ttl, Instant::now())
    }

    /// Creates an entry stamped with an explicit write time.
    pub fn with_stored_at(value: V, ttl: Duration, stored_at: Instant) -> Self {
        Self {
            value,
            stored_at,
            ttl,
        }
    }

    // == Expires At ==
    /// Instant after which the entry is no longer servable.
    ///
    /// `None` when `stored_at + ttl` lies beyond what the clock can represent,
    /// in which case the entry never expires.
    pub fn expires_at(&self) -> Option<Instant> {
        self.stored_at.checked_add(self.ttl)
    }

    // == Freshness ==
    /// An entry is fresh while `now < expires_at`.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.expires_at().map_or(true, |expires_at| now < expires_at)
    }

    // == Time To Live ==
    /// Remaining lifetime as of `now`, zero once expired.
    pub fn ttl_remaining_at(&self, now: Instant) -> Duration {
        match self.expires_at() {
            Some(expires_at) => expires_at.saturating_duration_since(now),
            None => self.ttl,
        }
    }
}
