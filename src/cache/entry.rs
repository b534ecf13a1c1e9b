//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A raw response body together with the moment it was stored.
///
/// Entries are never mutated in place; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// The stored bytes
    pub value: Bytes,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: Bytes, created_at: DateTime<Utc>) -> Self {
        Self { created_at, value }
    }

    // == Age ==
    /// Returns how long ago the entry was created, relative to `now`.
    ///
    /// An entry stamped in the future (clock skew) has age zero.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    // == Is Stale ==
    /// Checks whether the entry predates `now - ttl`.
    ///
    /// Boundary condition: an entry exactly `ttl` old is still kept; it becomes
    /// stale strictly after the TTL has elapsed.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
