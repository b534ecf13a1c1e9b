//! Cache Store Module
//!
//! The map behind the TTL cache. Callers provide the lock and the clock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of raw response bodies keyed by request URL.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamped with `now`.
    ///
    /// Overwriting resets the entry's age to zero.
    pub fn add(&mut self, key: impl Into<String>, value: Bytes, now: DateTime<Utc>) {
        self.entries.insert(key.into(), CacheEntry::new(value, now));
    }

    // == Get ==
    /// Returns the stored bytes for `key`, regardless of age.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry created before `now - ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
