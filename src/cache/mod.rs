//! Cache Module
//!
//! Provides an in-memory TTL cache of raw response bodies keyed by request URL.

mod clock;
mod entry;
mod store;
mod ttl_cache;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl_cache::TtlCache;
