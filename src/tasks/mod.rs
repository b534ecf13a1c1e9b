//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - Cache reaper: Sweeps stale cache entries every TTL until stopped

mod reaper;

pub use reaper::spawn_reaper;
