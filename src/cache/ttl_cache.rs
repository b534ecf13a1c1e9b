//! TTL Cache Module
//!
//! Shared handle over the cache store plus the background reaper that expires it.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStore, Clock, SystemClock};
use crate::tasks::spawn_reaper;

// == TTL Cache ==
/// Concurrent byte-keyed cache whose entries are swept once older than `ttl`.
///
/// The same duration is used as the sweep cadence and as the staleness
/// threshold. `get` never checks age itself; only the reaper removes entries.
pub struct TtlCache {
    /// Key-value storage shared with the reaper
    store: Arc<RwLock<CacheStore>>,
    /// Time source for entry stamps
    clock: Arc<dyn Clock>,
    /// Sweep interval and maximum age
    ttl: Duration,
    /// Signals the reaper to exit
    shutdown_tx: watch::Sender<bool>,
    /// Reaper task, taken by `stop`
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache whose stamps and sweeps read time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(store.clone(), clock.clone(), ttl, shutdown_rx);

        Self {
            store,
            clock,
            ttl,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, giving it a full TTL from now.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let now = self.clock.now();
        let mut store = self.store.write().await;
        store.add(key, value.into(), now);
    }

    // == Get ==
    /// Returns the stored bytes for `key` if present, regardless of age.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Stop ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// `add` and `get` keep working afterwards, but nothing expires anymore.
    /// Calling `stop` again is a no-op.
    pub async fn stop(&self) {
        // The receiver is gone once the reaper has exited; nothing to signal then.
        let _ = self.shutdown_tx.send(true);

        let handle = self.reaper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "Cache reaper did not shut down cleanly");
            }
            debug!("Cache reaper stopped");
        }
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache").field("ttl", &self.ttl).finish()
    }
}
