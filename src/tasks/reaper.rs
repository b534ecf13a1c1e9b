//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{CacheStore, Clock};

/// Shortest sweep period; `tokio::time::interval` rejects a zero period.
const MIN_REAP_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns a task that sweeps `store` every `ttl` until told to stop.
///
/// Each tick takes the write lock and removes every entry created before
/// `clock.now() - ttl`. The task exits when `true` is sent on `shutdown_rx`
/// or when the sender is dropped.
///
/// # Arguments
/// * `store` - Shared cache store
/// * `clock` - Time source used to judge staleness
/// * `ttl` - Sweep interval and maximum entry age
/// * `shutdown_rx` - Watch receiver for the stop signal
///
/// # Returns
/// A JoinHandle that resolves once the loop has exited.
pub fn spawn_reaper(
    store: Arc<RwLock<CacheStore>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = ttl.max(MIN_REAP_INTERVAL);

    tokio::spawn(async move {
        info!(ttl_ms = ttl.as_millis() as u64, "Cache reaper started");

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; sweeps start one period in.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let now = clock.now();
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.reap(now, ttl)
                    };

                    if removed > 0 {
                        debug!(removed, "Cache sweep removed stale entries");
                    }
                }
            }
        }

        info!("Cache reaper shutting down");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use bytes::Bytes;
    use chrono::Utc;

    fn shared_store() -> Arc<RwLock<CacheStore>> {
        Arc::new(RwLock::new(CacheStore::new()))
    }

    #[tokio::test]
    async fn test_reaper_removes_stale_entries() {
        let store = shared_store();
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        {
            let mut guard = store.write().await;
            guard.add("stale", Bytes::from_static(b"a"), clock.now());
        }
        clock.advance(chrono::Duration::seconds(5));

        let handle = spawn_reaper(
            store.clone(),
            clock.clone(),
            Duration::from_millis(50),
            shutdown_rx,
        );

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(store.read().await.get("stale").is_none());

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_exits_on_signal() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(
            shared_store(),
            Arc::new(ManualClock::default()),
            Duration::from_secs(3600),
            shutdown_rx,
        );

        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should exit promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_exits_when_sender_dropped() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(
            shared_store(),
            Arc::new(ManualClock::default()),
            Duration::from_secs(3600),
            shutdown_rx,
        );

        drop(shutdown_tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should exit once the cache is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_accepts_zero_ttl() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(
            shared_store(),
            Arc::new(ManualClock::default()),
            Duration::ZERO,
            shutdown_rx,
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
