//! Expiry Reaper Task
//!
//! Background task that periodically removes expired pastes. The reaper is
//! not what makes expiry correct (the read path checks expiry itself); its
//! job is bounding memory. Delaying or pausing it never makes an expired
//! paste visible.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::PasteStore;

/// Runs one reaper sweep against the store as of `now`.
///
/// Takes a snapshot under a read lock, then deletes candidates under a write
/// lock, so no lock is held across the whole sweep and request handlers are
/// never blocked for its duration. Each delete re-checks expiry, so an entry
/// inserted or a code reused mid-sweep is never reaped while live.
///
/// `now` is injected rather than read inside so tests can drive a sweep
/// synchronously at any clock value.
///
/// # Returns
/// The number of entries removed.
pub async fn sweep_expired(store: &Arc<RwLock<PasteStore>>, now: DateTime<Utc>) -> usize {
    let candidates: Vec<String> = {
        let guard = store.read().await;
        guard
            .snapshot()
            .into_iter()
            .filter(|(_, expires_at)| now >= *expires_at)
            .map(|(code, _)| code)
            .collect()
    };

    if candidates.is_empty() {
        return 0;
    }

    let mut removed = 0;
    let mut guard = store.write().await;
    for code in candidates {
        if guard.remove_expired(&code, now) {
            removed += 1;
        }
    }
    removed
}

/// Spawns a background task that periodically reaps expired pastes.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `store` - Shared reference to the paste store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_reaper_task(
    store: Arc<RwLock<PasteStore>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry reaper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = sweep_expired(&store, Utc::now()).await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired pastes", removed);
            } else {
                debug!("Expiry sweep: no expired pastes found");
            }
        }
    })
}
