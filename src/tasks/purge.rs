//! Expired Entry Purge Task
//!
//! Expired entries are never served but stay in the store until overwritten.
//! This task drops them periodically so keys that are never read again do not
//! accumulate.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ReadThroughCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// # Arguments
/// * `cache` - Handle to the shared cache
/// * `purge_interval_secs` - Interval in seconds between purge runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = ReadThroughCache::default();
/// let purge_handle = spawn_purge_task(cache.clone(), 60);
/// // Later, during shutdown:
/// purge_handle.abort();
/// ```
pub fn spawn_purge_task<V>(cache: ReadThroughCache<V>, purge_interval_secs: u64) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(purge_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache purge task with interval of {} seconds",
            purge_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Cache purge: removed {} expired entries", removed);
            } else {
                debug!("Cache purge: no expired entries found");
            }
        }
    })
}
