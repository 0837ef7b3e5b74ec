//! Grouped concurrent fan-out over per-member fetches.
//!
//! The FPL API throttles aggressively, so per-member requests run in small
//! groups with a pause between groups. A failed item is logged and dropped
//! from the result map; it never aborts its siblings or the run.

use fpl_core::Result;
use futures::future::join_all;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Batch fan-out configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of requests in flight per group
    pub group_size: usize,
    /// Pause between groups (never after the last)
    pub pause: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            group_size: 4,
            pause: Duration::from_millis(500),
        }
    }
}

/// Runs `op` for every entry id, `group_size` at a time.
///
/// Groups are processed strictly in sequence; within a group all operations
/// run concurrently and every one settles before the group completes.
/// Successes are keyed by entry id. Absence of a key means the fetch for
/// that entry failed; callers treat it as "data unavailable", not an error.
pub async fn fetch_batched<T, F, Fut>(
    entry_ids: &[u64],
    config: &BatchConfig,
    op: F,
) -> HashMap<u64, T>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut results = HashMap::with_capacity(entry_ids.len());
    let group_size = config.group_size.max(1);
    let group_count = entry_ids.len().div_ceil(group_size);

    for (group_idx, group) in entry_ids.chunks(group_size).enumerate() {
        let settled = join_all(group.iter().map(|&id| {
            let fut = op(id);
            async move { (id, fut.await) }
        }))
        .await;

        for (id, outcome) in settled {
            match outcome {
                Ok(value) => {
                    results.insert(id, value);
                }
                Err(e) => {
                    warn!(entry_id = id, group = group_idx, error = %e,
                        "entry fetch failed, omitting from results");
                }
            }
        }

        if group_idx + 1 < group_count {
            sleep(config.pause).await;
        }
    }

    results
}
