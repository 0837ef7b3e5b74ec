//! Single-run orchestration.
//!
//! One run is strictly linear: standings and static data (both required,
//! failures are fatal), then two batched per-member fetch phases (failures
//! contained per entry), then the pure build, then the publish.

use crate::builder;
use chrono::Utc;
use fpl_api::{fetch_batched, BatchConfig, FplApi};
use fpl_core::{Error, Result};
use gist_store::SnapshotStore;
use tracing::info;

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub members: usize,
    pub histories_fetched: usize,
    pub picks_fetched: usize,
    pub snapshot_bytes: usize,
    pub content_url: String,
}

/// Executes one fetch-merge-publish run.
pub async fn run(
    league_id: u64,
    batch: &BatchConfig,
    api: &dyn FplApi,
    store: &dyn SnapshotStore,
) -> Result<RunReport> {
    info!(league_id, "Fetching league standings");
    let standings = api.league_standings(league_id).await?;

    let entry_ids: Vec<u64> = standings
        .standings
        .results
        .iter()
        .map(|row| row.entry)
        .collect();
    info!(
        league = %standings.league.name,
        members = entry_ids.len(),
        "Standings fetched"
    );

    let bootstrap = api.bootstrap_static().await?;
    let current_gw = builder::current_event(&bootstrap.events)
        .ok_or_else(|| Error::internal("bootstrap contains no gameweeks"))?
        .id;

    info!(members = entry_ids.len(), "Fetching member histories");
    let histories = fetch_batched(&entry_ids, batch, |id| api.entry_history(id)).await;

    info!(members = entry_ids.len(), gw = current_gw, "Fetching current picks");
    let picks = fetch_batched(&entry_ids, batch, |id| api.entry_picks(id, current_gw)).await;

    let snapshot = builder::build_snapshot(&standings, &bootstrap, &histories, &picks, Utc::now())?;
    let snapshot_bytes = serde_json::to_vec(&snapshot)?.len();

    let content_url = store.publish(&snapshot).await?;

    let report = RunReport {
        members: snapshot.members.len(),
        histories_fetched: histories.len(),
        picks_fetched: picks.len(),
        snapshot_bytes,
        content_url,
    };
    info!(
        members = report.members,
        histories = report.histories_fetched,
        picks = report.picks_fetched,
        bytes = report.snapshot_bytes,
        url = %report.content_url,
        "Run complete"
    );

    Ok(report)
}
