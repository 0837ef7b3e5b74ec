//! Pure aggregation from fetched upstream data to the published snapshot.

use chrono::{DateTime, SecondsFormat, Utc};
use fpl_core::{Error, HistoryEntry, MemberEntry, Pick, PickSet, Position, Result, Snapshot};
use fpl_api::models::{BootstrapStatic, Element, EntryHistory, EntryPicks, Event, LeagueStandings, Team};
use std::collections::HashMap;

/// Selects the gameweek the snapshot reports as "current": the one in
/// progress, else the most recently finished, else the first known.
pub fn current_event(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .find(|e| e.is_current)
        .or_else(|| events.iter().filter(|e| e.finished).last())
        .or_else(|| events.first())
}

/// The upcoming gameweek, absent at season end.
pub fn next_event(events: &[Event]) -> Option<&Event> {
    events.iter().find(|e| e.is_next)
}

/// Formats a tenths-of-a-million price as a one-decimal string (125 -> "12.5").
pub fn format_cost(raw: i64) -> String {
    format!("{:.1}", raw as f64 / 10.0)
}

/// Builds the snapshot from the standings, static tables and the two
/// per-member result maps.
///
/// A member absent from `histories` or `picks_by_entry` (its fetches failed)
/// still gets an entry, with empty history and/or no pick set. An empty
/// gameweek table is a precondition violation and fails the build.
pub fn build_snapshot(
    standings: &LeagueStandings,
    bootstrap: &BootstrapStatic,
    histories: &HashMap<u64, EntryHistory>,
    picks_by_entry: &HashMap<u64, EntryPicks>,
    now: DateTime<Utc>,
) -> Result<Snapshot> {
    let current = current_event(&bootstrap.events)
        .ok_or_else(|| Error::internal("bootstrap contains no gameweeks"))?;
    let next = next_event(&bootstrap.events);

    let players: HashMap<u32, &Element> =
        bootstrap.elements.iter().map(|e| (e.id, e)).collect();
    let teams: HashMap<u32, &Team> = bootstrap.teams.iter().map(|t| (t.id, t)).collect();

    let members = standings
        .standings
        .results
        .iter()
        .map(|row| MemberEntry {
            entry_id: row.entry,
            rank: row.rank,
            last_rank: row.last_rank,
            name: row.entry_name.clone(),
            player: row.player_name.clone(),
            total: row.total,
            gw_points: row.event_total,
            history: histories
                .get(&row.entry)
                .map(reshape_history)
                .unwrap_or_default(),
            picks: picks_by_entry
                .get(&row.entry)
                .map(|p| resolve_picks(p, &players, &teams)),
        })
        .collect();

    Ok(Snapshot {
        updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        league_id: standings.league.id,
        league_name: standings.league.name.clone(),
        current_gw: current.id,
        deadline: current.deadline_time.clone(),
        next_gw: next.map(|e| e.id),
        next_deadline: next.and_then(|e| e.deadline_time.clone()),
        members,
    })
}

fn reshape_history(history: &EntryHistory) -> Vec<HistoryEntry> {
    history
        .current
        .iter()
        .map(|row| HistoryEntry {
            gw: row.event,
            points: row.points,
            total: row.total_points,
            rank: row.rank,
            chip: history
                .chips
                .iter()
                .find(|c| c.event == row.event)
                .map(|c| c.name.clone()),
        })
        .collect()
}

fn resolve_picks(
    entry_picks: &EntryPicks,
    players: &HashMap<u32, &Element>,
    teams: &HashMap<u32, &Team>,
) -> PickSet {
    let picks = entry_picks
        .picks
        .iter()
        .map(|row| match players.get(&row.element) {
            Some(player) => Pick {
                id: row.element,
                name: player.web_name.clone(),
                team: teams
                    .get(&player.team)
                    .map(|t| t.short_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                position: Position::from_element_type(player.element_type),
                cost: format_cost(player.now_cost),
                is_captain: row.is_captain,
                is_vice_captain: row.is_vice_captain,
                multiplier: row.multiplier,
                points: player.event_points * row.multiplier,
            },
            // Player id missing from the static table; keep the slot rather
            // than dropping it.
            None => Pick {
                id: row.element,
                name: format!("Player {}", row.element),
                team: "Unknown".to_string(),
                position: Position::Unknown,
                cost: format_cost(0),
                is_captain: row.is_captain,
                is_vice_captain: row.is_vice_captain,
                multiplier: row.multiplier,
                points: 0,
            },
        })
        .collect();

    PickSet {
        active_chip: entry_picks.active_chip.clone(),
        picks,
    }
}
