//! Upstream payload generators.

use fpl_api::models::{
    BootstrapStatic, ChipPlay, Element, EntryHistory, EntryPicks, Event, HistoryRow, LeagueInfo,
    LeagueStandings, PickRow, StandingRow, StandingsPage, Team,
};

/// Standings for the given entry ids, ranked in order.
pub fn league_standings(entries: &[u64]) -> LeagueStandings {
    LeagueStandings {
        league: LeagueInfo {
            id: 1234,
            name: "Office League".into(),
        },
        standings: StandingsPage {
            results: entries
                .iter()
                .enumerate()
                .map(|(i, &entry)| StandingRow {
                    entry,
                    entry_name: format!("Team {entry}"),
                    player_name: format!("Manager {entry}"),
                    rank: i as u32 + 1,
                    last_rank: i as u32 + 1,
                    total: 200 - 10 * i as i64,
                    event_total: 60 - i as i64,
                })
                .collect(),
        },
    }
}

/// Static data: four gameweeks (3 current, 4 next), two teams, three players.
pub fn bootstrap() -> BootstrapStatic {
    let event = |id: u32, finished: bool, is_current: bool, is_next: bool| Event {
        id,
        name: format!("Gameweek {id}"),
        deadline_time: Some(format!("2026-09-{:02}T10:00:00Z", id)),
        finished,
        is_current,
        is_next,
    };

    BootstrapStatic {
        events: vec![
            event(1, true, false, false),
            event(2, true, false, false),
            event(3, false, true, false),
            event(4, false, false, true),
        ],
        teams: vec![
            Team {
                id: 1,
                name: "Arsenal".into(),
                short_name: "ARS".into(),
            },
            Team {
                id: 2,
                name: "Liverpool".into(),
                short_name: "LIV".into(),
            },
        ],
        elements: vec![
            Element {
                id: 10,
                web_name: "Raya".into(),
                team: 1,
                element_type: 1,
                now_cost: 55,
                event_points: 3,
            },
            Element {
                id: 11,
                web_name: "Salah".into(),
                team: 2,
                element_type: 3,
                now_cost: 125,
                event_points: 6,
            },
            Element {
                id: 12,
                web_name: "Gabriel".into(),
                team: 1,
                element_type: 2,
                now_cost: 60,
                event_points: 2,
            },
        ],
    }
}

/// A two-gameweek history with a wildcard in gameweek 2.
pub fn entry_history() -> EntryHistory {
    EntryHistory {
        current: vec![
            HistoryRow {
                event: 1,
                points: 55,
                total_points: 55,
                rank: Some(120_000),
            },
            HistoryRow {
                event: 2,
                points: 48,
                total_points: 103,
                rank: Some(95_000),
            },
        ],
        chips: vec![ChipPlay {
            name: "wildcard".into(),
            event: 2,
        }],
    }
}

/// A three-slot pick set: captained Salah, Raya, benched Gabriel.
pub fn entry_picks() -> EntryPicks {
    EntryPicks {
        active_chip: None,
        picks: vec![
            PickRow {
                element: 10,
                position: 1,
                multiplier: 1,
                is_captain: false,
                is_vice_captain: false,
            },
            PickRow {
                element: 11,
                position: 2,
                multiplier: 2,
                is_captain: true,
                is_vice_captain: false,
            },
            PickRow {
                element: 12,
                position: 12,
                multiplier: 0,
                is_captain: false,
                is_vice_captain: true,
            },
        ],
    }
}
