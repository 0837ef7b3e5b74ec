//! Upstream response shapes.
//!
//! The FPL API is not versioned and fields come and go; everything here is
//! defaulted so a missing or null field never fails deserialization. The
//! aggregation layer handles the absent cases explicitly.

use serde::Deserialize;

/// `leagues-classic/{id}/standings/` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueStandings {
    #[serde(default)]
    pub league: LeagueInfo,
    #[serde(default)]
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub results: Vec<StandingRow>,
}

/// One league member as listed in the standings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingRow {
    /// Entry (team) id, the join key for the per-member endpoints.
    #[serde(default)]
    pub entry: u64,
    #[serde(default)]
    pub entry_name: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub last_rank: u32,
    #[serde(default)]
    pub total: i64,
    /// Points scored in the current gameweek.
    #[serde(default)]
    pub event_total: i64,
}

/// `bootstrap-static/` response, trimmed to the tables we join against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A gameweek.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deadline_time: Option<String>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A player in the static reference table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub web_name: String,
    /// Team id, resolved against [`Team`].
    #[serde(default)]
    pub team: u32,
    /// Position code: 1 GKP, 2 DEF, 3 MID, 4 FWD.
    #[serde(default)]
    pub element_type: u8,
    /// Price in tenths of a million.
    #[serde(default)]
    pub now_cost: i64,
    /// Points scored in the current gameweek.
    #[serde(default)]
    pub event_points: i64,
}

/// `entry/{id}/history/` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryHistory {
    /// Per-gameweek rows for the current season.
    #[serde(default)]
    pub current: Vec<HistoryRow>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryRow {
    /// Gameweek id.
    #[serde(default)]
    pub event: u32,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub rank: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChipPlay {
    #[serde(default)]
    pub name: String,
    /// Gameweek the chip was played in.
    #[serde(default)]
    pub event: u32,
}

/// `entry/{id}/event/{gw}/picks/` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPicks {
    #[serde(default)]
    pub active_chip: Option<String>,
    #[serde(default)]
    pub picks: Vec<PickRow>,
}

/// One roster slot as returned by the picks endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PickRow {
    /// Player id, resolved against [`Element`].
    #[serde(default)]
    pub element: u32,
    #[serde(default)]
    pub position: u32,
    /// 0 benched, 1 playing, 2 captain, 3 triple captain.
    #[serde(default)]
    pub multiplier: i64,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}
