//! The published snapshot document.
//!
//! Field names here are the wire contract with the UI that reads the gist;
//! renaming anything in `Snapshot` or `MemberEntry` breaks downstream
//! consumers.

use serde::Serialize;

/// Consolidated league state for one run. Serialized whole into the gist.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// RFC 3339 timestamp of the run.
    pub updated_at: String,
    pub league_id: u64,
    pub league_name: String,
    pub current_gw: u32,
    /// Deadline of the current gameweek, if the API provided one.
    pub deadline: Option<String>,
    pub next_gw: Option<u32>,
    pub next_deadline: Option<String>,
    pub members: Vec<MemberEntry>,
}

/// One league member with joined history and current-gameweek picks.
///
/// A member whose per-entry fetches failed still appears, with empty
/// `history` and `picks: None`.
#[derive(Debug, Clone, Serialize)]
pub struct MemberEntry {
    pub entry_id: u64,
    pub rank: u32,
    pub last_rank: u32,
    /// Team name.
    pub name: String,
    /// Manager name.
    pub player: String,
    pub total: i64,
    pub gw_points: i64,
    pub history: Vec<HistoryEntry>,
    pub picks: Option<PickSet>,
}

/// One finished gameweek in a member's season.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub gw: u32,
    pub points: i64,
    /// Cumulative season total after this gameweek.
    pub total: i64,
    pub rank: Option<i64>,
    /// Chip played this gameweek, if any.
    pub chip: Option<String>,
}

/// A member's roster for the current gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct PickSet {
    pub active_chip: Option<String>,
    pub picks: Vec<Pick>,
}

/// One roster slot, denormalized against the static player/team tables.
#[derive(Debug, Clone, Serialize)]
pub struct Pick {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    /// Price formatted with one decimal, e.g. raw 125 -> "12.5".
    pub cost: String,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub multiplier: i64,
    /// Effective points: base event points x multiplier.
    pub points: i64,
}

/// Roster position, mapped from the upstream `element_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    #[serde(rename = "GKP")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
    /// Out-of-range code. Serializes as an empty string.
    #[serde(rename = "")]
    Unknown,
}

impl Position {
    /// Maps the upstream element_type code (1-4) to a position.
    pub fn from_element_type(code: u8) -> Self {
        match code {
            1 => Self::Goalkeeper,
            2 => Self::Defender,
            3 => Self::Midfielder,
            4 => Self::Forward,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GKP",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
            Self::Unknown => "",
        }
    }
}
