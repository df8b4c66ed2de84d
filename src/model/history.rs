use serde::{Deserialize, Serialize};

use super::{CancelReason, MatchStatus, PlayerMatchStatus};

/// The kind of write that produced a history snapshot.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Insert,
    Update,
    Delete,
}

/// A snapshot of a match taken when it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryEntry {
    pub id: i64,
    pub match_id: i64,
    #[serde(default)]
    pub action: Option<HistoryAction>,
    #[serde(default)]
    pub changed_at: Option<String>,
    #[serde(default)]
    pub changed_by: Option<i64>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub max_players: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub match_status: Option<MatchStatus>,
    #[serde(default)]
    pub cancel_reason: Option<CancelReason>,
    #[serde(default)]
    pub season_id: Option<i64>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub last_modified_by: Option<i64>,
}

/// A snapshot of a player's registration for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationHistoryEntry {
    pub id: i64,
    pub match_id: i64,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub action: Option<HistoryAction>,
    #[serde(default)]
    pub changed_at: Option<String>,
    #[serde(default)]
    pub changed_by: Option<i64>,
    #[serde(default)]
    pub status: Option<PlayerMatchStatus>,
    #[serde(default)]
    pub excuse_reason: Option<String>,
    #[serde(default)]
    pub excuse_note: Option<String>,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub last_modified_by: Option<i64>,
}
