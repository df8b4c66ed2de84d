use serde::{Deserialize, Serialize};

/// A list of matches as returned by the match list endpoints.
pub type MatchList = Vec<MatchRecord>;

/// A single match as delivered by the API.
///
/// `player_match_status` is only present in the player-scoped lists
/// (upcoming / passed). The admin season list leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: i64,
    #[serde(default)]
    pub match_number: Option<i64>,
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
    pub player_match_status: Option<PlayerMatchStatus>,
    #[serde(default)]
    pub in_game_players: Option<i64>,
    #[serde(default)]
    pub season_id: Option<i64>,
}

impl MatchRecord {
    /// Remaining capacity, `None` when the match has no player limit.
    pub fn free_slots(&self) -> Option<i64> {
        self.max_players
            .map(|max| (max - self.in_game_players.unwrap_or_default()).max(0))
    }

    pub fn is_full(&self) -> bool {
        self.free_slots() == Some(0)
    }

    /// The cancel reason, but only while the match is actually canceled.
    pub fn effective_cancel_reason(&self) -> Option<CancelReason> {
        match self.match_status {
            Some(MatchStatus::Canceled) => self.cancel_reason,
            _ => None,
        }
    }
}

/// Lifecycle flag set by an admin on a match.
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
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Canceled,
    Uncanceled,
    Updated,
}

/// Why a match was canceled.
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
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelReason {
    NotEnoughPlayers,
    TechnicalIssue,
    Weather,
    OrganizerDecision,
    Other,
}

impl CancelReason {
    pub fn label(self) -> &'static str {
        match self {
            CancelReason::NotEnoughPlayers => "Nedostatek hráčů",
            CancelReason::TechnicalIssue => "Technické problémy",
            CancelReason::Weather => "Počasí",
            CancelReason::OrganizerDecision => "Rozhodnutí organizátora",
            CancelReason::Other => "Jiný důvod",
        }
    }
}

/// One player's relationship to a match.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerMatchStatus {
    Registered,
    Unregistered,
    Excused,
    Reserved,
    Substitute,
    NoResponse,
    NoExcused,
}
