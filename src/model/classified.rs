use chrono::NaiveDateTime;
use serde::Serialize;

use super::{MatchRecord, PlayerMatchStatus};

/// A match annotated with its time-relative state.
///
/// Only valid for the `now` it was classified against; re-classify whenever
/// the record set or the clock moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedMatch {
    pub record: MatchRecord,
    pub starts_at: Option<NaiveDateTime>,
    pub is_past: bool,
    /// Strictly after `now`. A match starting exactly at `now` is neither
    /// past nor upcoming.
    pub is_upcoming: bool,
    pub is_canceled: bool,
    pub badge: BadgeState,
    pub status_label: MatchStatusLabel,
}

/// Visual tag shown on a match card.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeState {
    Future,
    Past,
    Canceled,
}

/// The status line of a match card.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display)]
pub enum MatchStatusLabel {
    #[strum(serialize = "Odehraný")]
    Played,
    #[strum(serialize = "Plánovaný")]
    Planned,
    #[strum(serialize = "Zrušený")]
    Canceled,
    #[strum(serialize = "Obnovený")]
    Restored,
    #[strum(serialize = "Změněný")]
    Changed,
}

/// Which list a player status is rendered in.
///
/// Upcoming lists spell every status out; the condensed past-match list
/// drops what goes without saying.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum PresentationMode {
    #[default]
    Upcoming,
    Condensed,
}

/// Styling hint for a player status label.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum LabelTone {
    Positive,
    Neutral,
    Warning,
    Negative,
}

/// The rendered form of a [`PlayerMatchStatus`] in a given [`PresentationMode`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum PlayerStatusLabel {
    Hidden,
    Shown { text: &'static str, tone: LabelTone },
}

impl PlayerStatusLabel {
    pub fn text(&self) -> &'static str {
        match self {
            PlayerStatusLabel::Hidden => "",
            PlayerStatusLabel::Shown { text, .. } => *text,
        }
    }
}

impl ClassifiedMatch {
    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn player_match_status(&self) -> Option<PlayerMatchStatus> {
        self.record.player_match_status
    }
}
