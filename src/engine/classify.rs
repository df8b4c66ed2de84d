use chrono::NaiveDateTime;
use itertools::Itertools;
use tracing::debug;

use crate::engine::datetime::parse_optional;
use crate::model::{
    BadgeState, ClassifiedMatch, LabelTone, MatchRecord, MatchStatus, MatchStatusLabel,
    PlayerMatchStatus, PlayerStatusLabel, PresentationMode,
};

/// Annotate a match with its state relative to `now`.
///
/// A match whose date cannot be parsed is treated as not past.
pub fn classify(record: &MatchRecord, now: NaiveDateTime) -> ClassifiedMatch {
    let starts_at = parse_optional(record.date_time.as_deref());
    if starts_at.is_none() {
        debug!(
            id = record.id,
            date_time = ?record.date_time,
            "match date unparsable, treating as not past"
        );
    }

    let is_past = starts_at.is_some_and(|t| t < now);
    let is_upcoming = starts_at.is_some_and(|t| t > now);
    let is_canceled = record.match_status == Some(MatchStatus::Canceled);

    ClassifiedMatch {
        record: record.clone(),
        starts_at,
        is_past,
        is_upcoming,
        is_canceled,
        badge: badge_state(is_past, record.match_status),
        status_label: status_label(is_past, record.match_status),
    }
}

pub fn classify_all(records: &[MatchRecord], now: NaiveDateTime) -> Vec<ClassifiedMatch> {
    let classified = records.iter().map(|r| classify(r, now)).collect_vec();
    debug!(
        count = classified.len(),
        past = classified.iter().filter(|m| m.is_past).count(),
        "classified matches"
    );
    classified
}

/// Canceled wins over past, past over future.
pub fn badge_state(is_past: bool, status: Option<MatchStatus>) -> BadgeState {
    match (status, is_past) {
        (Some(MatchStatus::Canceled), _) => BadgeState::Canceled,
        (_, true) => BadgeState::Past,
        (_, false) => BadgeState::Future,
    }
}

/// Status line of a match card.
///
/// Every past match reads as played, canceled ones included; the badge
/// carries the cancellation separately.
pub fn status_label(is_past: bool, status: Option<MatchStatus>) -> MatchStatusLabel {
    match (is_past, status) {
        (true, _) => MatchStatusLabel::Played,
        (false, None) => MatchStatusLabel::Planned,
        (false, Some(status)) => generic_status_label(status),
    }
}

pub fn generic_status_label(status: MatchStatus) -> MatchStatusLabel {
    match status {
        MatchStatus::Canceled => MatchStatusLabel::Canceled,
        MatchStatus::Uncanceled => MatchStatusLabel::Restored,
        MatchStatus::Updated => MatchStatusLabel::Changed,
    }
}

/// Wording of a player's status, depending on where it is shown.
pub fn player_status_label(status: PlayerMatchStatus, mode: PresentationMode) -> PlayerStatusLabel {
    use LabelTone::*;
    use PlayerMatchStatus::*;

    let shown = |text, tone| PlayerStatusLabel::Shown { text, tone };
    match (mode, status) {
        (PresentationMode::Upcoming, Registered) => shown("Přijdu", Positive),
        (PresentationMode::Upcoming, Unregistered) => shown("Odhlášen", Negative),
        (PresentationMode::Upcoming, Excused) => shown("Omluven", Neutral),
        (PresentationMode::Upcoming, Reserved) => shown("Čekací listina", Warning),
        (PresentationMode::Upcoming, Substitute) => shown("Možná přijdu", Warning),
        (PresentationMode::Upcoming, NoResponse) => shown("Zatím bez reakce", Neutral),
        (PresentationMode::Upcoming, NoExcused) => shown("Neomluven", Negative),

        (PresentationMode::Condensed, Registered) => PlayerStatusLabel::Hidden,
        (PresentationMode::Condensed, Unregistered) => shown("Odhlásil se", Negative),
        (PresentationMode::Condensed, Excused) => shown("Omluvil se", Neutral),
        (PresentationMode::Condensed, Reserved) => shown("Nedostal se do sestavy", Warning),
        (PresentationMode::Condensed, Substitute) => shown("Náhradník", Warning),
        (PresentationMode::Condensed, NoResponse) => shown("Nereagoval", Neutral),
        (PresentationMode::Condensed, NoExcused) => shown("Neomluvená absence", Negative),
    }
}

impl ClassifiedMatch {
    /// `None` in views that carry no player context.
    pub fn player_status(&self, mode: PresentationMode) -> Option<PlayerStatusLabel> {
        self.record
            .player_match_status
            .map(|status| player_status_label(status, mode))
    }
}
