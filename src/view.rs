use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::engine::{classify_all, filter_and_count, MatchFilter};
use crate::model::{ClassifiedMatch, FilterCounts, MatchRecord, PlayerStatusLabel, PresentationMode};

/// Per-page UI state of a match list: the chosen filter and where the user
/// had scrolled to. Lives as long as the page does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchListView<F> {
    selected: F,
    scroll_offset: u32,
    mode: PresentationMode,
}

/// A match ready to be rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCard {
    pub classified: ClassifiedMatch,
    pub player_status: Option<PlayerStatusLabel>,
    pub cancel_reason: Option<&'static str>,
}

/// Everything one render of a match list needs.
#[derive(Debug, Clone, Serialize)]
pub struct MatchListPage<F: Ord> {
    pub selected: F,
    pub scroll_offset: u32,
    pub cards: Vec<MatchCard>,
    pub counts: FilterCounts<F>,
}

impl<F: MatchFilter + Default> MatchListView<F> {
    pub fn new(mode: PresentationMode) -> Self {
        Self {
            selected: F::default(),
            scroll_offset: 0,
            mode,
        }
    }
}

impl<F: MatchFilter> MatchListView<F> {
    pub fn selected(&self) -> F {
        self.selected
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Switch filters. The list changes, so the scroll position starts over.
    pub fn select(&mut self, filter: F) {
        if filter != self.selected {
            self.selected = filter;
            self.scroll_offset = 0;
        }
    }

    pub fn remember_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Classify `records` against `now` and apply the selected filter.
    ///
    /// Nothing is cached between calls; pass the current time every render.
    pub fn render(&self, records: &[MatchRecord], now: NaiveDateTime) -> MatchListPage<F> {
        let classified = classify_all(records, now);
        let outcome = filter_and_count(&classified, self.selected);
        let cards = outcome
            .filtered
            .iter()
            .map(|m| MatchCard {
                classified: (*m).clone(),
                player_status: m.player_status(self.mode),
                cancel_reason: m.record.effective_cancel_reason().map(|r| r.label()),
            })
            .collect_vec();
        debug!(
            selected = ?self.selected,
            cards = cards.len(),
            "rendered match list"
        );

        MatchListPage {
            selected: self.selected,
            scroll_offset: self.scroll_offset,
            cards,
            counts: outcome.counts,
        }
    }
}
