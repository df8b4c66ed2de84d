use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ClassifiedMatch;

/// Filters offered on the admin season match list.
#[derive(
    Debug,
    Default,
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
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminMatchFilter {
    #[default]
    All,
    FirstUpcoming,
    Future,
    Past,
    Canceled,
    Uncanceled,
    Updated,
}

/// Filters offered on a player's past-match list.
#[derive(
    Debug,
    Default,
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
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerPastFilter {
    #[default]
    All,
    Registered,
    ExcusedOrUnregistered,
    NoResponseOrSubstitute,
}

/// Badge counts, one per filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCounts<F: Ord>(pub(crate) BTreeMap<F, usize>);

impl<F: Ord + Copy> FilterCounts<F> {
    pub fn get(&self, filter: F) -> usize {
        self.0.get(&filter).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, usize)> + '_ {
        self.0.iter().map(|(f, c)| (*f, *c))
    }
}

/// Result of applying a filter to a classified match list.
///
/// `filtered` borrows from the input, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a, F: Ord> {
    pub selected: F,
    pub filtered: Vec<&'a ClassifiedMatch>,
    pub counts: FilterCounts<F>,
}
