use std::collections::BTreeSet;
use std::fmt::Debug;

use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::engine::datetime::parse_optional;
use crate::model::{MatchHistoryEntry, RegistrationHistoryEntry};

/// A value of a tracked field, normalized for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing text compares equal to an empty string.
    Text(String),
    /// Missing numbers stay distinct from zero.
    Number(Option<f64>),
    /// Counts and foreign keys, compared exactly.
    Id(Option<i64>),
}

impl FieldValue {
    fn text(value: Option<impl AsRef<str>>) -> Self {
        FieldValue::Text(value.map(|v| v.as_ref().to_string()).unwrap_or_default())
    }

    fn id(value: Option<i64>) -> Self {
        FieldValue::Id(value)
    }
}

/// A snapshot in a history list that can be compared field by field.
pub trait HistoryEntry {
    type Field: IntoEnumIterator + Copy + Ord + Debug;

    fn changed_at(&self) -> Option<NaiveDateTime>;

    fn field_value(&self, field: Self::Field) -> FieldValue;
}

/// Fields of a match snapshot that get highlighted when they change.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Status,
    CancelReason,
    DateTime,
    Location,
    Description,
    MaxPlayers,
    Price,
    SeasonId,
    CreatedBy,
    LastModifiedBy,
}

impl HistoryEntry for MatchHistoryEntry {
    type Field = MatchField;

    fn changed_at(&self) -> Option<NaiveDateTime> {
        parse_optional(self.changed_at.as_deref())
    }

    fn field_value(&self, field: MatchField) -> FieldValue {
        match field {
            MatchField::Status => FieldValue::text(self.match_status),
            MatchField::CancelReason => FieldValue::text(self.cancel_reason),
            MatchField::DateTime => FieldValue::text(self.date_time.as_deref()),
            MatchField::Location => FieldValue::text(self.location.as_deref()),
            MatchField::Description => FieldValue::text(self.description.as_deref()),
            MatchField::MaxPlayers => FieldValue::id(self.max_players),
            MatchField::Price => FieldValue::Number(self.price),
            MatchField::SeasonId => FieldValue::id(self.season_id),
            MatchField::CreatedBy => FieldValue::id(self.created_by),
            MatchField::LastModifiedBy => FieldValue::id(self.last_modified_by),
        }
    }
}

/// Fields of a registration snapshot that get highlighted when they change.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    Status,
    ExcuseReason,
    ExcuseNote,
    AdminNote,
    Team,
    CreatedBy,
    LastModifiedBy,
}

impl HistoryEntry for RegistrationHistoryEntry {
    type Field = RegistrationField;

    fn changed_at(&self) -> Option<NaiveDateTime> {
        parse_optional(self.changed_at.as_deref())
    }

    fn field_value(&self, field: RegistrationField) -> FieldValue {
        match field {
            RegistrationField::Status => FieldValue::text(self.status),
            RegistrationField::ExcuseReason => FieldValue::text(self.excuse_reason.as_deref()),
            RegistrationField::ExcuseNote => FieldValue::text(self.excuse_note.as_deref()),
            RegistrationField::AdminNote => FieldValue::text(self.admin_note.as_deref()),
            RegistrationField::Team => FieldValue::text(self.team.as_deref()),
            RegistrationField::CreatedBy => FieldValue::id(self.created_by),
            RegistrationField::LastModifiedBy => FieldValue::id(self.last_modified_by),
        }
    }
}

/// The fields that differ between a snapshot and the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChangeSet<F: Ord>(BTreeSet<F>);

impl<F: Ord + Copy> FieldChangeSet<F> {
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn is_changed(&self, field: F) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn changed(&self) -> impl Iterator<Item = F> + '_ {
        self.0.iter().copied()
    }
}

/// One line of a rendered history list.
#[derive(Debug, Clone)]
pub struct HistoryRow<'a, E: HistoryEntry> {
    pub entry: &'a E,
    pub changes: FieldChangeSet<E::Field>,
}

/// Compare a snapshot with its predecessor. No predecessor, no changes.
pub fn diff<E: HistoryEntry>(current: &E, previous: Option<&E>) -> FieldChangeSet<E::Field> {
    let Some(previous) = previous else {
        return FieldChangeSet::none();
    };
    FieldChangeSet(
        E::Field::iter()
            .filter(|field| current.field_value(*field) != previous.field_value(*field))
            .collect(),
    )
}

/// Sort a history newest first and diff every entry against the next older one.
pub fn diff_history<E: HistoryEntry>(entries: &[E]) -> Vec<HistoryRow<'_, E>> {
    let mut sorted = entries.iter().collect_vec();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.changed_at()));

    let rows = sorted
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRow {
            entry: *entry,
            changes: diff(*entry, sorted.get(i + 1).copied()),
        })
        .collect_vec();
    debug!(
        entries = rows.len(),
        changed = rows.iter().filter(|r| !r.changes.is_empty()).count(),
        "diffed history"
    );
    rows
}
