use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::model::{
    AdminMatchFilter, ClassifiedMatch, FilterCounts, FilterOutcome, MatchStatus,
    PlayerMatchStatus, PlayerPastFilter,
};

/// A set of filters offered on one match list.
///
/// A filter picks its matches from the whole sorted list rather than judging
/// records one at a time, so selections like "first upcoming" stay a single
/// match.
pub trait MatchFilter: IntoEnumIterator + Copy + Ord + Debug {
    fn select<'a>(self, sorted: &[&'a ClassifiedMatch]) -> Vec<&'a ClassifiedMatch>;
}

impl MatchFilter for AdminMatchFilter {
    fn select<'a>(self, sorted: &[&'a ClassifiedMatch]) -> Vec<&'a ClassifiedMatch> {
        let status = |status: MatchStatus| -> Vec<&'a ClassifiedMatch> {
            sorted
                .iter()
                .copied()
                .filter(|m| m.record.match_status == Some(status))
                .collect()
        };
        match self {
            AdminMatchFilter::All => sorted.to_vec(),
            AdminMatchFilter::FirstUpcoming => first_upcoming(sorted).into_iter().collect(),
            AdminMatchFilter::Future => sorted.iter().copied().filter(|m| !m.is_past).collect(),
            AdminMatchFilter::Past => sorted.iter().copied().filter(|m| m.is_past).collect(),
            AdminMatchFilter::Canceled => status(MatchStatus::Canceled),
            AdminMatchFilter::Uncanceled => status(MatchStatus::Uncanceled),
            AdminMatchFilter::Updated => status(MatchStatus::Updated),
        }
    }
}

impl PlayerPastFilter {
    fn accepts(self, status: Option<PlayerMatchStatus>) -> bool {
        use PlayerMatchStatus::*;

        match self {
            PlayerPastFilter::All => true,
            PlayerPastFilter::Registered => status == Some(Registered),
            PlayerPastFilter::ExcusedOrUnregistered => {
                matches!(status, Some(Excused | Unregistered))
            }
            PlayerPastFilter::NoResponseOrSubstitute => {
                matches!(status, Some(NoResponse | Substitute))
            }
        }
    }
}

impl MatchFilter for PlayerPastFilter {
    fn select<'a>(self, sorted: &[&'a ClassifiedMatch]) -> Vec<&'a ClassifiedMatch> {
        sorted
            .iter()
            .copied()
            .filter(|m| self.accepts(m.record.player_match_status))
            .collect()
    }
}

/// The earliest non-canceled match that starts strictly after `now`.
///
/// Ties keep the first record in display order.
pub fn first_upcoming<'a>(records: &[&'a ClassifiedMatch]) -> Option<&'a ClassifiedMatch> {
    records
        .iter()
        .copied()
        .filter(|m| m.is_upcoming && !m.is_canceled)
        .filter_map(|m| m.starts_at.map(|t| (t, m)))
        .min_by_key(|(t, _)| *t)
        .map(|(_, m)| m)
}

/// Order for match lists: newest first.
///
/// Match numbers decide when both records carry one, start times otherwise.
/// A missing start time compares equal to anything.
pub fn display_order(a: &ClassifiedMatch, b: &ClassifiedMatch) -> Ordering {
    match (a.record.match_number, b.record.match_number) {
        (Some(na), Some(nb)) => nb.cmp(&na),
        _ => match (a.starts_at, b.starts_at) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            _ => Ordering::Equal,
        },
    }
}

/// Stable sort by [`display_order`].
///
/// `display_order` is not a total order when match numbers are only partly
/// present, so this uses an insertion sort that never panics on it.
pub fn sort_for_display(records: &[ClassifiedMatch]) -> Vec<&ClassifiedMatch> {
    let mut sorted: Vec<&ClassifiedMatch> = Vec::with_capacity(records.len());
    for record in records {
        let position = sorted
            .iter()
            .rposition(|placed| display_order(placed, record) != Ordering::Greater)
            .map_or(0, |i| i + 1);
        sorted.insert(position, record);
    }
    sorted
}

/// Sort, apply `selected` and count every filter of the same kind.
///
/// Counts are rebuilt from `records` on every call.
pub fn filter_and_count<F: MatchFilter>(
    records: &[ClassifiedMatch],
    selected: F,
) -> FilterOutcome<'_, F> {
    let sorted = sort_for_display(records);
    let counts: BTreeMap<F, usize> = F::iter()
        .map(|filter| (filter, filter.select(&sorted).len()))
        .collect();
    let filtered = selected.select(&sorted);
    debug!(
        ?selected,
        total = records.len(),
        shown = filtered.len(),
        "filtered matches"
    );

    FilterOutcome {
        selected,
        filtered,
        counts: FilterCounts(counts),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::engine::classify::classify_all;
    use crate::model::MatchRecord;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(id: i64, date_time: &str, status: Option<MatchStatus>) -> MatchRecord {
        MatchRecord {
            id,
            date_time: Some(date_time.to_string()),
            match_status: status,
            ..Default::default()
        }
    }

    fn ids(matches: &[&ClassifiedMatch]) -> Vec<i64> {
        matches.iter().map(|m| m.id()).collect()
    }

    fn admin_fixture() -> Vec<ClassifiedMatch> {
        classify_all(
            &[
                record(1, "2025-05-01 18:00:00", None),
                record(2, "2025-05-20 18:00:00", Some(MatchStatus::Canceled)),
                record(3, "2025-06-05 18:00:00", Some(MatchStatus::Canceled)),
                record(4, "2025-06-10 18:00:00", Some(MatchStatus::Updated)),
                record(5, "2025-06-08 18:00:00", Some(MatchStatus::Uncanceled)),
                record(6, "2025-07-01 18:00:00", None),
            ],
            now(),
        )
    }

    #[test]
    fn test_counts_cover_every_admin_filter() {
        let matches = admin_fixture();
        let outcome = filter_and_count(&matches, AdminMatchFilter::All);

        assert_eq!(outcome.counts.get(AdminMatchFilter::All), 6);
        assert_eq!(outcome.counts.get(AdminMatchFilter::FirstUpcoming), 1);
        assert_eq!(outcome.counts.get(AdminMatchFilter::Future), 4);
        assert_eq!(outcome.counts.get(AdminMatchFilter::Past), 2);
        assert_eq!(outcome.counts.get(AdminMatchFilter::Canceled), 2);
        assert_eq!(outcome.counts.get(AdminMatchFilter::Uncanceled), 1);
        assert_eq!(outcome.counts.get(AdminMatchFilter::Updated), 1);
        assert_eq!(outcome.counts.iter().count(), 7);
    }

    #[test]
    fn test_future_and_past_partition_all() {
        let matches = admin_fixture();
        let outcome = filter_and_count(&matches, AdminMatchFilter::Future);
        assert_eq!(
            outcome.counts.get(AdminMatchFilter::Future)
                + outcome.counts.get(AdminMatchFilter::Past),
            outcome.counts.get(AdminMatchFilter::All)
        );
    }

    #[test]
    fn test_first_upcoming_skips_canceled() {
        let matches = admin_fixture();
        let outcome = filter_and_count(&matches, AdminMatchFilter::FirstUpcoming);
        assert_eq!(ids(&outcome.filtered), vec![5]);
    }

    #[test]
    fn test_first_upcoming_empty_when_nothing_qualifies() {
        let matches = classify_all(
            &[
                record(1, "2025-05-01 18:00:00", None),
                record(2, "2025-07-01 18:00:00", Some(MatchStatus::Canceled)),
                record(3, "not a date", None),
            ],
            now(),
        );
        let outcome = filter_and_count(&matches, AdminMatchFilter::FirstUpcoming);
        assert!(outcome.filtered.is_empty());
        assert_eq!(outcome.counts.get(AdminMatchFilter::FirstUpcoming), 0);
    }

    #[test]
    fn test_sorted_by_date_descending_without_numbers() {
        let matches = admin_fixture();
        let outcome = filter_and_count(&matches, AdminMatchFilter::All);
        assert_eq!(ids(&outcome.filtered), vec![6, 4, 5, 3, 2, 1]);
    }

    #[test]
    fn test_sorted_by_match_number_descending() {
        let mut records = vec![
            record(1, "2025-05-01 18:00:00", None),
            record(2, "2025-04-01 18:00:00", None),
            record(3, "2025-03-01 18:00:00", None),
        ];
        records[0].match_number = Some(1);
        records[1].match_number = Some(3);
        records[2].match_number = Some(2);
        let matches = classify_all(&records, now());

        let outcome = filter_and_count(&matches, AdminMatchFilter::All);
        assert_eq!(ids(&outcome.filtered), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_match_numbers_keep_input_order() {
        let mut records = vec![
            record(1, "2025-05-01 18:00:00", None),
            record(2, "2025-05-02 18:00:00", None),
            record(3, "2025-05-03 18:00:00", None),
        ];
        for r in &mut records {
            r.match_number = Some(4);
        }
        let matches = classify_all(&records, now());

        assert_eq!(ids(&sort_for_display(&matches)), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_numbers_and_bad_dates_do_not_panic() {
        let mut records = (1..=40)
            .map(|i| record(i, &format!("2025-05-{:02} 18:00:00", (i % 28) + 1), None))
            .collect::<Vec<_>>();
        for r in records.iter_mut().step_by(3) {
            r.match_number = Some(r.id % 5);
        }
        for r in records.iter_mut().step_by(7) {
            r.date_time = Some("??".to_string());
        }
        let matches = classify_all(&records, now());

        let sorted = sort_for_display(&matches);
        assert_eq!(sorted.len(), 40);
    }

    #[test]
    fn test_player_past_filters() {
        let statuses = [
            Some(PlayerMatchStatus::Registered),
            Some(PlayerMatchStatus::Excused),
            Some(PlayerMatchStatus::Unregistered),
            Some(PlayerMatchStatus::NoResponse),
            Some(PlayerMatchStatus::Substitute),
            Some(PlayerMatchStatus::NoExcused),
            None,
        ];
        let records = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| MatchRecord {
                player_match_status: *status,
                ..record(i as i64 + 1, &format!("2025-05-0{} 18:00:00", i + 1), None)
            })
            .collect::<Vec<_>>();
        let matches = classify_all(&records, now());

        let outcome = filter_and_count(&matches, PlayerPastFilter::ExcusedOrUnregistered);
        assert_eq!(ids(&outcome.filtered), vec![3, 2]);
        assert_eq!(outcome.counts.get(PlayerPastFilter::All), 7);
        assert_eq!(outcome.counts.get(PlayerPastFilter::Registered), 1);
        assert_eq!(outcome.counts.get(PlayerPastFilter::ExcusedOrUnregistered), 2);
        assert_eq!(outcome.counts.get(PlayerPastFilter::NoResponseOrSubstitute), 2);
    }

    #[test]
    fn test_counts_follow_input() {
        let mut matches = admin_fixture();
        let before = filter_and_count(&matches, AdminMatchFilter::All)
            .counts
            .get(AdminMatchFilter::Canceled);
        matches.retain(|m| !m.is_canceled);
        let after = filter_and_count(&matches, AdminMatchFilter::All)
            .counts
            .get(AdminMatchFilter::Canceled);

        assert_eq!(before, 2);
        assert_eq!(after, 0);
    }

    #[test]
    fn test_first_upcoming_select_yields_single_match() {
        let matches = classify_all(
            &[
                record(1, "2025-07-01 18:00:00", None),
                record(2, "2025-08-01 18:00:00", None),
            ],
            now(),
        );
        let sorted = sort_for_display(&matches);

        assert_eq!(ids(&AdminMatchFilter::FirstUpcoming.select(&sorted)), vec![1]);
        let outcome = filter_and_count(&matches, AdminMatchFilter::FirstUpcoming);
        assert_eq!(ids(&outcome.filtered), vec![1]);
        assert_eq!(outcome.counts.get(AdminMatchFilter::FirstUpcoming), 1);
        assert_eq!(AdminMatchFilter::Future.select(&sorted).len(), 2);
    }

    #[test]
    fn test_first_upcoming_tie_keeps_display_order() {
        let records = vec![
            record(1, "2025-07-01 10:00:00", None),
            record(2, "2025-07-01T10:00", None),
        ];
        let matches = classify_all(&records, now());
        let outcome = filter_and_count(&matches, AdminMatchFilter::FirstUpcoming);
        assert_eq!(ids(&outcome.filtered), vec![1]);

        let reversed = classify_all(&[records[1].clone(), records[0].clone()], now());
        let outcome = filter_and_count(&reversed, AdminMatchFilter::FirstUpcoming);
        assert_eq!(ids(&outcome.filtered), vec![2]);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn arb_record() -> impl Strategy<Value = MatchRecord> {
            (
                1i64..10_000,
                0u32..90,
                0u32..24,
                proptest::option::of(prop_oneof![
                    Just(MatchStatus::Canceled),
                    Just(MatchStatus::Uncanceled),
                    Just(MatchStatus::Updated),
                ]),
                proptest::option::of(1i64..30),
            )
                .prop_map(|(id, day, hour, status, match_number)| {
                    let starts = NaiveDate::from_ymd_opt(2025, 5, 1)
                        .unwrap()
                        .and_hms_opt(hour, 0, 0)
                        .unwrap()
                        + chrono::Duration::days(i64::from(day));
                    MatchRecord {
                        id,
                        match_number,
                        date_time: Some(starts.format("%Y-%m-%d %H:%M:%S").to_string()),
                        match_status: status,
                        ..Default::default()
                    }
                })
        }

        proptest! {
            /// First upcoming is at most one match, and none of the other
            /// qualifying matches starts earlier.
            #[test]
            fn prop_first_upcoming_is_earliest(
                records in proptest::collection::vec(arb_record(), 0..30)
            ) {
                let matches = classify_all(&records, now());
                let outcome = filter_and_count(&matches, AdminMatchFilter::FirstUpcoming);
                prop_assert!(outcome.filtered.len() <= 1);
                prop_assert!(outcome.counts.get(AdminMatchFilter::FirstUpcoming) <= 1);

                let qualifying = matches
                    .iter()
                    .filter(|m| m.is_upcoming && !m.is_canceled)
                    .collect::<Vec<_>>();
                prop_assert_eq!(outcome.filtered.is_empty(), qualifying.is_empty());
                if let Some(first) = outcome.filtered.first() {
                    for other in qualifying {
                        prop_assert!(first.starts_at <= other.starts_at);
                    }
                }
            }

            /// Future and past split the list with nothing left over.
            #[test]
            fn prop_future_and_past_partition_all(
                records in proptest::collection::vec(arb_record(), 0..30)
            ) {
                let matches = classify_all(&records, now());
                let outcome = filter_and_count(&matches, AdminMatchFilter::All);
                prop_assert_eq!(
                    outcome.counts.get(AdminMatchFilter::Future)
                        + outcome.counts.get(AdminMatchFilter::Past),
                    outcome.counts.get(AdminMatchFilter::All)
                );
                prop_assert_eq!(outcome.filtered.len(), records.len());
            }
        }
    }
}
