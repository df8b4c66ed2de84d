use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::model::{ChartSlice, DerivedStats, PlayerStatsTotals, StatsCategory, StatusRow};

/// Coerce a tally to a non-negative finite number. Missing, infinite and
/// NaN values become 0.
fn tally(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or_default()
}

/// Rounded percentage of `value` in `total`, 0 for an empty total.
///
/// Tallies are kept as sent; only the percentage is rounded.
pub fn pct(value: f64, total: f64) -> u8 {
    if total.is_nan() || total <= 0.0 || !value.is_finite() {
        return 0;
    }
    (value / total * 100.0).round().clamp(0.0, 100.0) as u8
}

fn category_value(stats: &PlayerStatsTotals, category: StatsCategory) -> f64 {
    tally(match category {
        StatsCategory::Registered => stats.registered,
        StatsCategory::Unregistered => stats.unregistered,
        StatsCategory::Excused => stats.excused,
        StatsCategory::Substituted => stats.substituted,
        StatsCategory::Reserved => stats.reserved,
        StatsCategory::NoResponse => stats.no_response,
        StatsCategory::NoExcused => stats.no_excused,
    })
}

/// Derive rates, table rows and chart slices from a player's season tallies.
pub fn reduce(stats: &PlayerStatsTotals) -> DerivedStats {
    let all_matches_in_season = tally(stats.all_matches_in_season);
    let denominator = tally(stats.all_matches_in_season_for_player);

    let values = StatsCategory::iter()
        .map(|category| (category, category_value(stats, category)))
        .collect_vec();

    let responded = values
        .iter()
        .filter(|(category, _)| category.is_response())
        .map(|(_, value)| *value)
        .sum::<f64>();
    let no_response = category_value(stats, StatsCategory::NoResponse);

    let rows = values
        .iter()
        .map(|&(category, value)| StatusRow {
            category,
            value,
            percent: pct(value, denominator),
        })
        .collect_vec();

    let chart = values
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|&(category, value)| ChartSlice {
            category,
            label: category.label(),
            value,
        })
        .collect_vec();

    let derived = DerivedStats {
        responded,
        response_rate: pct(responded, denominator),
        no_response_rate: pct(no_response, denominator),
        season_coverage: pct(denominator, all_matches_in_season),
        all_matches_in_season,
        all_matches_in_season_for_player: denominator,
        rows,
        chart,
    };
    debug!(
        responded,
        response_rate = derived.response_rate,
        no_response_rate = derived.no_response_rate,
        "reduced player stats"
    );
    derived
}
