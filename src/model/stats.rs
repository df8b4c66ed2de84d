use serde::{Deserialize, Serialize};

/// Per-status tallies for one player in one season, as sent by the API.
///
/// Every field is optional; missing or non-finite values count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsTotals {
    #[serde(default)]
    pub registered: Option<f64>,
    #[serde(default)]
    pub unregistered: Option<f64>,
    #[serde(default)]
    pub excused: Option<f64>,
    #[serde(default)]
    pub substituted: Option<f64>,
    #[serde(default)]
    pub reserved: Option<f64>,
    #[serde(default)]
    pub no_response: Option<f64>,
    #[serde(default)]
    pub no_excused: Option<f64>,
    #[serde(default)]
    pub all_matches_in_season: Option<f64>,
    #[serde(default)]
    pub all_matches_in_season_for_player: Option<f64>,
}

/// The status buckets a player's season is broken into.
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
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum StatsCategory {
    Registered,
    Unregistered,
    Excused,
    Substituted,
    Reserved,
    NoResponse,
    NoExcused,
}

impl StatsCategory {
    pub fn label(self) -> &'static str {
        match self {
            StatsCategory::Registered => "Přihlášen",
            StatsCategory::Unregistered => "Odhlášen",
            StatsCategory::Excused => "Omluven",
            StatsCategory::Substituted => "Náhradník",
            StatsCategory::Reserved => "Čekající",
            StatsCategory::NoResponse => "Bez reakce",
            StatsCategory::NoExcused => "Neomluven",
        }
    }

    /// Whether this bucket counts as the player having answered.
    pub fn is_response(self) -> bool {
        !matches!(self, StatsCategory::NoResponse | StatsCategory::NoExcused)
    }
}

/// One line of the tabular statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusRow {
    pub category: StatsCategory,
    pub value: f64,
    pub percent: u8,
}

/// One slice of the statistics chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: StatsCategory,
    pub label: &'static str,
    pub value: f64,
}

/// Everything the statistics view renders, derived from [`PlayerStatsTotals`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStats {
    pub responded: f64,
    pub response_rate: u8,
    pub no_response_rate: u8,
    pub season_coverage: u8,
    pub all_matches_in_season: f64,
    pub all_matches_in_season_for_player: f64,
    /// Every category, zeros included.
    pub rows: Vec<StatusRow>,
    /// Non-zero categories only.
    pub chart: Vec<ChartSlice>,
}
