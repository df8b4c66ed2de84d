pub use client::{Endpoints, ScheduleClient};
pub use engine::{
    classify, classify_all, diff, diff_history, filter_and_count, first_upcoming, format_display,
    format_wire, now_local, parse_date_time, player_status_label, reduce, sort_for_display,
    FieldChangeSet, HistoryEntry, HistoryRow, MatchFilter,
};
pub use engine::history::{FieldValue, MatchField, RegistrationField};
pub use error::{Result, ScheduleError};
pub use model::*;
pub use view::{MatchCard, MatchListPage, MatchListView};

pub(crate) mod api;
pub mod client;
pub mod engine;
pub mod error;
pub mod model;
pub mod view;
