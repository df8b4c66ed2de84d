pub mod classify;
pub mod datetime;
pub mod filter;
pub mod history;
pub mod stats;

pub use classify::{classify, classify_all, player_status_label};
pub use datetime::{format_display, format_wire, now_local, parse_date_time};
pub use filter::{filter_and_count, first_upcoming, sort_for_display, MatchFilter};
pub use history::{diff, diff_history, FieldChangeSet, HistoryEntry, HistoryRow};
pub use stats::reduce;
