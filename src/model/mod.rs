mod classified;
mod filter;
mod history;
mod match_record;
mod stats;

pub use classified::*;
pub use filter::*;
pub use history::*;
pub use match_record::*;
pub use stats::*;
