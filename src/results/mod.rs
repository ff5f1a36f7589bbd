//! Result items extracted from search responses and their text rendering

mod extract;
mod format;
mod types;

pub use extract::{extract_relevant_data, hit_count};
pub use format::format_results;
pub use types::*;
