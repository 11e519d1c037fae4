//! Analytics report generation
//!
//! The pipeline: fetch a user's entries, filter to the reporting window,
//! bucket by date for mood trends, summarize activity, then feed everything
//! through the insight rule engine. Reports are cached with a one-hour
//! freshness window to bound recomputation against a growing entry set.

mod service;
mod stats;
mod trends;

pub use service::{AnalyticsService, ANALYTICS_FETCH_LIMIT};
pub use stats::{calculate_activity_stats, entry_word_count};
pub use trends::{calculate_mood_trends, filter_entries_by_period};
