//! Insight rule engine
//!
//! A fixed set of stateless rules, each consuming the filtered entries, mood
//! trends, and activity stats for a reporting period and optionally emitting
//! one finding. Rules are evaluated in registration order and that order is
//! the output order - consumers see findings exactly as the rules fired.

mod consistency;
mod engine;
mod mood_trend;
mod time_of_day;
mod weather_mood;
mod word_count;

pub use consistency::ConsistencyRule;
pub use engine::{InsightEngine, InsightRule, RuleContext};
pub use mood_trend::MoodTrendRule;
pub use time_of_day::TimeOfDayRule;
pub use weather_mood::WeatherMoodRule;
pub use word_count::WordCountRule;
