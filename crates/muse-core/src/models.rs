//! Domain models for Muse
//!
//! Wire-facing types serialize in camelCase so stored reports and export
//! documents stay compatible with previously exported files.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::personas::{Persona, Theme};

/// Reporting window controlling both the filter range and bucket granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 7 days, bucketed per day
    Week,
    /// Last calendar month, bucketed per day
    Month,
    /// Last calendar year, bucketed per month
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("Unknown period: {}", s)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content block types within a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Sticker,
    Mood,
    Voice,
    Photo,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Sticker => "sticker",
            Self::Mood => "mood",
            Self::Voice => "voice",
            Self::Photo => "photo",
        }
    }
}

impl std::str::FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "sticker" => Ok(Self::Sticker),
            "mood" => Ok(Self::Mood),
            "voice" => Ok(Self::Voice),
            "photo" => Ok(Self::Photo),
            _ => Err(format!("Unknown element kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named time-of-day slots used for activity bucketing
///
/// Variant order is day order; it doubles as the deterministic tie-break when
/// two slots hold the same entry count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "early morning")]
    EarlyMorning,
    #[serde(rename = "morning")]
    Morning,
    #[serde(rename = "afternoon")]
    Afternoon,
    #[serde(rename = "evening")]
    Evening,
    #[serde(rename = "night")]
    Night,
}

impl TimeOfDay {
    /// All slots in day order
    pub const ALL: [TimeOfDay; 5] = [
        Self::EarlyMorning,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
    ];

    /// Slot for an hour-of-day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        if hour < 6 {
            Self::EarlyMorning
        } else if hour < 12 {
            Self::Morning
        } else if hour < 17 {
            Self::Afternoon
        } else if hour < 21 {
            Self::Evening
        } else {
            Self::Night
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyMorning => "early morning",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mood captured with a journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodData {
    /// Primary mood label (e.g., "content", "anxious")
    pub primary: String,
    /// Intensity on a 1-10 scale
    pub intensity: u8,
    /// Mood emoji shown in trends
    pub emoji: String,
    /// Free-text contributing factors ("sleep", "weather", ...)
    #[serde(default)]
    pub factors: Vec<String>,
    /// Display color/gradient token
    pub color: String,
}

/// One content block of a journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub content: String,
}

/// Weather snapshot captured at entry creation time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Condition label (e.g., "Clear", "Rain")
    pub condition: String,
    pub description: String,
    pub temperature: f64,
}

/// A persisted journaling session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    /// Logical day the entry represents (may differ from creation time)
    pub date: NaiveDate,
    pub mood: MoodData,
    #[serde(default)]
    pub elements: Vec<JournalElement>,
    pub weather: Option<WeatherSnapshot>,
    /// Visual template used, feeds the favorite-themes statistic
    pub template: Option<String>,
    /// Actual creation timestamp, used for time-of-day bucketing
    pub created_at: DateTime<Utc>,
}

/// A new journal entry before insertion (id and created_at assigned by the store)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub user_id: String,
    pub title: Option<String>,
    pub date: NaiveDate,
    pub mood: MoodData,
    #[serde(default)]
    pub elements: Vec<JournalElement>,
    pub weather: Option<WeatherSnapshot>,
    pub template: Option<String>,
}

/// One mood aggregation point (per day, or per month for year reports)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodTrend {
    pub date: NaiveDate,
    /// Mean intensity across entries in the bucket
    pub average_mood: f64,
    /// Most frequent emoji in the bucket
    pub dominant_emoji: String,
    /// Deduplicated union of all factors in the bucket
    pub factors: Vec<String>,
}

/// Activity summary for a report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub total_entries: usize,
    /// Entries divided by the inclusive day-span of the filtered set,
    /// rounded to 1 decimal
    pub average_entries_per_day: f64,
    pub most_active_time: TimeOfDay,
    /// Top 3 most frequent template ids
    pub favorite_themes: Vec<String>,
    pub favorite_personas: Vec<String>,
    /// Whitespace-delimited token count across all text elements
    pub word_count: usize,
}

/// Insight categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Mood,
    Activity,
    Weather,
    Music,
    Pattern,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Activity => "activity",
            Self::Weather => "weather",
            Self::Music => "music",
            Self::Pattern => "pattern",
        }
    }
}

impl std::str::FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mood" => Ok(Self::Mood),
            "activity" => Ok(Self::Activity),
            "weather" => Ok(Self::Weather),
            "music" => Ok(Self::Music),
            "pattern" => Ok(Self::Pattern),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One human-readable finding produced by an insight rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub recommendation: Option<String>,
    /// Fixed per-rule weight in [0, 1]; not a fitted probability
    pub confidence: f64,
    /// Count of observations the rule considered
    pub data_points: usize,
}

/// A complete analytics report for (user, period)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub user_id: String,
    pub period: Period,
    /// Chronologically ascending
    pub mood_trends: Vec<MoodTrend>,
    pub activity_stats: ActivityStats,
    /// In rule-evaluation order
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
}

/// Notification preference toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub daily_reminder: bool,
    pub mood_reminder: bool,
    pub weekly_insights: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            daily_reminder: true,
            mood_reminder: true,
            weekly_insights: true,
        }
    }
}

/// Privacy preference toggles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPrefs {
    pub share_analytics: bool,
    pub public_entries: bool,
}

/// Per-user preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub selected_persona: Persona,
    pub selected_theme: Theme,
    pub location: Option<String>,
    pub timezone: String,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub privacy: PrivacyPrefs,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_persona: Persona::SoftGirl,
            selected_theme: Theme::DarkAcademia,
            location: None,
            timezone: "UTC".to_string(),
            notifications: NotificationPrefs::default(),
            privacy: PrivacyPrefs::default(),
        }
    }
}

/// A journaling user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
