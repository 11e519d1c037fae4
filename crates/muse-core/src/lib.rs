//! Muse Core Library
//!
//! Shared functionality for the Muse journaling and mood analytics tool:
//! - Database access and migrations (entries, users, reports)
//! - Analytics report generation with a 1-hour report cache
//! - Insight rule engine (mood trends, consistency, time of day,
//!   word count, weather correlation)
//! - Persona and theme attribute tables
//! - Export documents and snapshot backups

pub mod analytics;
pub mod backup;
pub mod db;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod personas;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analytics::{AnalyticsService, ANALYTICS_FETCH_LIMIT};
pub use backup::{
    default_backup_dir, BackupDestination, BackupInfo, BackupResult, LocalDestination,
    PruneResult, RetentionPolicy,
};
pub use db::Database;
pub use error::{Error, Result};
pub use export::{export_user_data, EntryDigest, JournalExport, UserDataExport};
pub use insights::{InsightEngine, InsightRule, RuleContext};
pub use models::{
    ActivityStats, Analytics, ElementKind, Insight, InsightKind, JournalElement, JournalEntry,
    MoodData, MoodTrend, NewJournalEntry, Period, TimeOfDay, User, UserPreferences,
    WeatherSnapshot,
};
pub use personas::{Persona, PersonaProfile, Theme, ThemeProfile};
