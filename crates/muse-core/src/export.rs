//! Export documents
//!
//! Two shapes: the insights-page journal export and the full user-data
//! takeout. Field names are part of the contract - previously exported files
//! must keep deserializing, so every struct pins its camelCase names.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{entry_word_count, AnalyticsService, ANALYTICS_FETCH_LIMIT};
use crate::db::Database;
use crate::error::Result;
use crate::models::{Analytics, Insight, JournalEntry, MoodData, MoodTrend, Period, User};

/// Per-entry digest carried in the journal export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDigest {
    pub date: NaiveDate,
    pub mood: MoodData,
    pub word_count: usize,
}

impl From<&JournalEntry> for EntryDigest {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            date: entry.date,
            mood: entry.mood.clone(),
            word_count: entry_word_count(entry),
        }
    }
}

/// The journal export document consumed by the surrounding app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalExport {
    pub insights: Vec<Insight>,
    pub mood_history: Vec<MoodTrend>,
    pub journal_entries: Vec<EntryDigest>,
    pub export_date: chrono::DateTime<Utc>,
}

/// Full takeout of a user's data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataExport {
    pub user: User,
    pub entries: Vec<JournalEntry>,
    /// Latest stored report per period, where one exists
    pub analytics: Vec<Analytics>,
    pub exported_at: chrono::DateTime<Utc>,
}

impl AnalyticsService {
    /// Build the journal export for (user, period)
    ///
    /// Insights and mood history come from the cached-or-fresh report; entry
    /// digests cover everything the report's fetch would have seen.
    pub fn export_journal(
        &self,
        db: &Database,
        user_id: &str,
        period: Period,
    ) -> Result<JournalExport> {
        let report = self.get_or_generate(db, user_id, period)?;
        let entries = db.get_journal_entries(user_id, ANALYTICS_FETCH_LIMIT)?;

        Ok(JournalExport {
            insights: report.insights,
            mood_history: report.mood_trends,
            journal_entries: entries.iter().map(EntryDigest::from).collect(),
            export_date: Utc::now(),
        })
    }
}

/// Build the full user-data takeout
pub fn export_user_data(db: &Database, user_id: &str) -> Result<UserDataExport> {
    let user = db.get_or_create_user(user_id)?;
    let entries = db.get_journal_entries(user_id, ANALYTICS_FETCH_LIMIT)?;

    let mut analytics = vec![];
    for period in [Period::Week, Period::Month, Period::Year] {
        if let Some(report) = db.get_analytics(user_id, period)? {
            analytics.push(report);
        }
    }

    Ok(UserDataExport {
        user,
        entries,
        analytics,
        exported_at: Utc::now(),
    })
}
