//! Journal entry storage

use chrono::{NaiveDate, Utc};
use rusqlite::params;
use sha2::{Digest, Sha256};
use tracing::warn;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{JournalEntry, MoodData, NewJournalEntry};

/// Raw entry row before JSON columns are parsed
struct EntryRow {
    id: String,
    user_id: String,
    title: Option<String>,
    date: String,
    mood: String,
    elements: String,
    weather: Option<String>,
    template: Option<String>,
    created_at: String,
}

impl EntryRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            date: row.get(3)?,
            mood: row.get(4)?,
            elements: row.get(5)?,
            weather: row.get(6)?,
            template: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    /// Decode into a typed entry.
    ///
    /// Rows with an unparseable date or malformed JSON columns yield None;
    /// callers drop them from results rather than failing the whole query.
    fn decode(self) -> Option<JournalEntry> {
        let date = match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                warn!(entry = %self.id, date = %self.date, error = %e, "Skipping entry with unparseable date");
                return None;
            }
        };
        let mood: MoodData = match serde_json::from_str(&self.mood) {
            Ok(m) => m,
            Err(e) => {
                warn!(entry = %self.id, error = %e, "Skipping entry with malformed mood");
                return None;
            }
        };
        let elements = match serde_json::from_str(&self.elements) {
            Ok(els) => els,
            Err(e) => {
                warn!(entry = %self.id, error = %e, "Skipping entry with malformed elements");
                return None;
            }
        };
        // A malformed weather snapshot degrades to "no weather" - it only
        // feeds an optional correlation insight
        let weather = self.weather.as_deref().and_then(|w| {
            serde_json::from_str(w)
                .map_err(|e| {
                    warn!(entry = %self.id, error = %e, "Ignoring malformed weather snapshot")
                })
                .ok()
        });

        Some(JournalEntry {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            date,
            mood,
            elements,
            weather,
            template: self.template,
            created_at: parse_datetime(&self.created_at),
        })
    }
}

const ENTRY_COLUMNS: &str =
    "id, user_id, title, date, mood, elements, weather, template, created_at";

/// Compute a content-addressed entry id
fn entry_id(new: &NewJournalEntry, created_at: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(new.user_id.as_bytes());
    hasher.update(new.date.to_string().as_bytes());
    hasher.update(created_at.as_bytes());
    for element in &new.elements {
        hasher.update(element.content.as_bytes());
    }
    hex::encode(hasher.finalize())
}

impl Database {
    /// Insert a new journal entry, assigning its id and creation timestamp
    ///
    /// Returns the stored entry. Fails with `InvalidData` if the mood
    /// intensity is outside 1-10.
    pub fn insert_entry(&self, new: &NewJournalEntry) -> Result<JournalEntry> {
        if new.mood.intensity < 1 || new.mood.intensity > 10 {
            return Err(Error::InvalidData(format!(
                "Mood intensity must be between 1 and 10, got {}",
                new.mood.intensity
            )));
        }

        let created_at = Utc::now();
        let created_at_str = created_at.to_rfc3339();
        let id = entry_id(new, &created_at_str);

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO entries (id, user_id, title, date, mood, elements, weather, template, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id,
                new.user_id,
                new.title,
                new.date.to_string(),
                serde_json::to_string(&new.mood)?,
                serde_json::to_string(&new.elements)?,
                new.weather
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?,
                new.template,
                created_at_str,
            ],
        )?;

        Ok(JournalEntry {
            id,
            user_id: new.user_id.clone(),
            title: new.title.clone(),
            date: new.date,
            mood: new.mood.clone(),
            elements: new.elements.clone(),
            weather: new.weather.clone(),
            template: new.template.clone(),
            created_at,
        })
    }

    /// Get journal entries for a user, newest date first, up to `limit`
    ///
    /// Rows that fail to decode are dropped with a warning.
    pub fn get_journal_entries(&self, user_id: &str, limit: usize) -> Result<Vec<JournalEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM entries WHERE user_id = ?1 ORDER BY date DESC, created_at DESC LIMIT ?2",
            ENTRY_COLUMNS
        ))?;

        let rows = stmt
            .query_map(params![user_id, limit as i64], EntryRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows.into_iter().filter_map(EntryRow::decode).collect())
    }

    /// Get a single entry by id
    pub fn get_entry(&self, id: &str) -> Result<Option<JournalEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM entries WHERE id = ?1",
            ENTRY_COLUMNS
        ))?;

        let mut rows = stmt.query_map(params![id], EntryRow::from_row)?;
        match rows.next().transpose()? {
            Some(row) => Ok(row.decode()),
            None => Ok(None),
        }
    }

    /// Delete an entry by id
    pub fn delete_entry(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Entry not found: {}", id)));
        }
        Ok(())
    }

    /// Count all entries for a user
    pub fn count_entries(&self, user_id: &str) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM entries WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Distinct user ids that have at least one entry
    ///
    /// Used by the background refresh scheduler to know whose reports to
    /// regenerate.
    pub fn list_active_user_ids(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT DISTINCT user_id FROM entries ORDER BY user_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}
