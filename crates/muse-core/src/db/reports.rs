//! Persisted analytics reports
//!
//! The report store is an optimization, not a source of truth: reports are
//! regenerated from entries whenever the stored copy is stale, and
//! last-write-wins is acceptable for concurrent writers.

use rusqlite::params;
use tracing::warn;

use super::Database;
use crate::error::Result;
use crate::models::{Analytics, Period};

impl Database {
    /// Persist a generated analytics report
    pub fn save_analytics(&self, analytics: &Analytics) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO analytics_reports (user_id, period, report, generated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                analytics.user_id,
                analytics.period.as_str(),
                serde_json::to_string(analytics)?,
                analytics.generated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get the most recently generated report for (user, period), if any
    pub fn get_analytics(&self, user_id: &str, period: Period) -> Result<Option<Analytics>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT report FROM analytics_reports
            WHERE user_id = ?1 AND period = ?2
            ORDER BY generated_at DESC
            LIMIT 1
            "#,
        )?;

        let mut rows = stmt.query_map(params![user_id, period.as_str()], |row| {
            row.get::<_, String>(0)
        })?;

        match rows.next().transpose()? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(report) => Ok(Some(report)),
                Err(e) => {
                    // Treat an undecodable stored report as absent; the
                    // caller will regenerate and overwrite it
                    warn!(user = user_id, period = period.as_str(), error = %e,
                        "Discarding malformed stored report");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Delete stored reports older than the latest `keep` per (user, period)
    pub fn prune_analytics(&self, user_id: &str, keep: usize) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            r#"
            DELETE FROM analytics_reports
            WHERE user_id = ?1 AND id NOT IN (
                SELECT id FROM analytics_reports r2
                WHERE r2.user_id = ?1 AND r2.period = analytics_reports.period
                ORDER BY r2.generated_at DESC
                LIMIT ?2
            )
            "#,
            params![user_id, keep as i64],
        )?;
        Ok(deleted)
    }

    /// Count stored reports
    pub fn count_reports(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count =
            conn.query_row("SELECT COUNT(*) FROM analytics_reports", [], |row| row.get(0))?;
        Ok(count)
    }
}
