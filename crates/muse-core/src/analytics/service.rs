//! Analytics service - report generation and the report cache gate

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::db::Database;
use crate::error::Result;
use crate::insights::{InsightEngine, RuleContext};
use crate::models::{Analytics, Period};

use super::stats::calculate_activity_stats;
use super::trends::{calculate_mood_trends, filter_entries_by_period};

/// How many entries are pulled from the store per report
pub const ANALYTICS_FETCH_LIMIT: usize = 1000;

/// Stored reports younger than this are served without recomputing
const REPORT_FRESHNESS_SECS: i64 = 3600;

/// Generates analytics reports and mediates the report cache
///
/// Construct once and pass by reference; the service holds no mutable state
/// beyond its rule set, so it is freely shareable.
pub struct AnalyticsService {
    engine: InsightEngine,
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsService {
    /// Create a service with the built-in insight rules
    pub fn new() -> Self {
        Self {
            engine: InsightEngine::new(),
        }
    }

    /// Create a service with a custom rule engine
    pub fn with_engine(engine: InsightEngine) -> Self {
        Self { engine }
    }

    /// Generate a fresh report for (user, period) as of now
    pub fn generate(&self, db: &Database, user_id: &str, period: Period) -> Result<Analytics> {
        self.generate_at(db, user_id, period, Utc::now())
    }

    /// Generate a fresh report with an explicit clock
    ///
    /// Aside from the entry fetch, the computation is a pure function of
    /// (entries, period, now); tests pin `now` for reproducibility.
    pub fn generate_at(
        &self,
        db: &Database,
        user_id: &str,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<Analytics> {
        let entries = db.get_journal_entries(user_id, ANALYTICS_FETCH_LIMIT)?;
        let filtered = filter_entries_by_period(&entries, period, now);
        debug!(
            user = user_id,
            period = period.as_str(),
            fetched = entries.len(),
            in_window = filtered.len(),
            "Generating analytics"
        );

        let mood_trends = calculate_mood_trends(&filtered, period);
        let activity_stats = calculate_activity_stats(&filtered);
        let insights = self
            .engine
            .evaluate_all(&RuleContext::new(&filtered, &mood_trends, &activity_stats));

        Ok(Analytics {
            user_id: user_id.to_string(),
            period,
            mood_trends,
            activity_stats,
            insights,
            generated_at: now,
        })
    }

    /// Return a stored report if it is under an hour old, else recompute,
    /// persist, and return the new one
    ///
    /// The stored report is an optimization with a deliberate staleness
    /// tolerance; a failing cache read is logged and treated as a miss, while
    /// a failing save propagates.
    pub fn get_or_generate(
        &self,
        db: &Database,
        user_id: &str,
        period: Period,
    ) -> Result<Analytics> {
        match db.get_analytics(user_id, period) {
            Ok(Some(stored))
                if Utc::now() - stored.generated_at
                    < Duration::seconds(REPORT_FRESHNESS_SECS) =>
            {
                debug!(
                    user = user_id,
                    period = period.as_str(),
                    generated_at = %stored.generated_at,
                    "Serving stored report"
                );
                return Ok(stored);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(user = user_id, period = period.as_str(), error = %e,
                    "Report cache read failed, recomputing");
            }
        }

        let report = self.generate(db, user_id, period)?;
        db.save_analytics(&report)?;
        Ok(report)
    }
}
