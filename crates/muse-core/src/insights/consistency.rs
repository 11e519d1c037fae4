//! Journaling consistency insight

use crate::models::{Insight, InsightKind};

use super::engine::{InsightRule, RuleContext};

/// Rule that celebrates a better-than-daily journaling habit
pub struct ConsistencyRule;

impl ConsistencyRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsistencyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for ConsistencyRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Activity
    }

    fn name(&self) -> &'static str {
        "Consistency"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        if ctx.stats.average_entries_per_day <= 1.0 {
            return None;
        }

        Some(Insight {
            kind: InsightKind::Activity,
            title: "Consistent Journaling".to_string(),
            description: format!(
                "You're averaging {} entries per day - amazing consistency! ✨",
                ctx.stats.average_entries_per_day
            ),
            recommendation: Some(
                "Your regular journaling habit is building great self-awareness!".to_string(),
            ),
            confidence: 0.9,
            data_points: ctx.stats.total_entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_on, stats_for};
    use chrono::NaiveDate;

    #[test]
    fn test_multiple_entries_per_day_fires() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let entries = vec![
            entry_on("u1", day, 8, 6),
            entry_on("u1", day, 13, 7),
            entry_on("u1", day, 20, 5),
        ];
        let stats = stats_for(&entries);
        let ctx = RuleContext::new(&entries, &[], &stats);

        let insight = ConsistencyRule::new().evaluate(&ctx).unwrap();
        assert_eq!(insight.title, "Consistent Journaling");
        assert_eq!(insight.confidence, 0.9);
        assert_eq!(insight.data_points, 3);
    }

    #[test]
    fn test_exactly_one_per_day_is_silent() {
        let entries: Vec<_> = (1..=5)
            .map(|d| entry_on("u1", NaiveDate::from_ymd_opt(2026, 3, d).unwrap(), 9, 5))
            .collect();
        let stats = stats_for(&entries);
        assert_eq!(stats.average_entries_per_day, 1.0);

        let ctx = RuleContext::new(&entries, &[], &stats);
        assert!(ConsistencyRule::new().evaluate(&ctx).is_none());
    }
}
