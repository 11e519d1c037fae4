//! Word count insight

use crate::models::{Insight, InsightKind};

use super::engine::{InsightRule, RuleContext};

/// Total words across the window before the rule fires
const WORD_THRESHOLD: usize = 1000;

/// Rule that recognizes prolific writers
pub struct WordCountRule;

impl WordCountRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for WordCountRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Activity
    }

    fn name(&self) -> &'static str {
        "Word Count"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        if ctx.stats.word_count <= WORD_THRESHOLD {
            return None;
        }

        Some(Insight {
            kind: InsightKind::Activity,
            title: "Expressive Writer".to_string(),
            description: format!(
                "You've written {} words across your entries!",
                ctx.stats.word_count
            ),
            recommendation: Some(
                "Your detailed self-expression shows deep self-reflection skills.".to_string(),
            ),
            confidence: 0.8,
            data_points: ctx.stats.total_entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_on, stats_for, with_text};
    use chrono::NaiveDate;

    #[test]
    fn test_prolific_writer_fires() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let long_text = "word ".repeat(1200);
        let entries = vec![with_text(entry_on("u1", day, 9, 6), &long_text)];
        let stats = stats_for(&entries);
        assert_eq!(stats.word_count, 1200);

        let ctx = RuleContext::new(&entries, &[], &stats);
        let insight = WordCountRule::new().evaluate(&ctx).unwrap();
        assert_eq!(insight.title, "Expressive Writer");
        assert_eq!(insight.confidence, 0.8);
    }

    #[test]
    fn test_exactly_threshold_is_silent() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let text = "word ".repeat(1000);
        let entries = vec![with_text(entry_on("u1", day, 9, 6), &text)];
        let stats = stats_for(&entries);
        assert_eq!(stats.word_count, 1000);

        let ctx = RuleContext::new(&entries, &[], &stats);
        assert!(WordCountRule::new().evaluate(&ctx).is_none());
    }
}
