//! Rule engine - orchestrates insight evaluation

use crate::models::{ActivityStats, Insight, InsightKind, JournalEntry, MoodTrend};

use super::{ConsistencyRule, MoodTrendRule, TimeOfDayRule, WeatherMoodRule, WordCountRule};

/// Inputs provided to insight rules
pub struct RuleContext<'a> {
    /// Entries within the reporting window
    pub entries: &'a [JournalEntry],
    /// Mood trend points, ascending by bucket date
    pub trends: &'a [MoodTrend],
    /// Activity statistics for the window
    pub stats: &'a ActivityStats,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        entries: &'a [JournalEntry],
        trends: &'a [MoodTrend],
        stats: &'a ActivityStats,
    ) -> Self {
        Self {
            entries,
            trends,
            stats,
        }
    }
}

/// Trait for insight rules
pub trait InsightRule: Send + Sync {
    /// Category of the insights this rule produces
    fn kind(&self) -> InsightKind;

    /// Human-readable rule name
    fn name(&self) -> &'static str;

    /// Evaluate the rule, emitting at most one insight
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight>;
}

/// The insight engine holding the registered rule set
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their canonical order
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        // Registration order is output order
        engine.register(Box::new(MoodTrendRule::new()));
        engine.register(Box::new(ConsistencyRule::new()));
        engine.register(Box::new(TimeOfDayRule::new()));
        engine.register(Box::new(WordCountRule::new()));
        engine.register(Box::new(WeatherMoodRule::new()));

        engine
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Evaluate all rules and collect their findings in evaluation order
    ///
    /// With no entries in the window the whole rule set is skipped: there is
    /// no data for any rule to describe, including the otherwise
    /// unconditional time-of-day rule.
    pub fn evaluate_all(&self, ctx: &RuleContext<'_>) -> Vec<Insight> {
        if ctx.stats.total_entries == 0 {
            tracing::debug!("No entries in window, skipping insight rules");
            return vec![];
        }

        let mut insights = vec![];
        for rule in &self.rules {
            match rule.evaluate(ctx) {
                Some(insight) => {
                    tracing::debug!(rule = rule.name(), title = %insight.title, "Rule fired");
                    insights.push(insight);
                }
                None => {
                    tracing::debug!(rule = rule.name(), "Rule did not fire");
                }
            }
        }
        insights
    }

    /// Names of the registered rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
