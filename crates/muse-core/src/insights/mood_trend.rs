//! Mood trend insight
//!
//! Fits an ordinary-least-squares slope to the last week of mood trend
//! points and reports a sustained climb or dip.

use crate::models::{Insight, InsightKind};

use super::engine::{InsightRule, RuleContext};

/// Trend points required before the rule considers the window meaningful
const MIN_TREND_POINTS: usize = 7;

/// Slope magnitude that counts as a real trend rather than noise
const SLOPE_THRESHOLD: f64 = 0.5;

/// Ordinary least squares slope of `values` against their indices 0..n
///
/// slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²). The denominator is
/// n²(n²−1)/12 for consecutive indices, which is nonzero for any n ≥ 2, so
/// no divide-by-zero guard is needed beyond the short-input check.
pub(crate) fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let n_f = n as f64;
    let sum_x = (n * (n - 1)) as f64 / 2.0;
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, v)| i as f64 * v).sum();
    let sum_x2: f64 = (0..n).map(|i| (i * i) as f64).sum();

    (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_x2 - sum_x * sum_x)
}

/// Rule that detects sustained mood climbs and dips
pub struct MoodTrendRule;

impl MoodTrendRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoodTrendRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for MoodTrendRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Mood
    }

    fn name(&self) -> &'static str {
        "Mood Trend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        if ctx.trends.len() < MIN_TREND_POINTS {
            return None;
        }

        let recent: Vec<f64> = ctx.trends[ctx.trends.len() - MIN_TREND_POINTS..]
            .iter()
            .map(|t| t.average_mood)
            .collect();
        let slope = ols_slope(&recent);

        if slope > SLOPE_THRESHOLD {
            Some(Insight {
                kind: InsightKind::Mood,
                title: "Positive Mood Trend".to_string(),
                description: "Your mood has been consistently improving over the past week! 📈"
                    .to_string(),
                recommendation: Some(
                    "Keep doing what you're doing - your self-care routine seems to be working!"
                        .to_string(),
                ),
                confidence: 0.8,
                data_points: recent.len(),
            })
        } else if slope < -SLOPE_THRESHOLD {
            Some(Insight {
                kind: InsightKind::Mood,
                title: "Mood Dip Detected".to_string(),
                description: "Your mood has been lower than usual lately.".to_string(),
                recommendation: Some(
                    "Consider reaching out to friends, practicing extra self-care, or trying a new activity."
                        .to_string(),
                ),
                confidence: 0.7,
                data_points: recent.len(),
            })
        } else {
            None
        }
    }
}
