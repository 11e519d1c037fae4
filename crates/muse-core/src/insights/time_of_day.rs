//! Time-of-day pattern insight
//!
//! Describes when the user tends to journal. One lookup row per slot, keyed
//! by the modal time-of-day from the activity stats; always fires when the
//! window holds at least one entry.

use crate::models::{Insight, InsightKind, TimeOfDay};

use super::engine::{InsightRule, RuleContext};

struct SlotText {
    title: &'static str,
    description: &'static str,
    recommendation: &'static str,
}

fn slot_text(slot: TimeOfDay) -> &'static SlotText {
    match slot {
        TimeOfDay::EarlyMorning => &SlotText {
            title: "Dawn Reflector",
            description: "You reach for your journal in the quiet hours before sunrise.",
            recommendation: "Pre-dawn pages pair well with a slow start - keep the lights low.",
        },
        TimeOfDay::Morning => &SlotText {
            title: "Morning Journaler",
            description: "You love starting your day with reflection!",
            recommendation: "Morning journaling is great for setting daily intentions.",
        },
        TimeOfDay::Afternoon => &SlotText {
            title: "Midday Reflection",
            description: "You prefer checking in with yourself during the day.",
            recommendation: "Afternoon journaling helps maintain mindfulness throughout the day.",
        },
        TimeOfDay::Evening => &SlotText {
            title: "Evening Processor",
            description: "You like to wind down by processing your day.",
            recommendation: "Evening journaling is perfect for gratitude and daily reflection.",
        },
        TimeOfDay::Night => &SlotText {
            title: "Night Owl Writer",
            description: "Your creativity flows in the quiet night hours.",
            recommendation: "Late-night journaling can be deeply contemplative - just ensure good sleep!",
        },
    }
}

/// Rule that reports the user's most active journaling slot
pub struct TimeOfDayRule;

impl TimeOfDayRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeOfDayRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for TimeOfDayRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Pattern
    }

    fn name(&self) -> &'static str {
        "Time of Day"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let text = slot_text(ctx.stats.most_active_time);
        Some(Insight {
            kind: InsightKind::Pattern,
            title: text.title.to_string(),
            description: text.description.to_string(),
            recommendation: Some(text.recommendation.to_string()),
            confidence: 0.7,
            data_points: 1,
        })
    }
}
