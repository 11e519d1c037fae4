//! Shared builders for unit tests

use chrono::{Datelike, NaiveDate, TimeZone, Utc};

use crate::analytics::calculate_activity_stats;
use crate::models::{
    ActivityStats, ElementKind, JournalElement, JournalEntry, MoodData, WeatherSnapshot,
};

/// An entry for `user` on `date`, created at `hour`:00 UTC with the given
/// mood intensity
pub(crate) fn entry_on(user: &str, date: NaiveDate, hour: u32, intensity: u8) -> JournalEntry {
    let created_at = Utc
        .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
        .unwrap();
    JournalEntry {
        id: format!("{}-{}-{:02}", user, date, hour),
        user_id: user.to_string(),
        title: None,
        date,
        mood: MoodData {
            primary: "content".to_string(),
            intensity,
            emoji: "😊".to_string(),
            factors: vec![],
            color: "from-blue-400 to-purple-400".to_string(),
        },
        elements: vec![],
        weather: None,
        template: None,
        created_at,
    }
}

pub(crate) fn with_text(mut entry: JournalEntry, content: &str) -> JournalEntry {
    let id = format!("el-{}", entry.elements.len());
    entry.elements.push(JournalElement {
        id,
        kind: ElementKind::Text,
        content: content.to_string(),
    });
    entry
}

pub(crate) fn with_emoji(mut entry: JournalEntry, emoji: &str) -> JournalEntry {
    entry.mood.emoji = emoji.to_string();
    entry
}

pub(crate) fn with_factors(mut entry: JournalEntry, factors: &[&str]) -> JournalEntry {
    entry.mood.factors = factors.iter().map(|f| f.to_string()).collect();
    entry
}

pub(crate) fn with_template(mut entry: JournalEntry, template: &str) -> JournalEntry {
    entry.template = Some(template.to_string());
    entry
}

pub(crate) fn with_weather(mut entry: JournalEntry, condition: &str) -> JournalEntry {
    entry.weather = Some(WeatherSnapshot {
        condition: condition.to_string(),
        description: condition.to_lowercase(),
        temperature: 68.0,
    });
    entry
}

/// Activity stats computed the same way the service computes them
pub(crate) fn stats_for(entries: &[JournalEntry]) -> ActivityStats {
    calculate_activity_stats(entries)
}
