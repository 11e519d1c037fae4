//! Activity statistics

use std::collections::HashMap;

use chrono::Timelike;

use crate::models::{ActivityStats, ElementKind, JournalEntry, TimeOfDay};
use crate::personas::Persona;

/// How many favorite themes a report carries
const TOP_THEMES: usize = 3;

/// Whitespace-delimited token count across an entry's text elements
///
/// Empty content contributes zero tokens, never one.
pub fn entry_word_count(entry: &JournalEntry) -> usize {
    entry
        .elements
        .iter()
        .filter(|el| el.kind == ElementKind::Text)
        .map(|el| el.content.split_whitespace().count())
        .sum()
}

/// Inclusive day-span between the earliest and latest entry dates, floor 1
fn day_span(entries: &[JournalEntry]) -> i64 {
    let min = entries.iter().map(|e| e.date).min();
    let max = entries.iter().map(|e| e.date).max();
    match (min, max) {
        (Some(min), Some(max)) => ((max - min).num_days() + 1).max(1),
        _ => 1,
    }
}

/// Round half-up to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Modal time-of-day slot; ties go to the earliest slot in the day
fn most_active_time(entries: &[JournalEntry]) -> TimeOfDay {
    let mut counts = [0usize; TimeOfDay::ALL.len()];
    for entry in entries {
        let slot = TimeOfDay::from_hour(entry.created_at.hour());
        counts[TimeOfDay::ALL.iter().position(|s| *s == slot).unwrap_or(0)] += 1;
    }

    let mut best = TimeOfDay::Morning;
    let mut best_count = 0;
    for (slot, &count) in TimeOfDay::ALL.iter().zip(counts.iter()) {
        if count > best_count {
            best = *slot;
            best_count = count;
        }
    }
    best
}

/// Top templates by frequency; ties broken by template name
fn favorite_themes(entries: &[JournalEntry]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for template in entries.iter().filter_map(|e| e.template.as_deref()) {
        if template.is_empty() {
            continue;
        }
        *counts.entry(template).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_THEMES)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Compute activity statistics over the filtered entry set
pub fn calculate_activity_stats(entries: &[JournalEntry]) -> ActivityStats {
    let total_entries = entries.len();
    let average_entries_per_day = round1(total_entries as f64 / day_span(entries) as f64);
    let word_count = entries.iter().map(entry_word_count).sum();

    ActivityStats {
        total_entries,
        average_entries_per_day,
        most_active_time: most_active_time(entries),
        favorite_themes: favorite_themes(entries),
        // Persona usage is not tracked per entry; report the fixed list
        favorite_personas: Persona::default_favorites(),
        word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_on, with_template, with_text};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_empty_input_floors() {
        let stats = calculate_activity_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.average_entries_per_day, 0.0);
        assert_eq!(stats.most_active_time, TimeOfDay::Morning);
        assert!(stats.favorite_themes.is_empty());
        assert_eq!(stats.word_count, 0);
    }

    #[test]
    fn test_average_entries_per_day_rounding() {
        // 2 entries over a 3-day inclusive span: 0.666... rounds to 0.7
        let entries = vec![entry_on("u1", day(1), 9, 5), entry_on("u1", day(3), 9, 5)];
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.average_entries_per_day, 0.7);
    }

    #[test]
    fn test_single_day_span_floor() {
        // All entries on one day: span floors to 1, not 0
        let entries = vec![entry_on("u1", day(5), 9, 5), entry_on("u1", day(5), 15, 5)];
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.average_entries_per_day, 2.0);
    }

    #[test]
    fn test_most_active_time_modal() {
        // Three early-morning entries, one afternoon
        let entries = vec![
            entry_on("u1", day(1), 2, 5),
            entry_on("u1", day(2), 3, 5),
            entry_on("u1", day(3), 4, 5),
            entry_on("u1", day(4), 14, 5),
        ];
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.most_active_time, TimeOfDay::EarlyMorning);
    }

    #[test]
    fn test_most_active_time_tie_goes_to_earlier_slot() {
        let entries = vec![entry_on("u1", day(1), 22, 5), entry_on("u1", day(2), 8, 5)];
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.most_active_time, TimeOfDay::Morning);
    }

    #[test]
    fn test_favorite_themes_top3() {
        let mut entries = vec![];
        for i in 0..10 {
            entries.push(with_template(entry_on("u1", day(1 + i), 9, 5), "cottagecore"));
        }
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.favorite_themes, vec!["cottagecore"]);

        entries.push(with_template(entry_on("u1", day(12), 9, 5), "vaporwave"));
        entries.push(with_template(entry_on("u1", day(13), 9, 5), "vaporwave"));
        entries.push(with_template(entry_on("u1", day(14), 9, 5), "minimalist"));
        entries.push(with_template(entry_on("u1", day(15), 9, 5), "dark-academia"));
        let stats = calculate_activity_stats(&entries);
        assert_eq!(stats.favorite_themes.len(), 3);
        assert_eq!(stats.favorite_themes[0], "cottagecore");
        assert_eq!(stats.favorite_themes[1], "vaporwave");
        // Count tie between minimalist and dark-academia: name order decides
        assert_eq!(stats.favorite_themes[2], "dark-academia");
    }

    #[test]
    fn test_word_count_sums_text_elements_only() {
        let entry = with_text(
            with_text(entry_on("u1", day(1), 9, 5), "three little words"),
            "two more",
        );
        assert_eq!(entry_word_count(&entry), 5);

        let stats = calculate_activity_stats(&[entry]);
        assert_eq!(stats.word_count, 5);
    }

    #[test]
    fn test_empty_content_counts_zero_words() {
        let entry = with_text(entry_on("u1", day(1), 9, 5), "");
        assert_eq!(entry_word_count(&entry), 0);

        // P3: word count is additive over disjoint sets
        let a = with_text(entry_on("u1", day(1), 9, 5), "one two");
        let b = with_text(entry_on("u1", day(2), 9, 5), "three four five");
        let both = calculate_activity_stats(&[a.clone(), b.clone()]).word_count;
        let separate = calculate_activity_stats(&[a]).word_count
            + calculate_activity_stats(&[b]).word_count;
        assert_eq!(both, separate);
    }

    #[test]
    fn test_favorite_personas_placeholder() {
        let stats = calculate_activity_stats(&[]);
        assert_eq!(
            stats.favorite_personas,
            vec!["soft-girl", "wellness-bestie", "indie-overthinker"]
        );
    }
}
