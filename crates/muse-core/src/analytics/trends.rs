//! Period filtering, date bucketing, and mood trend computation

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use crate::models::{JournalEntry, MoodTrend, Period};

/// Filter entries to the reporting window `[now - window, now]`
///
/// Window arithmetic is calendar-based: a week is 7 days, month and year are
/// calendar subtractions. Entries dated after `now` are kept - only the lower
/// bound is enforced, matching the store's append-only usage.
pub fn filter_entries_by_period(
    entries: &[JournalEntry],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<JournalEntry> {
    let today = now.date_naive();
    let cutoff = match period {
        Period::Week => today - Duration::days(7),
        Period::Month => today
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN),
        Period::Year => today
            .checked_sub_months(Months::new(12))
            .unwrap_or(NaiveDate::MIN),
    };

    entries
        .iter()
        .filter(|e| e.date >= cutoff)
        .cloned()
        .collect()
}

/// Bucket key for an entry date: zero-padded day for week/month reports,
/// zero-padded year-month for year reports
///
/// Keys are textual truncations so that lexicographic order is chronological
/// order; grouping never round-trips through epoch arithmetic.
pub(crate) fn bucket_key(date: NaiveDate, period: Period) -> String {
    match period {
        Period::Week | Period::Month => date.format("%Y-%m-%d").to_string(),
        Period::Year => format!("{:04}-{:02}", date.year(), date.month()),
    }
}

/// First calendar day represented by an entry's bucket
fn bucket_date(date: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Week | Period::Month => date,
        Period::Year => date.with_day(1).unwrap_or(date),
    }
}

/// Compute one mood trend point per non-empty bucket, ascending by date
///
/// Buckets with no entries are omitted, not zero-filled. `averageMood` is the
/// mean intensity, `dominantEmoji` the modal emoji (ties broken by the
/// lexicographically smallest emoji so reruns are reproducible), and
/// `factors` the deduplicated union of all factor tags in the bucket.
pub fn calculate_mood_trends(entries: &[JournalEntry], period: Period) -> Vec<MoodTrend> {
    let mut buckets: BTreeMap<String, (NaiveDate, Vec<&JournalEntry>)> = BTreeMap::new();
    for entry in entries {
        let key = bucket_key(entry.date, period);
        buckets
            .entry(key)
            .or_insert_with(|| (bucket_date(entry.date, period), vec![]))
            .1
            .push(entry);
    }

    // BTreeMap iteration is ascending over the zero-padded keys, which is
    // chronological - the ordering contract the charting consumer relies on
    buckets
        .into_values()
        .map(|(date, bucket)| {
            let average_mood = bucket
                .iter()
                .map(|e| e.mood.intensity as f64)
                .sum::<f64>()
                / bucket.len() as f64;

            let mut emoji_counts: HashMap<&str, usize> = HashMap::new();
            for entry in &bucket {
                *emoji_counts.entry(entry.mood.emoji.as_str()).or_insert(0) += 1;
            }
            let mut ranked: Vec<(&str, usize)> = emoji_counts.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            let dominant_emoji = ranked
                .first()
                .map(|(emoji, _)| emoji.to_string())
                .unwrap_or_else(|| "😊".to_string());

            let factors: BTreeSet<String> = bucket
                .iter()
                .flat_map(|e| e.mood.factors.iter().cloned())
                .collect();

            MoodTrend {
                date,
                average_mood,
                dominant_emoji,
                factors: factors.into_iter().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry_on, with_emoji, with_factors};
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_filter_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let entries = vec![
            entry_on("u1", day(2026, 3, 14), 9, 5),
            // Exactly on the cutoff is included
            entry_on("u1", day(2026, 3, 8), 9, 5),
            entry_on("u1", day(2026, 3, 7), 9, 5),
            entry_on("u1", day(2026, 2, 1), 9, 5),
        ];

        let filtered = filter_entries_by_period(&entries, Period::Week, now);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.date >= day(2026, 3, 8)));
    }

    #[test]
    fn test_year_filter_uses_calendar_months() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let entries = vec![
            entry_on("u1", day(2025, 3, 15), 9, 5),
            entry_on("u1", day(2025, 3, 14), 9, 5),
        ];

        let filtered = filter_entries_by_period(&entries, Period::Year, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, day(2025, 3, 15));
    }

    #[test]
    fn test_bucket_keys_are_zero_padded() {
        assert_eq!(bucket_key(day(2026, 3, 5), Period::Week), "2026-03-05");
        assert_eq!(bucket_key(day(2026, 3, 5), Period::Month), "2026-03-05");
        assert_eq!(bucket_key(day(2026, 3, 5), Period::Year), "2026-03");
    }

    #[test]
    fn test_trends_are_chronological_and_averaged() {
        let entries = vec![
            entry_on("u1", day(2026, 3, 10), 9, 8),
            entry_on("u1", day(2026, 3, 9), 9, 2),
            entry_on("u1", day(2026, 3, 9), 15, 4),
        ];

        let trends = calculate_mood_trends(&entries, Period::Week);
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].date, day(2026, 3, 9));
        assert_eq!(trends[0].average_mood, 3.0);
        assert_eq!(trends[1].date, day(2026, 3, 10));
        assert_eq!(trends[1].average_mood, 8.0);

        // P1: averages stay within the intensity scale
        for trend in &trends {
            assert!(trend.average_mood >= 1.0 && trend.average_mood <= 10.0);
        }
    }

    #[test]
    fn test_year_period_buckets_by_month() {
        let entries = vec![
            entry_on("u1", day(2026, 1, 5), 9, 4),
            entry_on("u1", day(2026, 1, 20), 9, 6),
            entry_on("u1", day(2026, 2, 3), 9, 8),
        ];

        let trends = calculate_mood_trends(&entries, Period::Year);
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].date, day(2026, 1, 1));
        assert_eq!(trends[0].average_mood, 5.0);
        assert_eq!(trends[1].date, day(2026, 2, 1));
    }

    #[test]
    fn test_dominant_emoji_mode_and_tiebreak() {
        let d = day(2026, 3, 9);
        let entries = vec![
            with_emoji(entry_on("u1", d, 8, 5), "🌧"),
            with_emoji(entry_on("u1", d, 9, 5), "🌧"),
            with_emoji(entry_on("u1", d, 10, 5), "😊"),
        ];
        let trends = calculate_mood_trends(&entries, Period::Week);
        assert_eq!(trends[0].dominant_emoji, "🌧");

        // Tie: lexicographically smallest emoji wins deterministically
        let tied = vec![
            with_emoji(entry_on("u1", d, 8, 5), "🌧"),
            with_emoji(entry_on("u1", d, 9, 5), "😊"),
        ];
        let trends = calculate_mood_trends(&tied, Period::Week);
        let expected = if "🌧" < "😊" { "🌧" } else { "😊" };
        assert_eq!(trends[0].dominant_emoji, expected);
    }

    #[test]
    fn test_factors_are_deduplicated_union() {
        let d = day(2026, 3, 9);
        let entries = vec![
            with_factors(entry_on("u1", d, 8, 5), &["sleep", "work"]),
            with_factors(entry_on("u1", d, 9, 5), &["work", "weather"]),
        ];

        let trends = calculate_mood_trends(&entries, Period::Week);
        assert_eq!(trends[0].factors, vec!["sleep", "weather", "work"]);
    }

    #[test]
    fn test_empty_input_yields_no_trends() {
        assert!(calculate_mood_trends(&[], Period::Week).is_empty());
    }
}
