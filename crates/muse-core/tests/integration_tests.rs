//! End-to-end tests over the database + analytics pipeline

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};

use muse_core::{
    AnalyticsService, Database, ElementKind, InsightKind, JournalElement, MoodData,
    NewJournalEntry, Period, TimeOfDay, WeatherSnapshot,
};

fn mood(intensity: u8, emoji: &str) -> MoodData {
    MoodData {
        primary: "content".to_string(),
        intensity,
        emoji: emoji.to_string(),
        factors: vec![],
        color: "from-blue-400 to-purple-400".to_string(),
    }
}

fn entry(user: &str, date: NaiveDate, intensity: u8) -> NewJournalEntry {
    NewJournalEntry {
        user_id: user.to_string(),
        title: None,
        date,
        mood: mood(intensity, "😊"),
        elements: vec![],
        weather: None,
        template: None,
    }
}

fn text_element(content: &str) -> JournalElement {
    JournalElement {
        id: "el-0".to_string(),
        kind: ElementKind::Text,
        content: content.to_string(),
    }
}

/// Insert a raw entry row with a controlled creation hour
fn insert_with_created_hour(db: &Database, user: &str, date: NaiveDate, hour: u32, intensity: u8) {
    let created_at = Utc
        .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
        .unwrap();
    let conn = db.conn().unwrap();
    conn.execute(
        "INSERT INTO entries (id, user_id, date, mood, elements, created_at)
         VALUES (?1, ?2, ?3, ?4, '[]', ?5)",
        rusqlite::params![
            format!("{}-{}-{}", user, date, hour),
            user,
            date.to_string(),
            serde_json::to_string(&mood(intensity, "😊")).unwrap(),
            created_at.to_rfc3339(),
        ],
    )
    .unwrap();
}

#[test]
fn test_week_of_climbing_mood_emits_positive_trend() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    // Six flat days then a high point today: ascending intensities
    // 3,3,3,3,3,3,9 across seven consecutive days
    for offset in (1..=6).rev() {
        db.insert_entry(&entry("u1", today - Duration::days(offset), 3))
            .unwrap();
    }
    db.insert_entry(&entry("u1", today, 9)).unwrap();

    let report = service.generate(&db, "u1", Period::Week).unwrap();

    assert_eq!(report.mood_trends.len(), 7);
    // Trend ordering is ascending by date
    for pair in report.mood_trends.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }

    let trend_insight = report
        .insights
        .iter()
        .find(|i| i.kind == InsightKind::Mood)
        .expect("mood insight");
    assert_eq!(trend_insight.title, "Positive Mood Trend");
    assert_eq!(trend_insight.confidence, 0.8);
    assert_eq!(trend_insight.data_points, 7);

    // The mood rule evaluates first, so its finding leads the list
    assert_eq!(report.insights[0].title, "Positive Mood Trend");
}

#[test]
fn test_single_template_dominates_favorite_themes() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    for i in 0..10 {
        let mut new_entry = entry("u1", today - Duration::days(i % 5), 6);
        new_entry.template = Some("cottagecore".to_string());
        new_entry.elements = vec![text_element(&format!("entry number {}", i))];
        db.insert_entry(&new_entry).unwrap();
    }

    let report = service.generate(&db, "u1", Period::Week).unwrap();
    assert_eq!(
        report.activity_stats.favorite_themes,
        vec!["cottagecore".to_string()]
    );
}

#[test]
fn test_empty_text_elements_count_zero_words() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    for i in 0..4 {
        let mut new_entry = entry("u1", today - Duration::days(i), 6);
        new_entry.elements = vec![text_element("")];
        db.insert_entry(&new_entry).unwrap();
    }

    let report = service.generate(&db, "u1", Period::Week).unwrap();
    // Splitting empty content must not count one token per entry
    assert_eq!(report.activity_stats.word_count, 0);
    assert_eq!(report.activity_stats.total_entries, 4);
}

#[test]
fn test_early_morning_is_most_active_time() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    insert_with_created_hour(&db, "u1", today, 2, 6);
    insert_with_created_hour(&db, "u1", today - Duration::days(1), 3, 6);
    insert_with_created_hour(&db, "u1", today - Duration::days(2), 4, 6);
    insert_with_created_hour(&db, "u1", today - Duration::days(3), 14, 6);

    let report = service.generate(&db, "u1", Period::Week).unwrap();
    assert_eq!(
        report.activity_stats.most_active_time,
        TimeOfDay::EarlyMorning
    );
}

#[test]
fn test_clear_versus_rain_gap_emits_sunshine_boost() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    let conditions = [
        ("Clear", 8u8),
        ("Clear", 8),
        ("Clear", 9),
        ("Clear", 9),
        ("Rain", 4),
        ("Rain", 4),
        ("Rain", 5),
        ("Rain", 5),
    ];
    for (i, (condition, intensity)) in conditions.iter().enumerate() {
        let mut new_entry = entry("u1", today - Duration::days((i % 6) as i64), *intensity);
        new_entry.weather = Some(WeatherSnapshot {
            condition: condition.to_string(),
            description: condition.to_lowercase(),
            temperature: 68.0,
        });
        db.insert_entry(&new_entry).unwrap();
    }

    let report = service.generate(&db, "u1", Period::Week).unwrap();
    let weather_insight = report
        .insights
        .iter()
        .find(|i| i.kind == InsightKind::Weather)
        .expect("weather insight");
    assert_eq!(weather_insight.title, "Sunshine Boost");
    assert_eq!(weather_insight.confidence, 0.6);
    assert_eq!(weather_insight.data_points, 8);
}

#[test]
fn test_empty_user_report_has_floors_and_no_insights() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();

    let report = service.generate(&db, "nobody", Period::Month).unwrap();
    assert_eq!(report.activity_stats.total_entries, 0);
    assert_eq!(report.activity_stats.average_entries_per_day, 0.0);
    assert!(report.mood_trends.is_empty());
    assert!(report.insights.is_empty());
}

#[test]
fn test_cached_report_survives_new_entries_for_an_hour() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    db.insert_entry(&entry("u1", today, 5)).unwrap();
    let first = service.get_or_generate(&db, "u1", Period::Week).unwrap();

    db.insert_entry(&entry("u1", today - Duration::days(1), 9))
        .unwrap();
    let second = service.get_or_generate(&db, "u1", Period::Week).unwrap();

    assert_eq!(first.generated_at, second.generated_at);
    assert_eq!(second.activity_stats.total_entries, 1);
}

#[test]
fn test_year_report_buckets_by_month() {
    let db = Database::in_memory().unwrap();
    let service = AnalyticsService::new();
    let today = Utc::now().date_naive();

    // Spread entries across three months
    for months_back in 0..3u64 {
        for day_offset in 0..2 {
            let date = today
                .checked_sub_months(chrono::Months::new(months_back as u32))
                .unwrap()
                - Duration::days(day_offset);
            db.insert_entry(&entry("u1", date, 5)).unwrap();
        }
    }

    let report = service.generate(&db, "u1", Period::Year).unwrap();
    // Month-granularity buckets: at most one point per calendar month
    assert!(report.mood_trends.len() <= 4);
    assert!(report.mood_trends.len() >= 3);
    for trend in &report.mood_trends {
        assert_eq!(trend.date.day(), 1);
    }
}
