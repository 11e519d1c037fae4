//! Analytics report command

use anyhow::Result;
use muse_core::analytics::AnalyticsService;
use muse_core::db::Database;
use muse_core::models::Period;

use super::truncate;

pub fn cmd_report(db: &Database, user: &str, period: &str, refresh: bool) -> Result<()> {
    let period: Period = period.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let service = AnalyticsService::new();

    let report = if refresh {
        let report = service.generate(db, user, period)?;
        db.save_analytics(&report)?;
        report
    } else {
        service.get_or_generate(db, user, period)?
    };

    println!();
    println!("📊 Mood Report ({}, {})", user, period);
    println!("   Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M UTC"));
    println!("   ─────────────────────────────────────────────────────────────");

    if report.mood_trends.is_empty() {
        println!("   No entries in this period.");
    } else {
        println!("   {:10} │ {:>5} │ {:2} │ {}", "Date", "Mood", "", "Factors");
        println!("   ───────────┼───────┼────┼──────────────────────────────────");
        for trend in &report.mood_trends {
            println!(
                "   {:10} │ {:>5.1} │ {} │ {}",
                trend.date,
                trend.average_mood,
                trend.dominant_emoji,
                truncate(&trend.factors.join(", "), 34)
            );
        }
    }

    let stats = &report.activity_stats;
    println!();
    println!("   Entries: {} ({}/day)", stats.total_entries, stats.average_entries_per_day);
    println!("   Most active: {}", stats.most_active_time);
    println!("   Words written: {}", stats.word_count);
    if !stats.favorite_themes.is_empty() {
        println!("   Favorite themes: {}", stats.favorite_themes.join(", "));
    }

    if report.insights.is_empty() {
        println!();
        println!("   No insights yet - keep journaling!");
    } else {
        println!();
        println!("💡 Insights");
        for insight in &report.insights {
            println!(
                "   [{}] {} ({:.0}% confidence, {} data points)",
                insight.kind,
                insight.title,
                insight.confidence * 100.0,
                insight.data_points
            );
            println!("       {}", insight.description);
            if let Some(recommendation) = &insight.recommendation {
                println!("       → {}", recommendation);
            }
        }
    }

    Ok(())
}
