//! Journal entry command implementations

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use muse_core::db::Database;
use muse_core::models::{ElementKind, JournalElement, MoodData, NewJournalEntry};

use super::truncate;
use muse_core::analytics::entry_word_count;

#[allow(clippy::too_many_arguments)]
pub fn cmd_entries_add(
    db: &Database,
    user: &str,
    text: &str,
    mood: &str,
    intensity: u8,
    emoji: &str,
    template: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?,
        None => Utc::now().date_naive(),
    };

    // Make sure the user exists so reports and exports have a record to show
    db.get_or_create_user(user)?;

    let entry = db.insert_entry(&NewJournalEntry {
        user_id: user.to_string(),
        title: None,
        date,
        mood: MoodData {
            primary: mood.to_string(),
            intensity,
            emoji: emoji.to_string(),
            factors: vec![],
            color: "from-blue-400 to-purple-400".to_string(),
        },
        elements: vec![JournalElement {
            id: "el-0".to_string(),
            kind: ElementKind::Text,
            content: text.to_string(),
        }],
        weather: None,
        template: template.map(|t| t.to_string()),
    })?;

    println!("✅ Entry saved for {} ({})", date, entry.mood.emoji);
    println!("   id: {}", &entry.id[..12.min(entry.id.len())]);
    Ok(())
}

pub fn cmd_entries_list(db: &Database, user: &str, limit: usize) -> Result<()> {
    let entries = db.get_journal_entries(user, limit)?;

    println!();
    println!("📓 Journal Entries ({})", user);
    println!("   ─────────────────────────────────────────────────────────────");

    if entries.is_empty() {
        println!("   No entries yet. Add one with: muse entries add \"...\"");
        return Ok(());
    }

    println!(
        "   {:12} │ {:10} │ {:2} │ {:>3} │ {:>5} │ {}",
        "Id", "Date", "", "Int", "Words", "Text"
    );
    println!("   ─────────────┼────────────┼────┼─────┼───────┼──────────────────");

    for entry in &entries {
        let text = entry
            .elements
            .iter()
            .find(|el| el.kind == ElementKind::Text)
            .map(|el| el.content.as_str())
            .unwrap_or("");
        println!(
            "   {:12} │ {:10} │ {} │ {:>3} │ {:>5} │ {}",
            &entry.id[..12.min(entry.id.len())],
            entry.date,
            entry.mood.emoji,
            entry.mood.intensity,
            entry_word_count(entry),
            truncate(text, 40)
        );
    }

    Ok(())
}

pub fn cmd_entries_show(db: &Database, id: &str) -> Result<()> {
    let entry = db
        .get_entry(id)?
        .with_context(|| format!("Entry not found: {}", id))?;

    println!();
    println!("📓 Entry {}", entry.id);
    println!("   User: {}", entry.user_id);
    println!("   Date: {}", entry.date);
    println!(
        "   Mood: {} {} (intensity {})",
        entry.mood.emoji, entry.mood.primary, entry.mood.intensity
    );
    if !entry.mood.factors.is_empty() {
        println!("   Factors: {}", entry.mood.factors.join(", "));
    }
    if let Some(weather) = &entry.weather {
        println!(
            "   Weather: {} ({}, {:.0}°)",
            weather.condition, weather.description, weather.temperature
        );
    }
    if let Some(template) = &entry.template {
        println!("   Template: {}", template);
    }
    println!("   Created: {}", entry.created_at);

    for element in &entry.elements {
        println!();
        println!("   [{}] {}", element.kind, element.content);
    }

    Ok(())
}

pub fn cmd_entries_delete(db: &Database, id: &str) -> Result<()> {
    db.delete_entry(id)?;
    println!("🗑️  Deleted entry {}", id);
    Ok(())
}
