//! Export command implementations

use std::path::Path;

use anyhow::{Context, Result};
use muse_core::analytics::AnalyticsService;
use muse_core::db::Database;
use muse_core::export::export_user_data;
use muse_core::models::Period;

fn write_json(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Exported to {} ({} bytes)", path.display(), json.len());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn cmd_export_journal(
    db: &Database,
    user: &str,
    period: &str,
    output: Option<&Path>,
) -> Result<()> {
    let period: Period = period.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let service = AnalyticsService::new();

    let export = service.export_journal(db, user, period)?;
    let json = serde_json::to_string_pretty(&export)?;
    write_json(&json, output)
}

pub fn cmd_export_full(db: &Database, user: &str, output: Option<&Path>) -> Result<()> {
    let takeout = export_user_data(db, user)?;
    let json = serde_json::to_string_pretty(&takeout)?;
    write_json(&json, output)
}
