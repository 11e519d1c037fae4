//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use muse_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path.to_str().context("Database path is not valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;
    db.get_or_create_user("me")
        .context("Failed to create default user")?;
    println!("   Created default user 'me'");

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add an entry: muse entries add \"today was a good day\"");
    println!("  2. See your report: muse report --period week");
    println!("  3. Start web UI: muse serve");

    Ok(())
}

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    println!();
    println!("📋 Database Status");
    println!("   Path: {}", db.path());
    println!(
        "   Encryption: {}",
        if db.is_encrypted().unwrap_or(false) {
            "enabled 🔒"
        } else {
            "disabled ⚠️"
        }
    );

    if let Ok(meta) = std::fs::metadata(db_path) {
        println!("   Size: {} KB", meta.len() / 1024);
    }

    println!("   Users: {}", db.count_users()?);
    println!("   Reports: {}", db.count_reports()?);

    for user_id in db.list_active_user_ids()? {
        println!("   Entries ({}): {}", user_id, db.count_entries(&user_id)?);
    }

    Ok(())
}
