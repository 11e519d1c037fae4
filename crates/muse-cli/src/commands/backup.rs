//! Backup management commands

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use muse_core::backup::{
    default_backup_dir, restore_to, BackupDestination, LocalDestination, RetentionPolicy,
};
use muse_core::db::Database;

fn destination_for(dir: Option<PathBuf>) -> Result<LocalDestination> {
    let dir = dir.unwrap_or_else(default_backup_dir);
    LocalDestination::new(dir).context("Failed to open backup directory")
}

pub fn cmd_backup_create(db: &Database, name: Option<&str>, dir: Option<PathBuf>) -> Result<()> {
    let destination = destination_for(dir)?;

    println!("💾 Creating backup...");
    let result = db.create_backup(&destination, name)?;

    println!(
        "✅ {} ({} KB, {} entries, {} reports)",
        result.info.name,
        result.info.size / 1024,
        result.entries,
        result.reports
    );
    println!("   Stored in {}", destination.backup_dir().display());
    Ok(())
}

pub fn cmd_backup_list(dir: Option<PathBuf>) -> Result<()> {
    let destination = destination_for(dir)?;
    let backups = destination.list()?;

    println!();
    println!("💾 Backups in {}", destination.backup_dir().display());

    if backups.is_empty() {
        println!("   No backups found.");
        return Ok(());
    }

    for backup in &backups {
        println!(
            "   {:40} {:>8} KB  {}",
            backup.name,
            backup.size / 1024,
            backup.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

pub fn cmd_backup_restore(
    db_path: &Path,
    name: &str,
    dir: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let destination = destination_for(dir)?;
    let backup_file = destination.backup_dir().join(name);

    println!("♻️  Restoring {} to {}...", name, db_path.display());
    restore_to(&backup_file, db_path, force)?;
    println!("✅ Restored. Open with the same encryption key the backup was created under.");
    Ok(())
}

pub fn cmd_backup_prune(keep: usize, dir: Option<PathBuf>, yes: bool) -> Result<()> {
    let destination = destination_for(dir)?;
    let backups = destination.list()?;

    if backups.len() <= keep {
        println!("Nothing to prune ({} backups, keeping {}).", backups.len(), keep);
        return Ok(());
    }

    if !yes {
        print!(
            "Delete {} backup(s), keeping the {} newest? [y/N] ",
            backups.len() - keep,
            keep
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = Database::prune_backups(&destination, &RetentionPolicy::keep_last(keep))?;
    println!(
        "🗑️  Deleted {} backup(s), freed {} KB",
        result.deleted_count,
        result.bytes_freed / 1024
    );
    Ok(())
}
