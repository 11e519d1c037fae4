//! Backup system with pluggable destinations
//!
//! Backups are consistent snapshots taken with SQLite's `VACUUM INTO`, then
//! gzip compressed. The `BackupDestination` trait abstracts where the
//! compressed file lands; `LocalDestination` stores it in a directory.
//!
//! File naming: `muse-YYYY-MM-DD-HHMMSS.db.gz`

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod local;

pub use local::LocalDestination;

/// Information about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub name: String,
    /// Full path or remote key
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
}

/// Result of a backup operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupResult {
    /// Information about the created backup
    pub info: BackupInfo,
    /// Number of users in backup
    pub users: i64,
    /// Number of journal entries in backup
    pub entries: i64,
    /// Number of stored analytics reports in backup
    pub reports: i64,
}

/// Result of a prune operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneResult {
    /// Number of backups deleted
    pub deleted_count: usize,
    /// Names of deleted backups
    pub deleted_names: Vec<String>,
    /// Number of backups retained
    pub retained_count: usize,
    /// Total bytes freed
    pub bytes_freed: u64,
}

/// Backup retention policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionPolicy {
    /// Number of most recent backups to keep
    pub keep: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self { keep: 7 }
    }
}

impl RetentionPolicy {
    /// Create a policy keeping the last N backups
    pub fn keep_last(n: usize) -> Self {
        Self { keep: n }
    }
}

/// Trait for backup storage destinations
pub trait BackupDestination: Send + Sync {
    /// Human-readable name for this destination
    fn name(&self) -> &str;

    /// Store a backup file under `name`, returning its info
    fn store(&self, source: &Path, name: &str) -> Result<BackupInfo>;

    /// List stored backups, newest first
    fn list(&self) -> Result<Vec<BackupInfo>>;

    /// Fetch a stored backup into `target`
    fn retrieve(&self, name: &str, target: &Path) -> Result<()>;

    /// Delete a stored backup
    fn delete(&self, name: &str) -> Result<()>;
}

/// Default backup directory under the platform data dir
pub fn default_backup_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("muse").join("backups"))
        .unwrap_or_else(|| PathBuf::from("backups"))
}

/// Gzip-compress `source` into `target`
pub(crate) fn compress_file(source: &Path, target: &Path) -> Result<u64> {
    let mut input = File::open(source)?;
    let output = File::create(target)?;
    let mut encoder = flate2::write::GzEncoder::new(output, flate2::Compression::default());

    let mut buf = [0u8; 64 * 1024];
    loop {
        let read = input.read(&mut buf)?;
        if read == 0 {
            break;
        }
        encoder.write_all(&buf[..read])?;
    }
    encoder.finish()?;

    Ok(std::fs::metadata(target)?.len())
}

/// Decompress a `.db.gz` backup file into a database path
///
/// Refuses to overwrite an existing database unless `force` is set.
pub fn restore_to(backup_file: &Path, db_path: &Path, force: bool) -> Result<()> {
    if db_path.exists() && !force {
        return Err(Error::Backup(format!(
            "Database already exists at {} (use force to overwrite)",
            db_path.display()
        )));
    }

    let input = File::open(backup_file)?;
    let mut decoder = flate2::read::GzDecoder::new(input);
    let mut output = File::create(db_path)?;
    io::copy(&mut decoder, &mut output)?;

    Ok(())
}
