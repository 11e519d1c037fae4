//! Local directory backup destination

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::{BackupDestination, BackupInfo};
use crate::error::{Error, Result};

/// Stores backups as files in a local directory
pub struct LocalDestination {
    backup_dir: PathBuf,
}

impl LocalDestination {
    /// Create a destination, making the directory if needed
    pub fn new(backup_dir: impl Into<PathBuf>) -> Result<Self> {
        let backup_dir = backup_dir.into();
        fs::create_dir_all(&backup_dir)?;
        Ok(Self { backup_dir })
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.backup_dir.join(name)
    }
}

impl BackupDestination for LocalDestination {
    fn name(&self) -> &str {
        "local"
    }

    fn store(&self, source: &Path, name: &str) -> Result<BackupInfo> {
        let target = self.path_for(name);
        fs::copy(source, &target)?;
        let meta = fs::metadata(&target)?;

        Ok(BackupInfo {
            name: name.to_string(),
            path: target.display().to_string(),
            size: meta.len(),
            created_at: meta
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now()),
        })
    }

    fn list(&self) -> Result<Vec<BackupInfo>> {
        let mut backups = vec![];
        for dir_entry in fs::read_dir(&self.backup_dir)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().to_string();
            if !name.starts_with("muse-") || !name.ends_with(".db.gz") {
                continue;
            }

            let meta = dir_entry.metadata()?;
            backups.push(BackupInfo {
                name,
                path: dir_entry.path().display().to_string(),
                size: meta.len(),
                created_at: meta
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_else(|_| Utc::now()),
            });
        }

        // Newest first; names embed the timestamp so this matches name order
        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    fn retrieve(&self, name: &str, target: &Path) -> Result<()> {
        let source = self.path_for(name);
        if !source.exists() {
            return Err(Error::NotFound(format!("Backup not found: {}", name)));
        }
        fs::copy(&source, target)?;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(Error::NotFound(format!("Backup not found: {}", name)));
        }
        fs::remove_file(&path)?;
        Ok(())
    }
}
