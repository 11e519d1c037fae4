//! Snapshot backup operations

use chrono::Utc;
use tracing::info;

use super::Database;
use crate::backup::{compress_file, BackupDestination, BackupResult, PruneResult, RetentionPolicy};
use crate::error::Result;

impl Database {
    /// Create a compressed snapshot backup at the given destination
    ///
    /// Uses `VACUUM INTO` so the snapshot is consistent even while the pool
    /// is serving other connections, then gzips the staged copy.
    pub fn create_backup(
        &self,
        destination: &dyn BackupDestination,
        name: Option<&str>,
    ) -> Result<BackupResult> {
        let staging = tempfile::tempdir()?;
        let snapshot = staging.path().join("snapshot.db");
        let compressed = staging.path().join("snapshot.db.gz");

        {
            let conn = self.conn()?;
            conn.execute(
                "VACUUM INTO ?1",
                [snapshot.display().to_string()],
            )?;
        }

        compress_file(&snapshot, &compressed)?;

        let name = name
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("muse-{}.db.gz", Utc::now().format("%Y-%m-%d-%H%M%S")));
        let backup_info = destination.store(&compressed, &name)?;

        let conn = self.conn()?;
        let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        let entries: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        let reports: i64 =
            conn.query_row("SELECT COUNT(*) FROM analytics_reports", [], |row| row.get(0))?;

        info!(
            name = %backup_info.name,
            size = backup_info.size,
            users,
            entries,
            "Backup created"
        );

        Ok(BackupResult {
            info: backup_info,
            users,
            entries,
            reports,
        })
    }

    /// Delete stored backups beyond the retention policy
    pub fn prune_backups(
        destination: &dyn BackupDestination,
        policy: &RetentionPolicy,
    ) -> Result<PruneResult> {
        let backups = destination.list()?;
        let retained_count = backups.len().min(policy.keep);

        let mut deleted_names = vec![];
        let mut bytes_freed = 0;
        for backup in backups.iter().skip(policy.keep) {
            destination.delete(&backup.name)?;
            bytes_freed += backup.size;
            deleted_names.push(backup.name.clone());
        }

        Ok(PruneResult {
            deleted_count: deleted_names.len(),
            deleted_names,
            retained_count,
            bytes_freed,
        })
    }
}
