//! Background task schedulers
//!
//! Two optional loops, each enabled via environment variables:
//!
//! - `MUSE_ANALYTICS_REFRESH`: interval in hours for regenerating analytics
//!   reports for every active user (e.g., "1" for hourly)
//! - `MUSE_BACKUP_SCHEDULE`: interval in hours between snapshot backups
//!   (e.g., "24" for daily), with `MUSE_BACKUP_RETENTION` backups kept
//!   (default: 7) and `MUSE_BACKUP_DIR` overriding the destination

use std::time::Duration;

use tokio::time::interval;
use tracing::{error, info, warn};

use muse_core::analytics::AnalyticsService;
use muse_core::backup::{default_backup_dir, LocalDestination, RetentionPolicy};
use muse_core::models::Period;
use muse_core::Database;

/// Stored reports kept per (user, period) after a refresh pass
const REPORT_HISTORY_KEPT: usize = 24;

/// Configuration for the periodic analytics refresh
#[derive(Debug, Clone)]
pub struct RefreshScheduleConfig {
    /// Interval between refresh passes in hours
    pub interval_hours: u64,
}

impl RefreshScheduleConfig {
    /// Parse configuration from environment variables
    ///
    /// Returns None if scheduling is not configured (MUSE_ANALYTICS_REFRESH not set)
    pub fn from_env() -> Option<Self> {
        let interval_hours: u64 = std::env::var("MUSE_ANALYTICS_REFRESH")
            .ok()
            .and_then(|s| s.parse().ok())?;

        if interval_hours == 0 {
            warn!("MUSE_ANALYTICS_REFRESH is 0, automatic refresh disabled");
            return None;
        }

        Some(Self { interval_hours })
    }
}

/// Start the analytics refresh scheduler as a background task
///
/// Regenerates stale reports for every user with entries, so dashboards stay
/// warm without the first request of the hour paying the recompute cost.
pub fn start_refresh_scheduler(db: Database, config: RefreshScheduleConfig) {
    info!(
        "Starting analytics refresh scheduler: every {} hours",
        config.interval_hours
    );

    tokio::spawn(async move {
        let service = AnalyticsService::new();
        let mut ticker = interval(Duration::from_secs(config.interval_hours * 3600));

        // Skip the first immediate tick - no refresh on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match run_refresh_pass(&db, &service) {
                Ok(count) => info!("Analytics refresh pass complete ({} reports)", count),
                Err(e) => error!("Analytics refresh pass failed: {}", e),
            }
        }
    });
}

/// Refresh reports for every active user, returning the number touched
fn run_refresh_pass(db: &Database, service: &AnalyticsService) -> muse_core::Result<usize> {
    let mut refreshed = 0;
    for user_id in db.list_active_user_ids()? {
        for period in [Period::Week, Period::Month, Period::Year] {
            // get_or_generate only recomputes reports past the freshness
            // window, so a pass over a quiet user is nearly free
            service.get_or_generate(db, &user_id, period)?;
            refreshed += 1;
        }
        if let Err(e) = db.prune_analytics(&user_id, REPORT_HISTORY_KEPT) {
            warn!(user = %user_id, error = %e, "Failed to prune report history");
        }
    }
    Ok(refreshed)
}

/// Configuration for scheduled backups
#[derive(Debug, Clone)]
pub struct BackupScheduleConfig {
    /// Interval between backups in hours
    pub interval_hours: u64,
    /// Number of backups to retain
    pub retention_count: usize,
    /// Optional custom backup directory
    pub backup_dir: Option<std::path::PathBuf>,
}

impl BackupScheduleConfig {
    /// Parse configuration from environment variables
    ///
    /// Returns None if scheduling is not configured (MUSE_BACKUP_SCHEDULE not set)
    pub fn from_env() -> Option<Self> {
        let interval_hours: u64 = std::env::var("MUSE_BACKUP_SCHEDULE")
            .ok()
            .and_then(|s| s.parse().ok())?;

        if interval_hours == 0 {
            warn!("MUSE_BACKUP_SCHEDULE is 0, automatic backups disabled");
            return None;
        }

        let retention_count = std::env::var("MUSE_BACKUP_RETENTION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7);

        let backup_dir = std::env::var("MUSE_BACKUP_DIR")
            .ok()
            .map(std::path::PathBuf::from);

        Some(Self {
            interval_hours,
            retention_count,
            backup_dir,
        })
    }
}

/// Start the backup scheduler as a background task
pub fn start_backup_scheduler(db: Database, config: BackupScheduleConfig) {
    info!(
        "Starting backup scheduler: every {} hours, keeping {} backups",
        config.interval_hours, config.retention_count
    );

    tokio::spawn(async move {
        let backup_dir = config.backup_dir.unwrap_or_else(default_backup_dir);
        let mut ticker = interval(Duration::from_secs(config.interval_hours * 3600));

        // Skip the first immediate tick - we don't want to backup on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            info!("Running scheduled backup...");

            match run_scheduled_backup(&db, &backup_dir, config.retention_count) {
                Ok(backup_name) => {
                    info!("Scheduled backup completed: {}", backup_name);
                }
                Err(e) => {
                    error!("Scheduled backup failed: {}", e);
                }
            }
        }
    });
}

/// Run a single scheduled backup
fn run_scheduled_backup(
    db: &Database,
    backup_dir: &std::path::Path,
    retention_count: usize,
) -> Result<String, String> {
    let destination = LocalDestination::new(backup_dir)
        .map_err(|e| format!("Failed to initialize backup directory: {}", e))?;

    let result = db
        .create_backup(&destination, None)
        .map_err(|e| format!("Failed to create backup: {}", e))?;

    let backup_name = result.info.name.clone();

    info!(
        "Backup created: {} ({} bytes, {} entries, {} users)",
        result.info.name, result.info.size, result.entries, result.users
    );

    let policy = RetentionPolicy::keep_last(retention_count);
    match Database::prune_backups(&destination, &policy) {
        Ok(prune_result) => {
            if prune_result.deleted_count > 0 {
                info!(
                    "Pruned {} old backup(s), freed {} bytes",
                    prune_result.deleted_count, prune_result.bytes_freed
                );
            }
        }
        Err(e) => {
            warn!("Failed to prune old backups: {}", e);
        }
    }

    Ok(backup_name)
}
