//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Muse - Personal journaling and mood analytics
#[derive(Parser)]
#[command(name = "muse")]
#[command(about = "Self-hosted journaling and mood analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "muse.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set MUSE_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (encryption, size, record counts)
    Status,

    /// Manage users and preferences
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage journal entries (add, list, show, delete)
    Entries {
        #[command(subcommand)]
        action: Option<EntriesAction>,
    },

    /// Generate an analytics report
    Report {
        /// User to report on
        #[arg(short, long, default_value = "me")]
        user: String,

        /// Reporting period: week, month, year
        #[arg(short, long, default_value = "week")]
        period: String,

        /// Recompute even if a fresh stored report exists
        #[arg(long)]
        refresh: bool,
    },

    /// Export journal data
    Export {
        #[command(subcommand)]
        export_type: ExportType,
    },

    /// Manage database backups (create, list, restore, prune)
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires a bearer API key (MUSE_API_KEYS).
        #[arg(long)]
        no_auth: bool,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// Show a user and their preferences
    Show {
        /// User id
        #[arg(default_value = "me")]
        user: String,
    },

    /// Set the selected AI persona
    SetPersona {
        /// Persona id (e.g., soft-girl, indie-overthinker)
        persona: String,

        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,
    },

    /// Set the selected aesthetic theme
    SetTheme {
        /// Theme id (e.g., dark-academia, cottagecore)
        theme: String,

        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,
    },
}

#[derive(Subcommand)]
pub enum EntriesAction {
    /// List recent entries
    List {
        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,

        /// Maximum entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Add a quick text entry
    Add {
        /// Entry text
        text: String,

        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,

        /// Primary mood label
        #[arg(short, long, default_value = "content")]
        mood: String,

        /// Mood intensity (1-10)
        #[arg(short, long, default_value = "5")]
        intensity: u8,

        /// Mood emoji
        #[arg(short, long, default_value = "😊")]
        emoji: String,

        /// Visual template id
        #[arg(long)]
        template: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show one entry in full
    Show {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ExportType {
    /// Insights + mood history + entry digests for one period
    Journal {
        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,

        /// Reporting period: week, month, year
        #[arg(short, long, default_value = "week")]
        period: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full user-data takeout
    Full {
        /// User id
        #[arg(short, long, default_value = "me")]
        user: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BackupAction {
    /// Create a new backup
    Create {
        /// Backup name (auto-generated if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Backup directory (defaults to the platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List existing backups
    List {
        /// Backup directory (defaults to the platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Restore a backup over the database file
    Restore {
        /// Backup name to restore
        name: String,

        /// Backup directory (defaults to the platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing database file
        #[arg(long)]
        force: bool,
    },

    /// Delete old backups beyond the retention count
    Prune {
        /// Number of backups to keep
        #[arg(short, long, default_value = "7")]
        keep: usize,

        /// Backup directory (defaults to the platform data dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
