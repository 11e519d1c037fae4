//! Muse CLI - Personal journaling and mood analytics
//!
//! Usage:
//!   muse init                  Initialize database
//!   muse entries add "..."     Add a quick journal entry
//!   muse report --period week  Generate an analytics report
//!   muse serve --port 3000     Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
        Commands::Users { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_users_show(&db, "me"),
                Some(UsersAction::Show { user }) => commands::cmd_users_show(&db, &user),
                Some(UsersAction::SetPersona { persona, user }) => {
                    commands::cmd_users_set_persona(&db, &user, &persona)
                }
                Some(UsersAction::SetTheme { theme, user }) => {
                    commands::cmd_users_set_theme(&db, &user, &theme)
                }
            }
        }
        Commands::Entries { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_entries_list(&db, "me", 20),
                Some(EntriesAction::List { user, limit }) => {
                    commands::cmd_entries_list(&db, &user, limit)
                }
                Some(EntriesAction::Add {
                    text,
                    user,
                    mood,
                    intensity,
                    emoji,
                    template,
                    date,
                }) => commands::cmd_entries_add(
                    &db,
                    &user,
                    &text,
                    &mood,
                    intensity,
                    &emoji,
                    template.as_deref(),
                    date.as_deref(),
                ),
                Some(EntriesAction::Show { id }) => commands::cmd_entries_show(&db, &id),
                Some(EntriesAction::Delete { id }) => commands::cmd_entries_delete(&db, &id),
            }
        }
        Commands::Report {
            user,
            period,
            refresh,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_report(&db, &user, &period, refresh)
        }
        Commands::Export { export_type } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match export_type {
                ExportType::Journal {
                    user,
                    period,
                    output,
                } => commands::cmd_export_journal(&db, &user, &period, output.as_deref()),
                ExportType::Full { user, output } => {
                    commands::cmd_export_full(&db, &user, output.as_deref())
                }
            }
        }
        Commands::Backup { action } => match action {
            BackupAction::Create { name, dir } => {
                let db = commands::open_db(&cli.db, cli.no_encrypt)?;
                commands::cmd_backup_create(&db, name.as_deref(), dir)
            }
            BackupAction::List { dir } => commands::cmd_backup_list(dir),
            BackupAction::Restore { name, dir, force } => {
                commands::cmd_backup_restore(&cli.db, &name, dir, force)
            }
            BackupAction::Prune { keep, dir, yes } => commands::cmd_backup_prune(keep, dir, yes),
        },
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => {
            commands::cmd_serve(
                &cli.db,
                &host,
                port,
                no_auth,
                cli.no_encrypt,
                static_dir.as_deref(),
            )
            .await
        }
    }
}
