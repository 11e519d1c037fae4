//! CLI parsing tests

use clap::Parser;

use crate::cli::{Cli, Commands, EntriesAction};
use crate::commands::truncate;

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly-ten", 11), "exactly-ten");
    assert_eq!(truncate("a very long string here", 10), "a very ...");
    // Multibyte content truncates on char boundaries
    assert_eq!(truncate("🌸🌸🌸🌸🌸🌸", 5), "🌸🌸...");
}

#[test]
fn test_parse_report_defaults() {
    let cli = Cli::try_parse_from(["muse", "report"]).unwrap();
    match cli.command {
        Commands::Report {
            user,
            period,
            refresh,
        } => {
            assert_eq!(user, "me");
            assert_eq!(period, "week");
            assert!(!refresh);
        }
        _ => panic!("expected report command"),
    }
}

#[test]
fn test_parse_entries_add() {
    let cli = Cli::try_parse_from([
        "muse",
        "entries",
        "add",
        "rainy afternoon",
        "--intensity",
        "8",
        "--template",
        "cottagecore",
    ])
    .unwrap();

    match cli.command {
        Commands::Entries {
            action: Some(EntriesAction::Add {
                text,
                intensity,
                template,
                ..
            }),
        } => {
            assert_eq!(text, "rainy afternoon");
            assert_eq!(intensity, 8);
            assert_eq!(template.as_deref(), Some("cottagecore"));
        }
        _ => panic!("expected entries add command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from(["muse", "--no-encrypt", "--db", "/tmp/x.db", "status"]).unwrap();
    assert!(cli.no_encrypt);
    assert_eq!(cli.db.to_str().unwrap(), "/tmp/x.db");
    assert!(matches!(cli.command, Commands::Status));
}

#[test]
fn test_invalid_subcommand_rejected() {
    assert!(Cli::try_parse_from(["muse", "frobnicate"]).is_err());
}
