//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `backup` - Backup management commands (create, list, restore, prune)
//! - `core` - Core commands (init, status) and shared utilities (open_db)
//! - `entries` - Journal entry commands (add, list, show, delete)
//! - `export` - Export commands (journal document, full takeout)
//! - `report` - Analytics report command
//! - `serve` - Web server command
//! - `users` - User and preference commands

pub mod backup;
pub mod core;
pub mod entries;
pub mod export;
pub mod report;
pub mod serve;
pub mod users;

// Re-export command functions for main.rs
pub use backup::*;
pub use core::*;
pub use entries::*;
pub use export::*;
pub use report::*;
pub use serve::*;
pub use users::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
