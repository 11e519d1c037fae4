//! Request handlers
//!
//! Handlers are organized by domain:
//! - `analytics` - Analytics report endpoint
//! - `entries` - Journal entry CRUD
//! - `export` - Export documents
//! - `users` - User records and preferences

mod analytics;
mod entries;
mod export;
mod users;

pub use analytics::*;
pub use entries::*;
pub use export::*;
pub use users::*;
