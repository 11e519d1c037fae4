//! User records and preferences

use chrono::Utc;
use rusqlite::params;
use tracing::warn;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{User, UserPreferences};

impl Database {
    /// Insert or replace a user record
    pub fn upsert_user(&self, user: &User) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO users (id, name, preferences, created_at, last_active)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                preferences = excluded.preferences,
                last_active = excluded.last_active
            "#,
            params![
                user.id,
                user.name,
                serde_json::to_string(&user.preferences)?,
                user.created_at.to_rfc3339(),
                user.last_active.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a user by id
    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, preferences, created_at, last_active FROM users WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map(params![id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        match rows.next().transpose()? {
            Some((id, name, prefs_json, created_at, last_active)) => {
                // Unreadable preferences fall back to defaults rather than
                // locking the user out of their data
                let preferences: UserPreferences = serde_json::from_str(&prefs_json)
                    .unwrap_or_else(|e| {
                        warn!(user = %id, error = %e, "Resetting malformed preferences to defaults");
                        UserPreferences::default()
                    });
                Ok(Some(User {
                    id,
                    name,
                    preferences,
                    created_at: parse_datetime(&created_at),
                    last_active: parse_datetime(&last_active),
                }))
            }
            None => Ok(None),
        }
    }

    /// Get a user, creating a default record on first access
    pub fn get_or_create_user(&self, id: &str) -> Result<User> {
        if let Some(user) = self.get_user(id)? {
            return Ok(user);
        }

        let now = Utc::now();
        let user = User {
            id: id.to_string(),
            name: "Beautiful Soul".to_string(),
            preferences: UserPreferences::default(),
            created_at: now,
            last_active: now,
        };
        self.upsert_user(&user)?;
        Ok(user)
    }

    /// Replace a user's preferences
    pub fn update_preferences(&self, user_id: &str, preferences: &UserPreferences) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE users SET preferences = ?2, last_active = ?3 WHERE id = ?1",
            params![
                user_id,
                serde_json::to_string(preferences)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("User not found: {}", user_id)));
        }
        Ok(())
    }

    /// Bump a user's last-active timestamp
    pub fn touch_last_active(&self, user_id: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "UPDATE users SET last_active = ?2 WHERE id = ?1",
            params![user_id, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Count all users
    pub fn count_users(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}
