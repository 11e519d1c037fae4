//! User and preference commands

use anyhow::Result;
use muse_core::db::Database;
use muse_core::personas::{Persona, Theme};

pub fn cmd_users_show(db: &Database, user_id: &str) -> Result<()> {
    let user = db.get_or_create_user(user_id)?;
    let persona = user.preferences.selected_persona;
    let theme = user.preferences.selected_theme;

    println!();
    println!("👤 {} ({})", user.name, user.id);
    println!(
        "   Persona: {} - {}",
        persona.profile().display_name,
        persona.profile().description
    );
    println!(
        "   Theme:   {} - {}",
        theme.profile().display_name,
        theme.profile().description
    );
    if let Some(location) = &user.preferences.location {
        println!("   Location: {}", location);
    }
    println!("   Timezone: {}", user.preferences.timezone);
    println!("   Member since: {}", user.created_at.format("%Y-%m-%d"));

    Ok(())
}

pub fn cmd_users_set_persona(db: &Database, user_id: &str, persona: &str) -> Result<()> {
    let persona: Persona = persona.parse().map_err(|e: String| {
        anyhow::anyhow!(
            "{}. Available: {}",
            e,
            Persona::ALL
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let user = db.get_or_create_user(user_id)?;
    let mut preferences = user.preferences;
    preferences.selected_persona = persona;
    db.update_preferences(user_id, &preferences)?;

    println!(
        "✨ Persona set to {} {}",
        persona.profile().display_name,
        persona.profile().stickers.first().unwrap_or(&"")
    );
    Ok(())
}

pub fn cmd_users_set_theme(db: &Database, user_id: &str, theme: &str) -> Result<()> {
    let theme: Theme = theme.parse().map_err(|e: String| {
        anyhow::anyhow!(
            "{}. Available: {}",
            e,
            Theme::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let user = db.get_or_create_user(user_id)?;
    let mut preferences = user.preferences;
    preferences.selected_theme = theme;
    db.update_preferences(user_id, &preferences)?;

    println!("🎨 Theme set to {}", theme.profile().display_name);
    Ok(())
}
