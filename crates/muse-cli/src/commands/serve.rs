//! Web server command

use std::path::Path;

use anyhow::Result;

use super::open_db;
use muse_server::ServerConfig;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_auth: bool,
    no_encrypt: bool,
    static_dir: Option<&Path>,
) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    let mut config = ServerConfig::default();
    config.require_auth = !no_auth;
    config.api_keys = std::env::var("MUSE_API_KEYS")
        .map(|keys| {
            keys.split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default();
    config.allowed_origins = std::env::var("MUSE_ALLOWED_ORIGINS")
        .map(|origins| {
            origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if config.require_auth && config.api_keys.is_empty() {
        anyhow::bail!(
            "Authentication is enabled but MUSE_API_KEYS is not set. \
            Set MUSE_API_KEYS or pass --no-auth for local development."
        );
    }

    let static_dir = static_dir.and_then(|p| p.to_str());
    muse_server::serve_with_config(db, host, port, static_dir, config).await
}
