mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./reelserve.toml",
        "~/.config/reelserve/config.toml",
        "/etc/reelserve/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.stream.chunk_size_bytes == 0 {
        anyhow::bail!("Stream chunk size cannot be 0");
    }

    if config.server.auth.enabled && config.server.auth.api_key.is_none() {
        anyhow::bail!("Auth is enabled but no API key is configured");
    }

    // The storage root is checked again at server startup; warn early so a
    // bad config is visible before the first request fails.
    if !config.storage.root.exists() {
        tracing::warn!("Storage root does not exist: {:?}", config.storage.root);
    }

    Ok(())
}
