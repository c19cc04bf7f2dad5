//! Show, and optionally save, the effective configuration.

use std::path::{Path, PathBuf};

use tempo_run::config::{self as app_config, Config};
use tempo_run::error::{Error, Result as AppResult, ResultExt};

/// Print where config is read from and what it resolves to
pub fn cmd_config(explicit_path: Option<&Path>, config: &Config, save: bool) -> anyhow::Result<()> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .or_else(app_config::config_path);

    if save {
        let saved = save_config(path.as_deref(), config)?;
        println!("✓ Saved configuration to {:?}", saved);
    } else {
        match &path {
            Some(path) if path.exists() => println!("Config file: {:?}", path),
            Some(path) => println!("Config file: {:?} (not present, using defaults)", path),
            None => println!("Config file: unavailable (no config directory)"),
        }
    }
    println!();

    let credentials = &config.credentials;
    println!(
        "  Client id:     {}",
        credentials.client_id.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  Client secret: {}",
        if credentials.client_secret.is_some() {
            "***"
        } else {
            "(not set)"
        }
    );
    println!("  Token URL:     {}", config.catalog.token_url);
    println!("  API base URL:  {}", config.catalog.api_base_url);
    Ok(())
}

/// Write `config` to `path`, or to the default location when there is none
fn save_config(path: Option<&Path>, config: &Config) -> AppResult<PathBuf> {
    match path {
        Some(path) => {
            app_config::save_to(config, path).with_context("while saving config")?;
            Ok(path.to_path_buf())
        }
        None => {
            app_config::save(config).with_context("while saving config")?;
            app_config::config_path()
                .ok_or_else(|| Error::from(app_config::ConfigError::NoConfigDir))
        }
    }
}
