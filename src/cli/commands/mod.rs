//! CLI command definitions and dispatch.
//!
//! Each subcommand lives in its own submodule:
//! - `search`: one-shot search and tempo lookup
//! - `interactive`: search-as-you-type REPL with favorites
//! - `config`: show the resolved configuration, optionally saving it

mod config;
mod interactive;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use tempo_run::SearchFilter;
use tempo_run::catalog::CatalogClient;
use tempo_run::config::{self as app_config, Config};
use tempo_run::error::ResultExt;

pub use config::cmd_config;
pub use interactive::cmd_interactive;
pub use search::{cmd_search, cmd_tempo};

/// tempo-run CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog client id (overrides the config file)
    #[arg(long, env = "SPOTIFY_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Catalog client secret (overrides the config file)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", global = true, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search tracks and artists
    Search {
        /// Free-text query
        query: String,
        /// Which results to show: all, tracks, artists
        #[arg(short, long, default_value = "all")]
        filter: SearchFilter,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up the tempo (BPM) of a track
    Tempo {
        /// Catalog track id
        track_id: String,
    },
    /// Search as you type and build a favorites list
    Interactive,
    /// Show the effective configuration
    Config {
        /// Write the effective configuration (including --client-id and
        /// --client-secret) to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli);

    match &cli.command {
        Commands::Search {
            query,
            filter,
            json,
        } => {
            let rt = Runtime::new()?;
            cmd_search(&rt, &config, query, *filter, *json)
        }
        Commands::Tempo { track_id } => {
            let rt = Runtime::new()?;
            cmd_tempo(&rt, &config, track_id)
        }
        Commands::Interactive => {
            let rt = Runtime::new()?;
            cmd_interactive(&rt, &config)
        }
        Commands::Config { save } => cmd_config(cli.config.as_deref(), &config, *save),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load the config file and apply command-line/environment overrides
fn resolve_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => app_config::load_from(path),
        None => app_config::load(),
    };
    config.credentials = config
        .credentials
        .overridden_by(cli.client_id.as_deref(), cli.client_secret.as_deref());
    config
}

/// Build a catalog client and authenticate it, or explain what is missing
pub(crate) async fn connect(config: &Config) -> anyhow::Result<CatalogClient> {
    let client = CatalogClient::from_config(config)
        .inspect_err(|_| print_credentials_help())
        .with_context("while building catalog client")?;

    if let Err(e) = client.authenticate().await {
        eprintln!("Failed to get access token: {}", e);
        eprintln!("Searches will return no results until authentication succeeds.");
    }
    Ok(client)
}

pub(crate) fn print_credentials_help() {
    eprintln!("Error: catalog client id and secret required.");
    eprintln!("Create an app at: https://developer.spotify.com/dashboard");
    eprintln!("Then use: --client-id ID --client-secret SECRET,");
    eprintln!("set SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET,");
    if let Some(path) = app_config::config_path() {
        eprintln!("or add them to the [credentials] section of {:?}", path);
    } else {
        eprintln!("or add them to the [credentials] section of the config file");
    }
}
