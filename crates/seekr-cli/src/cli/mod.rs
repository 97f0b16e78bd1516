//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use seekr_core::config::{self, Config};
use seekr_core::logging::{self, LogTarget};

mod commands;
mod emphasis;

#[derive(Parser)]
#[command(name = "seekr")]
#[command(version)]
#[command(about = "Terminal client for a full-text search service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the search service (overrides config and SEEKR_SERVER_URL)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Pre-fill the interactive query
    #[arg(short, long, value_name = "TEXT")]
    query: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Prints ranked results for a query
    Search {
        /// Query terms
        #[arg(required = true, value_name = "TERMS")]
        terms: Vec<String>,
    },
    /// Prints one document with the query's matches highlighted
    Show {
        /// Document id as listed by `search`
        #[arg(value_name = "ID")]
        id: String,
        /// Query terms whose matches are highlighted
        #[arg(required = true, value_name = "TERMS")]
        terms: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The interactive console owns the terminal, so it logs to a file.
    let target = if cli.command.is_none() {
        LogTarget::File(config::paths::logs_dir())
    } else {
        LogTarget::Stderr
    };
    let _log_guard = logging::init(&target).context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        server,
        timeout,
        query,
    } = cli;

    match command {
        None => {
            let config = load_config(server, timeout)?;
            commands::tui::run(&config, query.as_deref()).await
        }
        Some(Commands::Search { terms }) => {
            let config = load_config(server, timeout)?;
            commands::search::run(&config, &terms).await
        }
        Some(Commands::Show { id, terms }) => {
            let config = load_config(server, timeout)?;
            commands::show::run(&config, &id, &terms).await
        }
        // Config commands must work even when the existing file does not parse.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Loads the config file, then applies command-line overrides.
fn load_config(server: Option<String>, timeout: Option<u64>) -> Result<Config> {
    let mut config = Config::load().context("load config")?;
    if let Some(server) = server {
        config.server_url = server;
    }
    if let Some(timeout) = timeout {
        config.request_timeout_secs = timeout;
    }
    tracing::debug!(server = %config.server_url, "configuration loaded");
    Ok(config)
}
