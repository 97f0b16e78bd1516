//! CLI command handlers.

pub mod config;
pub mod search;
pub mod show;
pub mod tui;

use anyhow::{Context, Result};
use seekr_core::api::{SearchClient, normalize_terms};
use seekr_core::config::Config;

/// Builds the HTTP client from the effective config.
fn client(config: &Config) -> Result<SearchClient> {
    SearchClient::new(&config.server_url, config.request_timeout())
        .with_context(|| format!("invalid server url '{}'", config.server_url))
}

/// Splits the positional arguments into query terms; refuses an empty query.
fn query_terms(args: &[String]) -> Result<Vec<String>> {
    let terms = normalize_terms(&args.join(" "));
    if terms.is_empty() {
        anyhow::bail!("No search terms given");
    }
    Ok(terms)
}
