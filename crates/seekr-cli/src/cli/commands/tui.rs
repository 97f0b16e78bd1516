//! Interactive console handler.

use anyhow::{Context, Result};
use seekr_core::config::Config;

pub async fn run(config: &Config, query: Option<&str>) -> Result<()> {
    let client = super::client(config)?;
    seekr_tui::run_interactive(config, client, query)
        .await
        .context("interactive session failed")
}
