//! Full-screen TUI for seekr.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdin, stdout};
use std::time::Instant;

use anyhow::Result;
pub use features::{document, query, results, statusline};
pub use runtime::TuiRuntime;
use seekr_core::api::SearchClient;
use seekr_core::config::Config;

/// Runs the interactive search console.
///
/// `initial_query` pre-fills the query editor; it is submitted after the
/// usual debounce.
pub async fn run_interactive(
    config: &Config,
    client: SearchClient,
    initial_query: Option<&str>,
) -> Result<()> {
    if !stdout().is_terminal() || !stdin().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `seekr search <TERMS>...` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(config, client)?;
    if let Some(query) = initial_query {
        runtime.state.query.insert_str(query, Instant::now());
    }
    runtime.run()?;

    tracing::info!("interactive session ended");
    Ok(())
}
