//! Tracing subscriber setup.
//!
//! Interactive sessions own the terminal, so they log to a daily-rolling file
//! under `$SEEKR_HOME/logs`. One-shot commands log to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding an `EnvFilter` directive (e.g. `seekr_tui=debug`).
pub const LOG_ENV: &str = "SEEKR_LOG";

const LOG_FILE_PREFIX: &str = "seekr.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily-rolling files in the given directory.
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// Level used when `SEEKR_LOG` is unset or invalid.
    pub fn default_level(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            LogTarget::Stderr => "warn",
        }
    }
}

/// Keeps the non-blocking file writer flushing; drop it at process exit.
#[must_use = "dropping the guard stops log file writes"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// Returns an error if a subscriber is already installed or the log
/// directory cannot be created.
pub fn init(target: &LogTarget) -> Result<LogGuard> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), target.default_level());
    let registry = Registry::default().with(filter);

    match target {
        LogTarget::File(dir) => {
            let (writer, guard) = non_blocking(file_appender(dir)?);
            registry
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(LogGuard {
                _worker: Some(guard),
            })
        }
        LogTarget::Stderr => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .compact(),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(LogGuard { _worker: None })
        }
    }
}

fn file_appender(dir: &Path) -> Result<rolling::RollingFileAppender> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(rolling::daily(dir, LOG_FILE_PREFIX))
}

/// Parses `directive`, falling back to `default_level` when it is absent or invalid.
fn build_filter(directive: Option<&str>, default_level: &str) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}
