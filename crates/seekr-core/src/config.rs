//! Configuration management for seekr.
//!
//! Loads configuration from ${SEEKR_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::highlight::Margins;
use crate::navigation::MatchNavigator;

/// Environment variable that overrides `server_url`.
pub const SERVER_URL_ENV: &str = "SEEKR_SERVER_URL";

/// Match navigation settings for the interactive document pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Rows between the viewport top and the match jumped to.
    pub padding: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            padding: Config::DEFAULT_NAV_PADDING,
        }
    }
}

impl NavigationConfig {
    pub fn navigator(&self) -> MatchNavigator {
        MatchNavigator::new(self.padding)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub highlight: Margins,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
            highlight: Margins::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_DEBOUNCE_MS: u64 = 300;
    const DEFAULT_NAV_PADDING: usize = 2;

    /// Loads configuration from the default config path, then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        if let Ok(url) = std::env::var(SERVER_URL_ENV)
            && !url.trim().is_empty()
        {
            config.server_url = url.trim().to_string();
        }
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

fn default_server_url() -> String {
    Config::DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    Config::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_debounce_ms() -> u64 {
    Config::DEFAULT_DEBOUNCE_MS
}

pub mod paths {
    //! Path resolution for seekr configuration and log directories.
    //!
    //! SEEKR_HOME resolution order:
    //! 1. SEEKR_HOME environment variable (if set)
    //! 2. ~/.config/seekr (default)
    //! 3. ./.seekr when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the seekr home directory.
    pub fn seekr_home() -> PathBuf {
        if let Ok(home) = std::env::var("SEEKR_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("seekr"))
            .unwrap_or_else(|| PathBuf::from(".seekr"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        seekr_home().join("config.toml")
    }

    /// Returns the directory that holds rolling log files.
    pub fn logs_dir() -> PathBuf {
        seekr_home().join("logs")
    }
}
