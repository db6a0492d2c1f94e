//! Configuration file handling.
//!
//! The configuration lives at `<config_dir>/fcg/config.json`. A missing file
//! yields the defaults; command-line flags override individual values.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Server used when neither the config file nor the command line names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`Config`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,

    /// The server URL is not an absolute http(s) URL.
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),

    /// The log level is not one of error, warn, info, debug or trace.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the finder chart server.
    pub server_url: String,
    /// Log file; defaults to `<data_dir>/fcg/fcg.log`.
    pub log_file: Option<PathBuf>,
    /// Minimum log level.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("fcg").join("config.json"))
    }

    /// Loads and validates the config file at `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the server URL and log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server_url(&self.server_url)?;
        self.level()?;
        Ok(())
    }

    /// Parses [`log_level`](Self::log_level).
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// The log file to write to, falling back to the platform data directory.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("fcg").join("fcg.log")))
    }
}

fn validate_server_url(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(ConfigError::InvalidServerUrl(url.to_string())),
    }
}
