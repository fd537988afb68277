//! Logging configuration loaded from the environment: LOG_FILE and LOG_LEVEL.

use anyhow::Result;
use std::env;

const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log. `RUST_LOG` still takes precedence over `default_level` at init time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_file: Option<String>,
    pub default_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            default_level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    /// Loads from environment: LOG_FILE optional, LOG_LEVEL optional (defaults to `info`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Logs to stdout and appends to `path`.
    pub fn with_file(path: impl Into<String>) -> Self {
        Self {
            log_file: Some(path.into()),
            ..Self::default()
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_file = lookup("LOG_FILE").filter(|s| !s.trim().is_empty());
        let default_level = match lookup("LOG_LEVEL") {
            Some(level) if level.trim().is_empty() => {
                anyhow::bail!("LOG_LEVEL is set but empty")
            }
            Some(level) => level.trim().to_lowercase(),
            None => DEFAULT_LEVEL.to_string(),
        };
        Ok(Self {
            log_file,
            default_level,
        })
    }
}
