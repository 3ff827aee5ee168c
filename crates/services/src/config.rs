//! Runtime configuration: an optional TOML file plus environment overrides.
//!
//! - `MILLIONAIRE_CONFIG_PATH` points at a TOML file with `db_url` and
//!   `log_level`, both optional.
//! - `MILLIONAIRE_DB_URL` overrides the database URL.
//! - `LOG_LEVEL` overrides the log filter.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_DB_URL: &str = "sqlite:millionaire.sqlite3?mode=rwc";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_PATH_VAR: &str = "MILLIONAIRE_CONFIG_PATH";
const DB_URL_VAR: &str = "MILLIONAIRE_DB_URL";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_url: String,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.into(),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MILLIONAIRE_CONFIG_PATH` is set but the file
    /// cannot be read or parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(db_url) = lookup(DB_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.db_url = db_url;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = Some(level);
        }
        Ok(config)
    }

    /// Read a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw, path)?;
        info!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Log filter directives to use when `LOG_LEVEL` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
