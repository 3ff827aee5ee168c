//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use millionaire_core::model::{BuildError, SessionError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while playing or managing games.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}

/// Errors emitted while loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
