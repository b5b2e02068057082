//! Store configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! path = "/var/lib/diskdb/store.db"
//! journal_mode = "wal"
//! busy_timeout_ms = 5000
//! ```

use diskdb_core::errors::{ExError, ExErrorKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// SQLite journal mode applied to on-disk databases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Wal,
    Delete,
    Truncate,
}

impl JournalMode {
    pub fn as_pragma(&self) -> &'static str {
        match self {
            JournalMode::Wal => "WAL",
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
        }
    }
}

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Database file; `None` opens a private in-memory database
    pub path: Option<PathBuf>,
    pub journal_mode: JournalMode,
    /// How long a writer waits for a competing transaction before failing
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            journal_mode: JournalMode::Wal,
            busy_timeout_ms: 5000,
        }
    }
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl From<ConfigError> for ExError {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Read { .. } => ExErrorKind::Io,
            ConfigError::Parse(_) => ExErrorKind::Config,
        };
        ExError::new(kind)
            .with_op("load_config")
            .with_message(err.to_string())
    }
}

impl StoreConfig {
    /// In-memory database with default settings
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// On-disk database at `path` with default settings
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
