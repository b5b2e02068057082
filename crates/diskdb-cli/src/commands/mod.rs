//! Subcommand implementations
//!
//! Each command returns the status of the store operation it ran; `main`
//! turns anything but `OK` into exit code 1.

pub mod assign;
pub mod entity;
pub mod report;
pub mod schema;

use diskdb_core::ReturnValue;
use diskdb_store::StoreConfig;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub type CmdResult = Result<ReturnValue, Box<dyn std::error::Error>>;

const DEFAULT_DB_PATH: &str = ".diskdb/store.db";

/// Open the database described by `--config` and `--db`
///
/// Without either, the database lives at `.diskdb/store.db`.
pub fn open_store(
    config_path: Option<&Path>,
    db: Option<PathBuf>,
) -> Result<Connection, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    if let Some(db) = db {
        config.path = Some(db);
    }
    if config.path.is_none() {
        config.path = Some(PathBuf::from(DEFAULT_DB_PATH));
    }

    if let Some(parent) = config.path.as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(diskdb_store::db::connect(&config)?)
}

/// Print a mutation's status code and pass it through
pub fn report_status(status: ReturnValue) -> CmdResult {
    println!("{}", status);
    Ok(status)
}

/// Print a profile as JSON, or `NOT_EXISTS` when absent
pub fn print_profile<T: serde::Serialize>(profile: Option<T>) -> CmdResult {
    match profile {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ReturnValue::Ok)
        }
        None => report_status(ReturnValue::NotExists),
    }
}
