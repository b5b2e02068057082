//! Database connection management
//!
//! A `Connection` is the unit of work every operation receives. Operations
//! that run more than one statement go through `with_transaction`, which
//! commits on success and rolls back on every other exit path.

use crate::config::StoreConfig;
use crate::errors::{classify, from_rusqlite, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn, &StoreConfig::in_memory())?;
    Ok(conn)
}

/// Open and configure a connection as described by `config`
pub fn connect(config: &StoreConfig) -> Result<Connection> {
    let conn = match &config.path {
        Some(path) => open(path)?,
        None => Connection::open_in_memory().map_err(from_rusqlite)?,
    };
    configure(&conn, config)?;
    Ok(conn)
}

/// Configure a connection
///
/// Foreign keys are always enforced; cascades and the not-found
/// classification of assignments depend on them.
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(from_rusqlite)?;

    if config.path.is_some() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", config.journal_mode.as_pragma(), |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "Configured journal mode");
    }

    Ok(())
}

/// Run `f` inside one write transaction
///
/// The transaction takes the write lock up front (`BEGIN IMMEDIATE`) so
/// concurrent writers queue on the busy timeout instead of failing on lock
/// upgrade. Any error from `f` rolls everything back before it is returned.
pub fn with_transaction<T, F>(conn: &mut Connection, op: &str, f: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> Result<T>,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| classify(op, e))?;

    match f(&tx) {
        Ok(value) => {
            tx.commit().map_err(|e| classify(op, e))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::error!(op, error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
