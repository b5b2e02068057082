//! Schema lifecycle
//!
//! `create_tables`, `clear_tables` and `drop_tables` can each be called any
//! number of times. Drop and clear walk the relations child-first so that
//! foreign keys never block them.

use crate::db::with_transaction;
use crate::errors::{classify, Result};
use crate::migrations::{apply_migrations, SCHEMA_VERSION_TABLE};
use crate::ops::log_outcome;
use diskdb_core::log_op_start;
use rusqlite::Connection;
use std::time::Instant;

/// Base tables, children before parents
pub const TABLES: [&str; 5] = ["queries_on_disks", "rams_on_disks", "queries", "disks", "rams"];

/// Derived views
pub const VIEWS: [&str; 1] = ["assignable"];

/// Create every relation and view that does not exist yet
pub fn create_tables(conn: &mut Connection) -> Result<()> {
    let started = Instant::now();
    log_op_start!("create_tables");

    let result = apply_migrations(conn);
    log_outcome("create_tables", started, &result);
    result
}

/// Delete every row, keeping the structure
pub fn clear_tables(conn: &mut Connection) -> Result<()> {
    let started = Instant::now();
    log_op_start!("clear_tables");

    let result = with_transaction(conn, "clear_tables", |tx| {
        for table in TABLES {
            tx.execute(&format!("DELETE FROM {}", table), [])
                .map_err(|e| classify("clear_tables", e))?;
        }
        Ok(())
    });
    log_outcome("clear_tables", started, &result);
    result
}

/// Remove every relation and view; absent objects are skipped
pub fn drop_tables(conn: &mut Connection) -> Result<()> {
    let started = Instant::now();
    log_op_start!("drop_tables");

    let result = with_transaction(conn, "drop_tables", |tx| {
        for view in VIEWS {
            tx.execute(&format!("DROP VIEW IF EXISTS {}", view), [])
                .map_err(|e| classify("drop_tables", e))?;
        }
        for table in TABLES.iter().chain(std::iter::once(&SCHEMA_VERSION_TABLE)) {
            tx.execute(&format!("DROP TABLE IF EXISTS {}", table), [])
                .map_err(|e| classify("drop_tables", e))?;
        }
        Ok(())
    });
    log_outcome("drop_tables", started, &result);
    result
}
