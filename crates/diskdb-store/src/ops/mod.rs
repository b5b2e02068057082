//! Operation layer
//!
//! One public function per business intent. Mutating operations return a
//! `ReturnValue`; profile lookups return `Option`; reports return plain
//! values and fall back to zero/empty/false when the engine fails.
//! Nothing here panics or hands an engine error to the caller.

pub mod assignment_ops;
pub mod disk_ops;
pub mod query_ops;
pub mod ram_ops;
pub mod report_ops;

use crate::errors::{classify, unexpected_rows, Result};
use diskdb_core::{log_op_end, log_op_error, ReturnValue};
use rusqlite::{Connection, Params, Row};
use std::time::Instant;

/// Emit the end or end_error event for an operation
pub(crate) fn log_outcome<T>(op: &'static str, started: Instant, result: &Result<T>) {
    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err, duration_ms = duration_ms);
        }
    }
}

/// Log the outcome and fold it into the caller-visible status
pub(crate) fn into_status(op: &'static str, started: Instant, result: Result<()>) -> ReturnValue {
    log_outcome(op, started, &result);
    ReturnValue::from(result)
}

/// Reports degrade to `T::default()` instead of failing
pub(crate) fn or_default<T: Default>(op: &'static str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(op, err_code = err.code(), error = %err, "Report failed, returning default");
        T::default()
    })
}

/// Fetch the row a primary key lookup selects
///
/// Zero rows yields `None`. More than one row is impossible under the key
/// constraint and is reported as an invariant violation.
pub(crate) fn fetch_by_key<T, P, F>(
    conn: &Connection,
    op: &'static str,
    sql: &str,
    params: P,
    map: F,
) -> Result<Option<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(|e| classify(op, e))?;
    let mut rows = stmt
        .query_map(params, map)
        .map_err(|e| classify(op, e))?
        .collect::<rusqlite::Result<Vec<T>>>()
        .map_err(|e| classify(op, e))?;

    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(unexpected_rows(op, 1, n)),
    }
}

/// Profile lookups collapse every failure into the not-found sentinel
pub(crate) fn profile_or_none<T>(op: &'static str, result: Result<Option<T>>) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(err) => {
            tracing::error!(op, err_code = err.code(), error = %err, "Profile lookup failed");
            None
        }
    }
}

/// Collect a single-column id list
pub(crate) fn query_ids<P: Params>(
    conn: &Connection,
    op: &'static str,
    sql: &str,
    params: P,
) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare(sql).map_err(|e| classify(op, e))?;
    let ids = stmt
        .query_map(params, |row| row.get(0))
        .map_err(|e| classify(op, e))?
        .collect::<rusqlite::Result<Vec<i64>>>()
        .map_err(|e| classify(op, e))?;
    Ok(ids)
}
