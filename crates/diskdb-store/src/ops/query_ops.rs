use std::time::Instant;

use diskdb_core::{log_op_start, Query, ReturnValue};
use rusqlite::{params, Connection, Transaction};

use super::{fetch_by_key, into_status, profile_or_none};
use crate::db::with_transaction;
use crate::errors::{classify, not_found, Result};

pub(crate) const INSERT_QUERY: &str =
    "INSERT INTO queries (query_id, purpose, size) VALUES (?1, ?2, ?3)";

/// Insert a query
///
/// # Returns
/// * `Ok` - the row was inserted
/// * `AlreadyExists` - `query_id` is taken
/// * `BadParams` - `query_id <= 0` or `size < 0`
/// * `Error` - any other engine failure
pub fn add_query(conn: &Connection, query: &Query) -> ReturnValue {
    const OP: &str = "add_query";
    let started = Instant::now();
    log_op_start!(OP, query_id = query.query_id);

    into_status(OP, started, insert_query(conn, query, OP))
}

pub(crate) fn insert_query(conn: &Connection, query: &Query, op: &str) -> Result<()> {
    conn.execute(
        INSERT_QUERY,
        params![query.query_id, query.purpose, query.size],
    )
    .map_err(|e| classify(op, e).with_entity_id(query.query_id.to_string()))?;
    Ok(())
}

/// Look up a query by id; `None` when absent
pub fn get_query_profile(conn: &Connection, query_id: i64) -> Option<Query> {
    const OP: &str = "get_query_profile";
    profile_or_none(
        OP,
        fetch_by_key(
            conn,
            OP,
            "SELECT query_id, purpose, size FROM queries WHERE query_id = ?1",
            [query_id],
            |row| Ok(Query::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?)),
        ),
    )
}

/// Delete a query, handing its space back to every disk that holds it
///
/// Runs as one transaction: reclaim free space, drop the assignment rows,
/// drop the query row. A query with no assignments only takes the last
/// step.
///
/// # Returns
/// * `Ok` - the query was removed
/// * `NotExists` - no query with this id (nothing changed)
/// * `Error` - any other engine failure (nothing changed)
pub fn delete_query(conn: &mut Connection, query_id: i64) -> ReturnValue {
    const OP: &str = "delete_query";
    let started = Instant::now();
    log_op_start!(OP, query_id = query_id);

    let result = with_transaction(conn, OP, |tx| remove_query(tx, query_id));
    into_status(OP, started, result)
}

fn remove_query(tx: &Transaction<'_>, query_id: i64) -> Result<()> {
    const OP: &str = "delete_query";

    let disks_reclaimed = tx
        .execute(
            "UPDATE disks
             SET free_space = free_space + (SELECT size FROM queries WHERE query_id = ?1)
             WHERE disk_id IN (SELECT disk_id FROM queries_on_disks WHERE query_id = ?1)",
            [query_id],
        )
        .map_err(|e| classify(OP, e))?;

    tx.execute("DELETE FROM queries_on_disks WHERE query_id = ?1", [query_id])
        .map_err(|e| classify(OP, e))?;

    let deleted = tx
        .execute("DELETE FROM queries WHERE query_id = ?1", [query_id])
        .map_err(|e| classify(OP, e))?;
    if deleted == 0 {
        return Err(not_found(OP, query_id.to_string()));
    }

    tracing::debug!(query_id, disks_reclaimed, "Reclaimed space for deleted query");
    Ok(())
}
