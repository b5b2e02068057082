//! Assignment protocols
//!
//! Placing a query on a disk and reserving its space happen in one
//! transaction, and so do the reverse steps. The reservation is guarded only
//! by the `free_space >= 0` check on `disks`: there is no read-then-write, so
//! two writers racing for the last free space cannot both commit.
//!
//! Sizes and prices are always read from the stored rows inside the
//! transaction, never taken from the caller.

use std::time::Instant;

use diskdb_core::errors::{ExError, ExErrorKind};
use diskdb_core::{log_op_start, QueryAssignment, RamAssignment, ReturnValue};
use rusqlite::{params, Connection, Transaction};

use super::{fetch_by_key, into_status, profile_or_none};
use crate::db::with_transaction;
use crate::errors::{classify, constraint_kind, not_found, unexpected_rows, ConstraintKind, Result};

/// Assign a query to a disk
///
/// Inserts the assignment with `cost = size × cost_per_byte` and reserves
/// the query's size from the disk's free space.
///
/// # Returns
/// * `Ok` - assigned and reserved
/// * `NotExists` - the query or the disk does not exist
/// * `AlreadyExists` - the pair is already assigned (free space untouched)
/// * `BadParams` - a constraint on the assignment row rejected it
/// * `Error` - the disk lacks the space, the cost overflows a 64-bit
///   integer, or any other engine failure; nothing is changed
pub fn add_query_to_disk(conn: &mut Connection, query_id: i64, disk_id: i64) -> ReturnValue {
    const OP: &str = "add_query_to_disk";
    let started = Instant::now();
    log_op_start!(OP, query_id = query_id, disk_id = disk_id);

    let result = with_transaction(conn, OP, |tx| assign_query(tx, query_id, disk_id));
    into_status(OP, started, result)
}

fn assign_query(tx: &Transaction<'_>, query_id: i64, disk_id: i64) -> Result<()> {
    const OP: &str = "add_query_to_disk";
    let pair = format!("query:{}/disk:{}", query_id, disk_id);

    // A missing parent leaves cost NULL and trips the foreign key
    tx.execute(
        "INSERT INTO queries_on_disks (query_id, disk_id, cost)
         VALUES (?1, ?2, (SELECT q.size * d.cost_per_byte
                          FROM queries q, disks d
                          WHERE q.query_id = ?1 AND d.disk_id = ?2))",
        params![query_id, disk_id],
    )
    .map_err(|e| classify(OP, e).with_entity_id(pair.clone()))?;

    let reserved = tx
        .execute(
            "UPDATE disks
             SET free_space = free_space - (SELECT size FROM queries WHERE query_id = ?1)
             WHERE disk_id = ?2",
            params![query_id, disk_id],
        )
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Check) => ExError::new(ExErrorKind::CapacityExceeded)
                .with_op(OP)
                .with_entity_id(pair.clone())
                .with_message(e.to_string()),
            _ => classify(OP, e).with_entity_id(pair.clone()),
        })?;

    if reserved != 1 {
        return Err(unexpected_rows(OP, 1, reserved));
    }
    Ok(())
}

/// Remove a query from a disk
///
/// Gives the query's stored size back to the disk and deletes the
/// assignment. A pair that is not assigned is left alone and reported as
/// `Ok`, so the call is idempotent.
pub fn remove_query_from_disk(conn: &mut Connection, query_id: i64, disk_id: i64) -> ReturnValue {
    const OP: &str = "remove_query_from_disk";
    let started = Instant::now();
    log_op_start!(OP, query_id = query_id, disk_id = disk_id);

    let result = with_transaction(conn, OP, |tx| unassign_query(tx, query_id, disk_id));
    into_status(OP, started, result)
}

fn unassign_query(tx: &Transaction<'_>, query_id: i64, disk_id: i64) -> Result<()> {
    const OP: &str = "remove_query_from_disk";

    tx.execute(
        "UPDATE disks
         SET free_space = free_space + (SELECT size FROM queries WHERE query_id = ?1)
         WHERE disk_id = ?2
           AND EXISTS (SELECT 1 FROM queries_on_disks WHERE query_id = ?1 AND disk_id = ?2)",
        params![query_id, disk_id],
    )
    .map_err(|e| classify(OP, e))?;

    let removed = tx
        .execute(
            "DELETE FROM queries_on_disks WHERE query_id = ?1 AND disk_id = ?2",
            params![query_id, disk_id],
        )
        .map_err(|e| classify(OP, e))?;

    tracing::debug!(
        op = OP,
        query_id,
        disk_id,
        rows_affected = removed,
        "Unassigned query"
    );
    Ok(())
}

/// Attach a RAM module to a disk, snapshotting its size
///
/// # Returns
/// * `Ok` - attached
/// * `NotExists` - the RAM module or the disk does not exist
/// * `AlreadyExists` - already attached to this disk
/// * `BadParams` / `Error` - as classified from the engine
pub fn add_ram_to_disk(conn: &Connection, ram_id: i64, disk_id: i64) -> ReturnValue {
    const OP: &str = "add_ram_to_disk";
    let started = Instant::now();
    log_op_start!(OP, ram_id = ram_id, disk_id = disk_id);

    let result = conn
        .execute(
            "INSERT INTO rams_on_disks (ram_id, disk_id, ram_size)
             VALUES (?1, ?2, (SELECT size FROM rams WHERE ram_id = ?1))",
            params![ram_id, disk_id],
        )
        .map(|_| ())
        .map_err(|e| classify(OP, e).with_entity_id(format!("ram:{}/disk:{}", ram_id, disk_id)));
    into_status(OP, started, result)
}

/// Detach a RAM module from a disk
///
/// Unlike query removal this reports `NotExists` when the pair was not
/// attached.
pub fn remove_ram_from_disk(conn: &Connection, ram_id: i64, disk_id: i64) -> ReturnValue {
    const OP: &str = "remove_ram_from_disk";
    let started = Instant::now();
    log_op_start!(OP, ram_id = ram_id, disk_id = disk_id);

    let result = conn
        .execute(
            "DELETE FROM rams_on_disks WHERE ram_id = ?1 AND disk_id = ?2",
            params![ram_id, disk_id],
        )
        .map_err(|e| classify(OP, e))
        .and_then(|removed| match removed {
            0 => Err(not_found(OP, format!("ram:{}/disk:{}", ram_id, disk_id))),
            _ => Ok(()),
        });
    into_status(OP, started, result)
}

/// The assignment row for a (query, disk) pair, if any
pub fn get_query_assignment(
    conn: &Connection,
    query_id: i64,
    disk_id: i64,
) -> Option<QueryAssignment> {
    const OP: &str = "get_query_assignment";
    profile_or_none(
        OP,
        fetch_by_key(
            conn,
            OP,
            "SELECT query_id, disk_id, cost FROM queries_on_disks
             WHERE query_id = ?1 AND disk_id = ?2",
            params![query_id, disk_id],
            |row| {
                Ok(QueryAssignment {
                    query_id: row.get(0)?,
                    disk_id: row.get(1)?,
                    cost: row.get(2)?,
                })
            },
        ),
    )
}

/// The attachment row for a (RAM, disk) pair, if any
pub fn get_ram_assignment(conn: &Connection, ram_id: i64, disk_id: i64) -> Option<RamAssignment> {
    const OP: &str = "get_ram_assignment";
    profile_or_none(
        OP,
        fetch_by_key(
            conn,
            OP,
            "SELECT ram_id, disk_id, ram_size FROM rams_on_disks
             WHERE ram_id = ?1 AND disk_id = ?2",
            params![ram_id, disk_id],
            |row| {
                Ok(RamAssignment {
                    ram_id: row.get(0)?,
                    disk_id: row.get(1)?,
                    ram_size: row.get(2)?,
                })
            },
        ),
    )
}
