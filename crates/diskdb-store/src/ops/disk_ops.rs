use std::time::Instant;

use diskdb_core::{log_op_start, Disk, Query, ReturnValue};
use rusqlite::{params, Connection};

use super::query_ops::insert_query;
use super::{fetch_by_key, into_status, profile_or_none};
use crate::db::with_transaction;
use crate::errors::{classify, not_found, Result};

/// Insert a disk; its `free_space` is its capacity
///
/// # Returns
/// * `Ok` - the row was inserted
/// * `AlreadyExists` - `disk_id` is taken
/// * `BadParams` - a check constraint rejected an attribute
/// * `Error` - any other engine failure
pub fn add_disk(conn: &Connection, disk: &Disk) -> ReturnValue {
    const OP: &str = "add_disk";
    let started = Instant::now();
    log_op_start!(OP, disk_id = disk.disk_id);

    into_status(OP, started, insert_disk(conn, disk, OP))
}

fn insert_disk(conn: &Connection, disk: &Disk, op: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO disks (disk_id, company, speed, free_space, cost_per_byte)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            disk.disk_id,
            disk.company,
            disk.speed,
            disk.free_space,
            disk.cost_per_byte
        ],
    )
    .map_err(|e| classify(op, e).with_entity_id(disk.disk_id.to_string()))?;
    Ok(())
}

/// Look up a disk by id; `None` when absent
pub fn get_disk_profile(conn: &Connection, disk_id: i64) -> Option<Disk> {
    const OP: &str = "get_disk_profile";
    profile_or_none(
        OP,
        fetch_by_key(
            conn,
            OP,
            "SELECT disk_id, company, speed, free_space, cost_per_byte
             FROM disks WHERE disk_id = ?1",
            [disk_id],
            |row| {
                Ok(Disk::new(
                    row.get(0)?,
                    row.get::<_, String>(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            },
        ),
    )
}

/// Delete a disk; both assignment tables cascade
pub fn delete_disk(conn: &Connection, disk_id: i64) -> ReturnValue {
    const OP: &str = "delete_disk";
    let started = Instant::now();
    log_op_start!(OP, disk_id = disk_id);

    let result = conn
        .execute("DELETE FROM disks WHERE disk_id = ?1", [disk_id])
        .map_err(|e| classify(OP, e))
        .and_then(|deleted| match deleted {
            0 => Err(not_found(OP, disk_id.to_string())),
            _ => Ok(()),
        });
    into_status(OP, started, result)
}

/// Insert a disk and a query as one unit
///
/// Either both rows exist afterwards or neither does. The status is
/// classified from whichever insert failed, exactly like a single add.
pub fn add_disk_and_query(conn: &mut Connection, disk: &Disk, query: &Query) -> ReturnValue {
    const OP: &str = "add_disk_and_query";
    let started = Instant::now();
    log_op_start!(OP, disk_id = disk.disk_id, query_id = query.query_id);

    let result = with_transaction(conn, OP, |tx| {
        insert_disk(tx, disk, OP)?;
        insert_query(tx, query, OP)
    });
    into_status(OP, started, result)
}
