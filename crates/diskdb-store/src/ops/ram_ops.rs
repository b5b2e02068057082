use std::time::Instant;

use diskdb_core::{log_op_start, Ram, ReturnValue};
use rusqlite::{params, Connection};

use super::{fetch_by_key, into_status, profile_or_none};
use crate::errors::{classify, not_found};

/// Insert a RAM module
///
/// # Returns
/// * `Ok` - the row was inserted
/// * `AlreadyExists` - `ram_id` is taken
/// * `BadParams` - `ram_id <= 0` or `size <= 0`
/// * `Error` - any other engine failure
pub fn add_ram(conn: &Connection, ram: &Ram) -> ReturnValue {
    const OP: &str = "add_ram";
    let started = Instant::now();
    log_op_start!(OP, ram_id = ram.ram_id);

    let result = conn
        .execute(
            "INSERT INTO rams (ram_id, size, company) VALUES (?1, ?2, ?3)",
            params![ram.ram_id, ram.size, ram.company],
        )
        .map(|_| ())
        .map_err(|e| classify(OP, e).with_entity_id(ram.ram_id.to_string()));
    into_status(OP, started, result)
}

/// Look up a RAM module by id; `None` when absent
pub fn get_ram_profile(conn: &Connection, ram_id: i64) -> Option<Ram> {
    const OP: &str = "get_ram_profile";
    profile_or_none(
        OP,
        fetch_by_key(
            conn,
            OP,
            "SELECT ram_id, size, company FROM rams WHERE ram_id = ?1",
            [ram_id],
            |row| Ok(Ram::new(row.get(0)?, row.get(1)?, row.get::<_, String>(2)?)),
        ),
    )
}

/// Delete a RAM module; its disk attachments cascade
///
/// # Returns
/// * `Ok` - the module was removed
/// * `NotExists` - no RAM module with this id
/// * `Error` - any other engine failure
pub fn delete_ram(conn: &Connection, ram_id: i64) -> ReturnValue {
    const OP: &str = "delete_ram";
    let started = Instant::now();
    log_op_start!(OP, ram_id = ram_id);

    let result = conn
        .execute("DELETE FROM rams WHERE ram_id = ?1", [ram_id])
        .map_err(|e| classify(OP, e))
        .and_then(|deleted| match deleted {
            0 => Err(not_found(OP, ram_id.to_string())),
            _ => Ok(()),
        });
    into_status(OP, started, result)
}
