use diskdb_core::{Disk, Query, Ram};
use diskdb_store::ops::{disk_ops, query_ops, ram_ops};
use rusqlite::Connection;

/// In-memory database with the schema created
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let mut conn = diskdb_store::db::open_in_memory().expect("in-memory database");
    diskdb_store::schema::create_tables(&mut conn).expect("schema");
    conn
}

#[allow(dead_code)]
pub fn seed_disk(conn: &Connection, disk_id: i64, company: &str, capacity: i64, cost: i64) {
    let status = disk_ops::add_disk(conn, &Disk::new(disk_id, company, 10, capacity, cost));
    assert!(status.is_ok(), "seed disk {}: {}", disk_id, status);
}

#[allow(dead_code)]
pub fn seed_query(conn: &Connection, query_id: i64, purpose: &str, size: i64) {
    let status = query_ops::add_query(conn, &Query::new(query_id, purpose, size));
    assert!(status.is_ok(), "seed query {}: {}", query_id, status);
}

#[allow(dead_code)]
pub fn seed_ram(conn: &Connection, ram_id: i64, size: i64, company: &str) {
    let status = ram_ops::add_ram(conn, &Ram::new(ram_id, size, company));
    assert!(status.is_ok(), "seed ram {}: {}", ram_id, status);
}

/// Current free space of a disk, read straight from the table
#[allow(dead_code)]
pub fn free_space(conn: &Connection, disk_id: i64) -> i64 {
    conn.query_row(
        "SELECT free_space FROM disks WHERE disk_id = ?1",
        [disk_id],
        |row| row.get(0),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

/// Space held by the queries currently assigned to a disk
#[allow(dead_code)]
pub fn used_space(conn: &Connection, disk_id: i64) -> i64 {
    conn.query_row(
        "SELECT COALESCE(SUM(q.size), 0)
         FROM queries_on_disks a JOIN queries q ON q.query_id = a.query_id
         WHERE a.disk_id = ?1",
        [disk_id],
        |row| row.get(0),
    )
    .unwrap()
}
