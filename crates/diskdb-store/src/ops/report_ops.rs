//! Read-only reports
//!
//! Every aggregate is wrapped in `COALESCE` so an empty match yields zero
//! rather than NULL. Engine failures are logged and replaced by the same
//! zero/empty/false default.

use rusqlite::Connection;

use super::{or_default, query_ids};
use crate::errors::{classify, Result};

/// Mean size of the queries assigned to a disk; 0 when none
pub fn average_size_queries_on_disk(conn: &Connection, disk_id: i64) -> f64 {
    const OP: &str = "average_size_queries_on_disk";
    or_default(
        OP,
        scalar(
            conn,
            OP,
            "SELECT COALESCE(AVG(q.size), 0.0)
             FROM queries_on_disks a
             JOIN queries q ON q.query_id = a.query_id
             WHERE a.disk_id = ?1",
            disk_id,
        ),
    )
}

/// Sum of the RAM size snapshots attached to a disk; 0 when none
pub fn disk_total_ram(conn: &Connection, disk_id: i64) -> i64 {
    const OP: &str = "disk_total_ram";
    or_default(
        OP,
        scalar(
            conn,
            OP,
            "SELECT COALESCE(SUM(ram_size), 0) FROM rams_on_disks WHERE disk_id = ?1",
            disk_id,
        ),
    )
}

/// Total assignment cost over every query with this purpose; 0 when none
pub fn get_cost_for_purpose(conn: &Connection, purpose: &str) -> i64 {
    const OP: &str = "get_cost_for_purpose";
    or_default(
        OP,
        scalar(
            conn,
            OP,
            "SELECT COALESCE(SUM(a.cost), 0)
             FROM queries_on_disks a
             JOIN queries q ON q.query_id = a.query_id
             WHERE q.purpose = ?1",
            purpose,
        ),
    )
}

/// Up to five queries that fit the disk's free space, highest id first
pub fn get_queries_can_be_added_to_disk(conn: &Connection, disk_id: i64) -> Vec<i64> {
    const OP: &str = "get_queries_can_be_added_to_disk";
    or_default(
        OP,
        query_ids(
            conn,
            OP,
            "SELECT query_id FROM assignable
             WHERE disk_id = ?1
             ORDER BY query_id DESC
             LIMIT 5",
            [disk_id],
        ),
    )
}

/// Up to five queries that fit both the disk's free space and its total
/// attached RAM, lowest id first
pub fn get_queries_can_be_added_to_disk_and_ram(conn: &Connection, disk_id: i64) -> Vec<i64> {
    const OP: &str = "get_queries_can_be_added_to_disk_and_ram";
    or_default(
        OP,
        query_ids(
            conn,
            OP,
            "SELECT s.query_id
             FROM assignable s
             JOIN queries q ON q.query_id = s.query_id
             WHERE s.disk_id = ?1
               AND q.size <= (SELECT COALESCE(SUM(ram_size), 0)
                              FROM rams_on_disks WHERE disk_id = ?1)
             ORDER BY s.query_id ASC
             LIMIT 5",
            [disk_id],
        ),
    )
}

/// Whether every RAM module on the disk comes from the disk's company
///
/// The set of attached RAM companies minus the disk's own company must be
/// empty. A disk with no RAM is exclusive.
pub fn is_company_exclusive(conn: &Connection, disk_id: i64) -> bool {
    const OP: &str = "is_company_exclusive";
    or_default(
        OP,
        scalar(
            conn,
            OP,
            "SELECT NOT EXISTS (
                 SELECT r.company
                 FROM rams_on_disks ra
                 JOIN rams r ON r.ram_id = ra.ram_id
                 WHERE ra.disk_id = ?1
                 EXCEPT
                 SELECT d.company FROM disks d WHERE d.disk_id = ?1
             )",
            disk_id,
        ),
    )
}

/// Disks hosting at least one query that also sits on another disk,
/// ascending
pub fn get_conflicting_disks(conn: &Connection) -> Vec<i64> {
    const OP: &str = "get_conflicting_disks";
    or_default(
        OP,
        query_ids(
            conn,
            OP,
            "SELECT DISTINCT a.disk_id
             FROM queries_on_disks a
             WHERE a.query_id IN (SELECT query_id
                                  FROM queries_on_disks
                                  GROUP BY query_id
                                  HAVING COUNT(*) > 1)
             ORDER BY a.disk_id ASC",
            [],
        ),
    )
}

/// Up to five disks that can take the most queries
///
/// Ordered by the number of queries fitting the disk's free space
/// (descending), then speed (descending), then id (ascending).
pub fn most_available_disks(conn: &Connection) -> Vec<i64> {
    const OP: &str = "most_available_disks";
    or_default(
        OP,
        query_ids(
            conn,
            OP,
            "SELECT d.disk_id
             FROM disks d
             LEFT JOIN assignable s ON s.disk_id = d.disk_id
             GROUP BY d.disk_id, d.speed
             ORDER BY COUNT(s.query_id) DESC, d.speed DESC, d.disk_id ASC
             LIMIT 5",
            [],
        ),
    )
}

/// Up to ten other queries placed on at least half (rounded up) of the
/// disks holding `query_id`, ascending
///
/// A query with no assignments is close to every other query. An unknown
/// query has no close queries.
pub fn get_close_queries(conn: &Connection, query_id: i64) -> Vec<i64> {
    const OP: &str = "get_close_queries";
    // shared >= ceil(n / 2)  <=>  2 * shared >= n
    or_default(
        OP,
        query_ids(
            conn,
            OP,
            "SELECT q.query_id
             FROM queries q
             WHERE q.query_id <> ?1
               AND EXISTS (SELECT 1 FROM queries WHERE query_id = ?1)
               AND 2 * (SELECT COUNT(*)
                        FROM queries_on_disks a
                        WHERE a.query_id = q.query_id
                          AND a.disk_id IN (SELECT disk_id FROM queries_on_disks
                                            WHERE query_id = ?1))
                   >= (SELECT COUNT(*) FROM queries_on_disks WHERE query_id = ?1)
             ORDER BY q.query_id ASC
             LIMIT 10",
            [query_id],
        ),
    )
}

fn scalar<T, P>(conn: &Connection, op: &'static str, sql: &str, param: P) -> Result<T>
where
    T: rusqlite::types::FromSql,
    P: rusqlite::ToSql,
{
    conn.query_row(sql, [param], |row| row.get(0))
        .map_err(|e| classify(op, e))
}
