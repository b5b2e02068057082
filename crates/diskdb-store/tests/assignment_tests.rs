// Integration tests for the query and RAM assignment protocols

use diskdb_core::{Query, ReturnValue};
use diskdb_store::ops::assignment_ops::{
    add_query_to_disk, add_ram_to_disk, get_query_assignment, get_ram_assignment,
    remove_query_from_disk, remove_ram_from_disk,
};
use diskdb_store::ops::{disk_ops, query_ops, ram_ops};

mod common;
use common::{free_space, seed_disk, seed_query, seed_ram, setup_test_db};

#[test]
fn test_assign_reserves_space_and_prices_the_pair() {
    // Given: A disk with 10 bytes at 5 per byte and a 4-byte query
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 5);
    seed_query(&conn, 1, "etl", 4);

    // When: The query is assigned
    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);

    // Then: The assignment carries size * cost_per_byte and space is reserved
    let assignment = get_query_assignment(&conn, 1, 1).expect("assignment row");
    assert_eq!(assignment.cost, 20);
    assert_eq!(free_space(&conn, 1), 6);
}

#[test]
fn test_unassign_restores_space() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 5);
    seed_query(&conn, 1, "etl", 4);
    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);

    assert_eq!(remove_query_from_disk(&mut conn, 1, 1), ReturnValue::Ok);

    assert_eq!(free_space(&conn, 1), 10);
    assert!(get_query_assignment(&conn, 1, 1).is_none());
}

#[test]
fn test_duplicate_assign_is_already_exists_and_keeps_space() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 5);
    seed_query(&conn, 1, "etl", 4);
    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);

    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::AlreadyExists);
    assert_eq!(free_space(&conn, 1), 6, "second attempt must not reserve again");
}

#[test]
fn test_assign_beyond_capacity_fails_without_side_effects() {
    // Given: A 3-byte disk and a 5-byte query
    let mut conn = setup_test_db();
    seed_disk(&conn, 2, "hp", 3, 1);
    seed_query(&conn, 2, "batch", 5);

    // When: The query is assigned
    let status = add_query_to_disk(&mut conn, 2, 2);

    // Then: The whole unit fails and nothing is left behind
    assert_eq!(status, ReturnValue::Error);
    assert_eq!(free_space(&conn, 2), 3);
    assert!(get_query_assignment(&conn, 2, 2).is_none());
}

#[test]
fn test_assign_exactly_filling_the_disk() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 4, 2);
    seed_query(&conn, 1, "etl", 4);

    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);
    assert_eq!(free_space(&conn, 1), 0);
}

#[test]
fn test_assign_zero_size_query_costs_nothing() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 0, 7);
    seed_query(&conn, 1, "noop", 0);

    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);
    assert_eq!(get_query_assignment(&conn, 1, 1).unwrap().cost, 0);
    assert_eq!(free_space(&conn, 1), 0);
}

#[test]
fn test_assign_with_missing_parent_is_not_exists() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 5);
    seed_query(&conn, 1, "etl", 4);

    assert_eq!(add_query_to_disk(&mut conn, 99, 1), ReturnValue::NotExists);
    assert_eq!(add_query_to_disk(&mut conn, 1, 99), ReturnValue::NotExists);
    assert_eq!(add_query_to_disk(&mut conn, 98, 99), ReturnValue::NotExists);
    assert_eq!(free_space(&conn, 1), 10);
}

#[test]
fn test_unassign_missing_pair_is_ok_and_harmless() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 5);
    seed_query(&conn, 1, "etl", 4);

    assert_eq!(remove_query_from_disk(&mut conn, 1, 1), ReturnValue::Ok);
    assert_eq!(remove_query_from_disk(&mut conn, 42, 43), ReturnValue::Ok);
    assert_eq!(free_space(&conn, 1), 10, "no space handed out for an unassigned pair");
}

#[test]
fn test_same_query_on_several_disks() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_disk(&conn, 2, "hp", 10, 3);
    seed_query(&conn, 1, "etl", 4);

    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);
    assert_eq!(add_query_to_disk(&mut conn, 1, 2), ReturnValue::Ok);

    assert_eq!(get_query_assignment(&conn, 1, 1).unwrap().cost, 4);
    assert_eq!(get_query_assignment(&conn, 1, 2).unwrap().cost, 12);
    assert_eq!(free_space(&conn, 1), 6);
    assert_eq!(free_space(&conn, 2), 6);
}

#[test]
fn test_delete_query_reclaims_space_on_every_disk() {
    // Given: One query placed on two disks
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_disk(&conn, 2, "hp", 20, 1);
    seed_query(&conn, 7, "etl", 4);
    assert_eq!(add_query_to_disk(&mut conn, 7, 1), ReturnValue::Ok);
    assert_eq!(add_query_to_disk(&mut conn, 7, 2), ReturnValue::Ok);

    // When: The query is deleted
    assert_eq!(query_ops::delete_query(&mut conn, 7), ReturnValue::Ok);

    // Then: Both disks are whole again and no assignment survives
    assert_eq!(free_space(&conn, 1), 10);
    assert_eq!(free_space(&conn, 2), 20);
    assert_eq!(common::count_rows(&conn, "queries_on_disks"), 0);
    assert!(query_ops::get_query_profile(&conn, 7).is_none());
}

#[test]
fn test_delete_disk_cascades_assignments() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_query(&conn, 1, "etl", 4);
    seed_ram(&conn, 1, 8, "dell");
    assert_eq!(add_query_to_disk(&mut conn, 1, 1), ReturnValue::Ok);
    assert_eq!(add_ram_to_disk(&conn, 1, 1), ReturnValue::Ok);

    assert_eq!(disk_ops::delete_disk(&conn, 1), ReturnValue::Ok);

    assert_eq!(common::count_rows(&conn, "queries_on_disks"), 0);
    assert_eq!(common::count_rows(&conn, "rams_on_disks"), 0);
    // The query and the RAM module themselves survive
    assert!(query_ops::get_query_profile(&conn, 1).is_some());
    assert!(ram_ops::get_ram_profile(&conn, 1).is_some());
}

#[test]
fn test_add_disk_and_query_is_all_or_nothing() {
    let mut conn = setup_test_db();
    seed_query(&conn, 5, "etl", 1);

    // The query id clashes, so the disk must not survive either
    let status = disk_ops::add_disk_and_query(
        &mut conn,
        &diskdb_core::Disk::new(9, "dell", 10, 100, 1),
        &Query::new(5, "other", 2),
    );
    assert_eq!(status, ReturnValue::AlreadyExists);
    assert!(disk_ops::get_disk_profile(&conn, 9).is_none());

    let status = disk_ops::add_disk_and_query(
        &mut conn,
        &diskdb_core::Disk::new(9, "dell", 10, 100, 1),
        &Query::new(6, "other", 2),
    );
    assert_eq!(status, ReturnValue::Ok);
    assert!(disk_ops::get_disk_profile(&conn, 9).is_some());
    assert!(query_ops::get_query_profile(&conn, 6).is_some());
}

#[test]
fn test_add_disk_and_query_rejected_query_leaves_no_disk() {
    let mut conn = setup_test_db();

    // Given: A valid disk paired with a query of negative size
    let status = disk_ops::add_disk_and_query(
        &mut conn,
        &diskdb_core::Disk::new(9, "dell", 10, 100, 1),
        &Query::new(6, "etl", -1),
    );

    // Then: Classified like a single add, and the disk insert is undone
    assert_eq!(status, ReturnValue::BadParams);
    assert!(disk_ops::get_disk_profile(&conn, 9).is_none());
    assert!(query_ops::get_query_profile(&conn, 6).is_none());
}

#[test]
fn test_add_disk_and_query_rejected_disk_leaves_no_query() {
    let mut conn = setup_test_db();
    seed_disk(&conn, 9, "dell", 100, 1);

    let status = disk_ops::add_disk_and_query(
        &mut conn,
        &diskdb_core::Disk::new(0, "dell", 10, 100, 1),
        &Query::new(6, "etl", 2),
    );
    assert_eq!(status, ReturnValue::BadParams);
    assert!(query_ops::get_query_profile(&conn, 6).is_none());

    let status = disk_ops::add_disk_and_query(
        &mut conn,
        &diskdb_core::Disk::new(9, "hp", 10, 100, 1),
        &Query::new(6, "etl", 2),
    );
    assert_eq!(status, ReturnValue::AlreadyExists);
    assert!(query_ops::get_query_profile(&conn, 6).is_none());
    assert_eq!(common::count_rows(&conn, "disks"), 1);
}

#[test]
fn test_assign_with_overflowing_cost_fails_without_side_effects() {
    // Given: size * cost_per_byte exceeds the 64-bit integer range
    let mut conn = setup_test_db();
    seed_disk(&conn, 1, "dell", i64::MAX, 4);
    seed_query(&conn, 1, "etl", i64::MAX / 2);

    // When: The query is assigned
    let status = add_query_to_disk(&mut conn, 1, 1);

    // Then: The cost is never stored as a non-integer and nothing changes
    assert_eq!(status, ReturnValue::Error);
    assert!(get_query_assignment(&conn, 1, 1).is_none());
    assert_eq!(common::count_rows(&conn, "queries_on_disks"), 0);
    assert_eq!(free_space(&conn, 1), i64::MAX);
    assert_eq!(
        diskdb_store::ops::report_ops::get_cost_for_purpose(&conn, "etl"),
        0
    );
}

#[test]
fn test_ram_attach_snapshots_size() {
    let conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_ram(&conn, 3, 16, "dell");

    assert_eq!(add_ram_to_disk(&conn, 3, 1), ReturnValue::Ok);
    let attached = get_ram_assignment(&conn, 3, 1).expect("attachment row");
    assert_eq!(attached.ram_size, 16);
}

#[test]
fn test_ram_attach_statuses() {
    let conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_ram(&conn, 3, 16, "dell");

    assert_eq!(add_ram_to_disk(&conn, 3, 1), ReturnValue::Ok);
    assert_eq!(add_ram_to_disk(&conn, 3, 1), ReturnValue::AlreadyExists);
    assert_eq!(add_ram_to_disk(&conn, 4, 1), ReturnValue::NotExists);
    assert_eq!(add_ram_to_disk(&conn, 3, 2), ReturnValue::NotExists);
}

#[test]
fn test_ram_detach_missing_pair_is_not_exists() {
    let conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_ram(&conn, 3, 16, "dell");

    assert_eq!(remove_ram_from_disk(&conn, 3, 1), ReturnValue::NotExists);
    assert_eq!(add_ram_to_disk(&conn, 3, 1), ReturnValue::Ok);
    assert_eq!(remove_ram_from_disk(&conn, 3, 1), ReturnValue::Ok);
    assert_eq!(remove_ram_from_disk(&conn, 3, 1), ReturnValue::NotExists);
}

#[test]
fn test_delete_ram_cascades_attachment() {
    let conn = setup_test_db();
    seed_disk(&conn, 1, "dell", 10, 1);
    seed_ram(&conn, 3, 16, "dell");
    assert_eq!(add_ram_to_disk(&conn, 3, 1), ReturnValue::Ok);

    assert_eq!(ram_ops::delete_ram(&conn, 3), ReturnValue::Ok);
    assert!(get_ram_assignment(&conn, 3, 1).is_none());
}
