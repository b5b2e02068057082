//! Assignment commands
//!
//! Usage:
//!   diskdb assign <query QUERY_ID DISK_ID | ram RAM_ID DISK_ID>
//!   diskdb unassign <query QUERY_ID DISK_ID | ram RAM_ID DISK_ID>

use clap::{Args, Subcommand};
use diskdb_store::ops::assignment_ops;
use rusqlite::Connection;

use super::{report_status, CmdResult};

#[derive(Debug, Subcommand)]
pub enum Target {
    /// A query and the disk it is placed on
    Query { query_id: i64, disk_id: i64 },
    /// A RAM module and the disk it is attached to
    Ram { ram_id: i64, disk_id: i64 },
}

#[derive(Debug, Args)]
pub struct AssignArgs {
    #[command(subcommand)]
    pub target: Target,
}

#[derive(Debug, Args)]
pub struct UnassignArgs {
    #[command(subcommand)]
    pub target: Target,
}

pub fn execute_assign(args: AssignArgs, conn: &mut Connection) -> CmdResult {
    let status = match args.target {
        Target::Query { query_id, disk_id } => {
            assignment_ops::add_query_to_disk(conn, query_id, disk_id)
        }
        Target::Ram { ram_id, disk_id } => assignment_ops::add_ram_to_disk(conn, ram_id, disk_id),
    };
    report_status(status)
}

pub fn execute_unassign(args: UnassignArgs, conn: &mut Connection) -> CmdResult {
    let status = match args.target {
        Target::Query { query_id, disk_id } => {
            assignment_ops::remove_query_from_disk(conn, query_id, disk_id)
        }
        Target::Ram { ram_id, disk_id } => {
            assignment_ops::remove_ram_from_disk(conn, ram_id, disk_id)
        }
    };
    report_status(status)
}
