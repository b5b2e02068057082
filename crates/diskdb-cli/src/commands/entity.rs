//! Entity commands
//!
//! Usage:
//!   diskdb query <add ID PURPOSE SIZE | get ID | delete ID>
//!   diskdb disk <add ID COMPANY SPEED CAPACITY COST_PER_BYTE | get ID | delete ID>
//!   diskdb ram <add ID SIZE COMPANY | get ID | delete ID>

use clap::{Args, Subcommand};
use diskdb_core::{Disk, Query, Ram};
use diskdb_store::ops::{disk_ops, query_ops, ram_ops};
use rusqlite::Connection;

use super::{print_profile, report_status, CmdResult};

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Insert a query
    Add {
        #[arg(allow_negative_numbers = true)]
        query_id: i64,
        purpose: String,
        #[arg(allow_negative_numbers = true)]
        size: i64,
    },
    /// Show a query as JSON
    Get { query_id: i64 },
    /// Delete a query, reclaiming its space on every disk
    Delete { query_id: i64 },
}

#[derive(Debug, Args)]
pub struct DiskArgs {
    #[command(subcommand)]
    pub command: DiskCommand,
}

#[derive(Debug, Subcommand)]
pub enum DiskCommand {
    /// Insert a disk; its free space starts at CAPACITY
    Add {
        #[arg(allow_negative_numbers = true)]
        disk_id: i64,
        company: String,
        #[arg(allow_negative_numbers = true)]
        speed: i64,
        #[arg(allow_negative_numbers = true)]
        capacity: i64,
        #[arg(allow_negative_numbers = true)]
        cost_per_byte: i64,
    },
    /// Show a disk as JSON
    Get { disk_id: i64 },
    /// Delete a disk and its assignments
    Delete { disk_id: i64 },
}

#[derive(Debug, Args)]
pub struct RamArgs {
    #[command(subcommand)]
    pub command: RamCommand,
}

#[derive(Debug, Subcommand)]
pub enum RamCommand {
    /// Insert a RAM module
    Add {
        #[arg(allow_negative_numbers = true)]
        ram_id: i64,
        #[arg(allow_negative_numbers = true)]
        size: i64,
        company: String,
    },
    /// Show a RAM module as JSON
    Get { ram_id: i64 },
    /// Delete a RAM module and its attachments
    Delete { ram_id: i64 },
}

pub fn execute_query(args: QueryArgs, conn: &mut Connection) -> CmdResult {
    match args.command {
        QueryCommand::Add {
            query_id,
            purpose,
            size,
        } => report_status(query_ops::add_query(conn, &Query::new(query_id, purpose, size))),
        QueryCommand::Get { query_id } => print_profile(query_ops::get_query_profile(conn, query_id)),
        QueryCommand::Delete { query_id } => report_status(query_ops::delete_query(conn, query_id)),
    }
}

pub fn execute_disk(args: DiskArgs, conn: &mut Connection) -> CmdResult {
    match args.command {
        DiskCommand::Add {
            disk_id,
            company,
            speed,
            capacity,
            cost_per_byte,
        } => {
            let disk = Disk::new(disk_id, company, speed, capacity, cost_per_byte);
            report_status(disk_ops::add_disk(conn, &disk))
        }
        DiskCommand::Get { disk_id } => print_profile(disk_ops::get_disk_profile(conn, disk_id)),
        DiskCommand::Delete { disk_id } => report_status(disk_ops::delete_disk(conn, disk_id)),
    }
}

pub fn execute_ram(args: RamArgs, conn: &Connection) -> CmdResult {
    match args.command {
        RamCommand::Add {
            ram_id,
            size,
            company,
        } => report_status(ram_ops::add_ram(conn, &Ram::new(ram_id, size, company))),
        RamCommand::Get { ram_id } => print_profile(ram_ops::get_ram_profile(conn, ram_id)),
        RamCommand::Delete { ram_id } => report_status(ram_ops::delete_ram(conn, ram_id)),
    }
}
