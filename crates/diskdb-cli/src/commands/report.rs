//! Report commands
//!
//! Scalars are printed as-is, id lists as a JSON array.

use clap::{Args, Subcommand};
use diskdb_core::ReturnValue;
use diskdb_store::ops::report_ops;
use rusqlite::Connection;

use super::CmdResult;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Mean size of the queries on a disk
    AverageSize { disk_id: i64 },
    /// Total RAM attached to a disk
    TotalRam { disk_id: i64 },
    /// Total assignment cost of queries with a purpose
    CostForPurpose { purpose: String },
    /// Queries fitting a disk's free space (top 5, highest id first)
    CanAdd { disk_id: i64 },
    /// Queries fitting both free space and attached RAM (top 5, lowest id first)
    CanAddWithRam { disk_id: i64 },
    /// Whether all RAM on a disk comes from the disk's company
    Exclusive { disk_id: i64 },
    /// Disks sharing a query with another disk
    Conflicting,
    /// Disks that can take the most queries (top 5)
    MostAvailable,
    /// Queries placed alongside a query on at least half its disks (top 10)
    Close { query_id: i64 },
}

pub fn execute(args: ReportArgs, conn: &Connection) -> CmdResult {
    match args.command {
        ReportCommand::AverageSize { disk_id } => {
            println!("{}", report_ops::average_size_queries_on_disk(conn, disk_id));
        }
        ReportCommand::TotalRam { disk_id } => {
            println!("{}", report_ops::disk_total_ram(conn, disk_id));
        }
        ReportCommand::CostForPurpose { purpose } => {
            println!("{}", report_ops::get_cost_for_purpose(conn, &purpose));
        }
        ReportCommand::CanAdd { disk_id } => {
            print_ids(&report_ops::get_queries_can_be_added_to_disk(conn, disk_id))?;
        }
        ReportCommand::CanAddWithRam { disk_id } => {
            print_ids(&report_ops::get_queries_can_be_added_to_disk_and_ram(
                conn, disk_id,
            ))?;
        }
        ReportCommand::Exclusive { disk_id } => {
            println!("{}", report_ops::is_company_exclusive(conn, disk_id));
        }
        ReportCommand::Conflicting => print_ids(&report_ops::get_conflicting_disks(conn))?,
        ReportCommand::MostAvailable => print_ids(&report_ops::most_available_disks(conn))?,
        ReportCommand::Close { query_id } => {
            print_ids(&report_ops::get_close_queries(conn, query_id))?;
        }
    }
    Ok(ReturnValue::Ok)
}

fn print_ids(ids: &[i64]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(ids)?);
    Ok(())
}
