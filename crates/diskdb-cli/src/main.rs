//! diskdb CLI
//!
//! Command-line interface over the diskdb store operations

use clap::{Parser, Subcommand};
use diskdb_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "diskdb")]
#[command(about = "diskdb - queries, disks and RAM with capacity accounting", long_about = None)]
struct Cli {
    /// TOML file with store settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides the config file's path)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create, clear or drop the schema
    Schema(commands::schema::SchemaArgs),
    /// Query entity operations
    Query(commands::entity::QueryArgs),
    /// Disk entity operations
    Disk(commands::entity::DiskArgs),
    /// RAM entity operations
    Ram(commands::entity::RamArgs),
    /// Place a query or RAM module on a disk
    Assign(commands::assign::AssignArgs),
    /// Take a query or RAM module off a disk
    Unassign(commands::assign::UnassignArgs),
    /// Read-only reports
    Report(commands::report::ReportArgs),
}

fn main() {
    let profile = std::env::var("DISKDB_LOG")
        .ok()
        .and_then(|raw| raw.parse::<Profile>().ok())
        .unwrap_or(Profile::Development);
    logging_facility::init(profile);

    let cli = Cli::parse();

    let result = commands::open_store(cli.config.as_deref(), cli.db).and_then(|mut conn| {
        match cli.command {
            Commands::Schema(args) => commands::schema::execute(args, &mut conn),
            Commands::Query(args) => commands::entity::execute_query(args, &mut conn),
            Commands::Disk(args) => commands::entity::execute_disk(args, &mut conn),
            Commands::Ram(args) => commands::entity::execute_ram(args, &conn),
            Commands::Assign(args) => commands::assign::execute_assign(args, &mut conn),
            Commands::Unassign(args) => commands::assign::execute_unassign(args, &mut conn),
            Commands::Report(args) => commands::report::execute(args, &conn),
        }
    });

    match result {
        Ok(status) if status.is_ok() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
