//! Schema lifecycle command
//!
//! Usage: diskdb schema <create|clear|drop>

use clap::{Args, Subcommand};
use diskdb_core::ReturnValue;
use rusqlite::Connection;

use super::{report_status, CmdResult};

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// Create every table and view (no-op when present)
    Create,
    /// Delete all rows, keep the structure
    Clear,
    /// Drop every table and view
    Drop,
}

pub fn execute(args: SchemaArgs, conn: &mut Connection) -> CmdResult {
    let result = match args.command {
        SchemaCommand::Create => diskdb_store::schema::create_tables(conn),
        SchemaCommand::Clear => diskdb_store::schema::clear_tables(conn),
        SchemaCommand::Drop => diskdb_store::schema::drop_tables(conn),
    };
    report_status(ReturnValue::from(result))
}
