//! diskdb Core - domain model and shared facilities
//!
//! This crate provides the pieces every other diskdb crate builds on:
//! - Query, Disk and RAM models plus the assignment records linking them
//! - The structured error facility (`ExError`, `ExErrorKind`)
//! - The caller-visible status set (`ReturnValue`)
//! - The logging facility (profiles, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, ReturnValue};
pub use model::{Disk, Query, QueryAssignment, Ram, RamAssignment};
