//! Migration framework
//!
//! The schema ships as embedded SQL. Applied migrations are recorded with a
//! checksum in `schema_version`; re-running is a no-op, and an applied
//! migration whose SQL has since changed is rejected.

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migrations, SCHEMA_VERSION_TABLE};
