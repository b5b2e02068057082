pub mod assignment;
pub mod disk;
pub mod query;
pub mod ram;

pub use assignment::{QueryAssignment, RamAssignment};
pub use disk::Disk;
pub use query::Query;
pub use ram::Ram;
