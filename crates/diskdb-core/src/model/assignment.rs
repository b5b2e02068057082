//! Assignment records
//!
//! Both records snapshot an attribute at assignment time. Neither is ever
//! updated afterwards: later changes to a disk's price or a module's size do
//! not reach existing assignments.

use serde::{Deserialize, Serialize};

/// A query placed on a disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAssignment {
    pub query_id: i64,
    pub disk_id: i64,

    /// `size × cost_per_byte` as of the assignment
    pub cost: i64,
}

/// A RAM module attached to a disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamAssignment {
    pub ram_id: i64,
    pub disk_id: i64,

    /// Module size as of the assignment
    pub ram_size: i64,
}
