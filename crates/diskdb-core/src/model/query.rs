use serde::{Deserialize, Serialize};

/// Query - a workload that can be placed on one or more disks
///
/// `size` is the amount of disk space the query occupies on every disk it
/// is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Positive unique identifier
    pub query_id: i64,

    /// Free-text category used by cost reporting
    pub purpose: String,

    /// Space the query occupies (non-negative)
    pub size: i64,
}

impl Query {
    /// Create a new Query
    pub fn new(query_id: i64, purpose: impl Into<String>, size: i64) -> Self {
        Self {
            query_id,
            purpose: purpose.into(),
            size,
        }
    }
}
