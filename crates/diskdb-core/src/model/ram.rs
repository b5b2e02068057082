use serde::{Deserialize, Serialize};

/// RAM module that can be attached to disks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ram {
    /// Positive unique identifier
    pub ram_id: i64,

    /// Positive capacity
    pub size: i64,

    /// Manufacturer
    pub company: String,
}

impl Ram {
    pub fn new(ram_id: i64, size: i64, company: impl Into<String>) -> Self {
        Self {
            ram_id,
            size,
            company: company.into(),
        }
    }
}
