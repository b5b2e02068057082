use serde::{Deserialize, Serialize};

/// Disk - a storage resource hosting queries and RAM modules
///
/// `free_space` starts at the disk's capacity and is the only column that
/// changes after insertion: every query assignment reserves the query's size
/// from it and every unassignment gives it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Positive unique identifier
    pub disk_id: i64,

    /// Manufacturer, compared against RAM companies for exclusivity
    pub company: String,

    /// Positive speed rating
    pub speed: i64,

    /// Unreserved capacity (never negative)
    pub free_space: i64,

    /// Positive price per unit of query size
    pub cost_per_byte: i64,
}

impl Disk {
    /// Create a new Disk whose free space equals its capacity
    pub fn new(
        disk_id: i64,
        company: impl Into<String>,
        speed: i64,
        free_space: i64,
        cost_per_byte: i64,
    ) -> Self {
        Self {
            disk_id,
            company: company.into(),
            speed,
            free_space,
            cost_per_byte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_creation() {
        let disk = Disk::new(1, "dell", 10, 10, 5);

        assert_eq!(disk.disk_id, 1);
        assert_eq!(disk.company, "dell");
        assert_eq!(disk.speed, 10);
        assert_eq!(disk.free_space, 10);
        assert_eq!(disk.cost_per_byte, 5);
    }
}
