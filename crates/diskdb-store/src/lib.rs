//! diskdb Store - SQLite persistence and the operation layer
//!
//! Provides:
//! - Connection management and configuration
//! - The schema as an embedded, checksummed migration
//! - Schema lifecycle (create / clear / drop)
//! - Entity CRUD, transactional assignment protocols and reports

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod ops;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
