//! Core types shared across diskdb facilities
//!
//! Holds the canonical field keys and event names used by the structured
//! logging macros, so every crate emits the same schema.

pub mod schema;
