//! Error handling for diskdb-store
//!
//! Wraps diskdb-core ExError with store-specific helpers. The important one
//! is `classify`, which turns SQLite's extended constraint codes into the
//! error taxonomy the operation layer reports.

use diskdb_core::errors::{ExError, ExErrorKind};
use rusqlite::{ffi, ErrorCode};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Which declared constraint rejected a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    NotNull,
    Check,
    ForeignKey,
    Other,
}

/// Identify the constraint behind a rusqlite error, if any
pub fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            Some(match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    ConstraintKind::Unique
                }
                ffi::SQLITE_CONSTRAINT_NOTNULL => ConstraintKind::NotNull,
                ffi::SQLITE_CONSTRAINT_CHECK => ConstraintKind::Check,
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
                _ => ConstraintKind::Other,
            })
        }
        _ => None,
    }
}

/// Classify an engine error raised while executing `op`
///
/// - uniqueness → `AlreadyExists`
/// - not-null / check → `InvalidInput`
/// - foreign key → `NotFound`
/// - anything else → `Persistence`
pub fn classify(op: &str, err: rusqlite::Error) -> ExError {
    let kind = match constraint_kind(&err) {
        Some(ConstraintKind::Unique) => ExErrorKind::AlreadyExists,
        Some(ConstraintKind::NotNull) | Some(ConstraintKind::Check) => ExErrorKind::InvalidInput,
        Some(ConstraintKind::ForeignKey) => ExErrorKind::NotFound,
        Some(ConstraintKind::Other) | None => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error without constraint mapping
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::InvariantViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Targeted removal touched no row
pub fn not_found(op: &str, entity_id: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(op.to_string())
        .with_entity_id(entity_id)
        .with_message("no matching row")
}

/// A statement affected a row count the schema should make impossible
pub fn unexpected_rows(op: &str, expected: usize, actual: usize) -> ExError {
    ExError::new(ExErrorKind::InvariantViolation)
        .with_op(op.to_string())
        .with_message(format!("expected {} row(s), statement affected {}", expected, actual))
}
