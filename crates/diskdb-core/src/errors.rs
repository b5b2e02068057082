use serde::Serialize;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure an operation can observe is classified into one of these
/// kinds. Each kind maps to a stable error code and, at the public surface,
/// to exactly one `ReturnValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A not-null or check constraint rejected the supplied values
    InvalidInput,
    /// A referenced row is absent (foreign key) or a targeted removal hit nothing
    NotFound,
    /// A primary key collided
    AlreadyExists,
    /// Reserving space would drive a disk's free space below zero
    CapacityExceeded,
    /// More rows than the key constraints allow
    InvariantViolation,

    // Integration/IO
    Persistence,
    Io,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::CapacityExceeded => "ERR_CAPACITY_EXCEEDED",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used to pick a `ReturnValue` plus enough
/// context (operation, entity, engine message) to make the log line useful.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation name, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status a caller observes for this error
    pub fn status(&self) -> ReturnValue {
        ReturnValue::from(self.kind)
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Status code returned by every mutating operation
///
/// This is the whole caller-visible contract; the detail behind `Error`
/// stays in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnValue {
    Ok,
    AlreadyExists,
    NotExists,
    BadParams,
    Error,
}

impl ReturnValue {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnValue::Ok => "OK",
            ReturnValue::AlreadyExists => "ALREADY_EXISTS",
            ReturnValue::NotExists => "NOT_EXISTS",
            ReturnValue::BadParams => "BAD_PARAMS",
            ReturnValue::Error => "ERROR",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ReturnValue::Ok)
    }
}

impl std::fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExErrorKind> for ReturnValue {
    fn from(kind: ExErrorKind) -> Self {
        match kind {
            ExErrorKind::AlreadyExists => ReturnValue::AlreadyExists,
            ExErrorKind::NotFound => ReturnValue::NotExists,
            ExErrorKind::InvalidInput => ReturnValue::BadParams,
            // A rejected reservation is reported as a plain failure
            ExErrorKind::CapacityExceeded
            | ExErrorKind::InvariantViolation
            | ExErrorKind::Persistence
            | ExErrorKind::Io
            | ExErrorKind::Config
            | ExErrorKind::Internal => ReturnValue::Error,
        }
    }
}

impl<T> From<Result<T>> for ReturnValue {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => ReturnValue::Ok,
            Err(e) => e.status(),
        }
    }
}
