//! Canonical logging macros
//!
//! Every mutating store operation is bracketed by one start event and
//! exactly one end or end_error event.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use diskdb_core::log_op_start;
/// log_op_start!("add_disk");
/// log_op_start!("add_disk", disk_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = diskdb_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = diskdb_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use diskdb_core::log_op_end;
/// log_op_end!("add_disk", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = diskdb_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = diskdb_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Expected outcomes (duplicate key, missing row) are logged at warn level;
/// engine and internal failures at error level.
///
/// # Example
///
/// ```
/// # use diskdb_core::log_op_error;
/// use diskdb_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::NotFound).with_op("delete_disk");
/// log_op_error!("delete_disk", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: &$crate::errors::ExError = $err;
        match ex_err.status() {
            $crate::errors::ReturnValue::Error => tracing::error!(
                component = module_path!(),
                op = $op,
                event = diskdb_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                status = ex_err.status().as_str(),
                message = ex_err.message(),
                $($field)*
            ),
            _ => tracing::warn!(
                component = module_path!(),
                op = $op,
                event = diskdb_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                status = ex_err.status().as_str(),
                message = ex_err.message(),
                $($field)*
            ),
        }
    }};
}
