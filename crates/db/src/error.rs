//! Translation of store failures into [`PortalError`].
//!
//! Constraint violations are the authoritative uniqueness and reference checks,
//! so they surface as client errors; everything else stays an opaque
//! database failure.

use luct_core::errors::PortalError;
use sqlx::error::ErrorKind;

/// SQLSTATE class 22: data exception (bad date, integer overflow, value too long...).
const DATA_EXCEPTION_CLASS: &str = "22";

pub fn classify(err: eyre::Report, conflict_message: &str) -> PortalError {
    let Some(db_err) = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
    else {
        return PortalError::Database(err);
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => PortalError::Conflict(conflict_message.to_string()),
        ErrorKind::ForeignKeyViolation => {
            PortalError::Validation("Referenced user does not exist".to_string())
        }
        ErrorKind::NotNullViolation => {
            PortalError::Validation("Missing required field".to_string())
        }
        ErrorKind::CheckViolation => PortalError::Validation("Value out of range".to_string()),
        _ if db_err
            .code()
            .is_some_and(|code| code.starts_with(DATA_EXCEPTION_CLASS)) =>
        {
            PortalError::Validation("Malformed field value".to_string())
        }
        _ => PortalError::Database(err),
    }
}
