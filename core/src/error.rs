//! Core error types for the presence service

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Core error type for all storage operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Player not found: {0}")]
    PlayerNotFound(i32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => CoreError::StorageUnavailable(err.to_string()),
            sqlx::Error::Database(ref db) if is_rejected_value(db.as_ref()) => {
                CoreError::Validation(db.message().to_string())
            }
            other => CoreError::Database(other),
        }
    }
}

/// Constraint violations and SQLSTATE class 22 (data exception) mean the
/// stored values were rejected, not that storage failed.
fn is_rejected_value(err: &dyn sqlx::error::DatabaseError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotNullViolation | ErrorKind::CheckViolation
    ) || err.code().is_some_and(|code| code.starts_with("22"))
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
