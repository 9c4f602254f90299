//! # Model Errors
//!
//! Error types shared by the model and the record store.

use thiserror::Error;

use super::candidate::FieldError;

/// Result type for model and store operations
pub type YetiResult<T> = Result<T, YetiError>;

/// Failures on the yeti write path
#[derive(Debug, Clone, Error)]
pub enum YetiError {
    /// Candidate failed validation; carries every failing field.
    #[error("Validation failed: {}", format_failures(.0))]
    Invalid(Vec<FieldError>),

    /// Email collided with an existing record at insert time.
    ///
    /// Distinct from [`YetiError::Invalid`]: this surfaces after the
    /// validation pre-check already passed, i.e. a concurrent writer won.
    #[error("Email already registered")]
    EmailTaken,

    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),
}

fn format_failures(failures: &[FieldError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl YetiError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable Entity
            YetiError::Invalid(_) => 422,

            // 409 Conflict
            YetiError::EmailTaken => 409,

            // 500 Internal Server Error
            YetiError::HashingFailed => 500,
            YetiError::StorageError(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
