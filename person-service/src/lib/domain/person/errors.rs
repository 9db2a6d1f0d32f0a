use thiserror::Error;

use crate::domain::email::EmailError;

/// Error for PersonId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for person operations
#[derive(Debug, Clone, Error)]
pub enum PersonError {
    #[error("Invalid person ID: {0}")]
    InvalidPersonId(#[from] PersonIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Person not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
