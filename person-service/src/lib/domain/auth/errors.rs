use thiserror::Error;

use crate::domain::email::EmailError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for registration password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password cannot be empty")]
    Empty,

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordError),

    // Domain-level errors
    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    /// Uniform login failure: unknown email, wrong password, and inactive
    /// account are indistinguishable to the caller.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Token failed decoding (bad signature, malformed, missing claims,
    /// or expired).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token revoked, or its subject no longer exists.
    #[error("Could not validate credentials")]
    Unauthorized,

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token encoding failed: {0}")]
    TokenEncodingFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
