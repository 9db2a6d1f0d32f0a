use thiserror::Error;

/// Error type for password hashing.
///
/// Verification never produces an error: any failure while checking a
/// password is reported as a non-match.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
