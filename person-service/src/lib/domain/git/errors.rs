use thiserror::Error;

/// Error for GitHub listing operations. Both variants surface as a bad
/// gateway to the caller.
#[derive(Debug, Clone, Error)]
pub enum GitError {
    #[error("GitHub API error: {0}")]
    Upstream(String),

    #[error("GitHub request failed: {0}")]
    Request(String),
}
