use async_trait::async_trait;

use crate::domain::git::errors::GitError;
use crate::domain::git::models::GitRepo;

/// Port for listing public repositories.
#[async_trait]
pub trait GitRepository: Send + Sync + 'static {
    /// Fetch the configured user's public repositories.
    ///
    /// # Errors
    /// * `Upstream` - GitHub responded with a non-success status
    /// * `Request` - The request itself failed (connect, timeout, decode)
    async fn list_repos(&self) -> Result<Vec<GitRepo>, GitError>;
}
