use std::time::Duration;

use async_trait::async_trait;

use crate::domain::git::errors::GitError;
use crate::domain::git::models::GitRepo;
use crate::domain::git::ports::GitRepository;

/// GitHub REST client listing a user's public repositories.
pub struct GithubRepoClient {
    http: reqwest::Client,
    repos_url: String,
}

impl GithubRepoClient {
    /// Create a new client for the given repos listing URL.
    ///
    /// # Arguments
    /// * `repos_url` - Full URL of the GitHub repos listing endpoint
    pub fn new(repos_url: impl Into<String>) -> Result<Self, GitError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GitError::Request(e.to_string()))?;

        Ok(Self {
            http,
            repos_url: repos_url.into(),
        })
    }
}

#[async_trait]
impl GitRepository for GithubRepoClient {
    async fn list_repos(&self) -> Result<Vec<GitRepo>, GitError> {
        let response = self
            .http
            .get(&self.repos_url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "person-service")
            .send()
            .await
            .map_err(|e| GitError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitError::Upstream(format!("{} - {}", status, body)));
        }

        let payload: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| GitError::Request(e.to_string()))?;

        // Entries missing either field are skipped rather than failing the list
        let repos = payload
            .iter()
            .filter_map(|item| {
                let name = item.get("name")?.as_str()?;
                let full_name = item.get("full_name")?.as_str()?;
                Some(GitRepo {
                    name: name.to_string(),
                    full_name: full_name.to_string(),
                })
            })
            .collect();

        Ok(repos)
    }
}
