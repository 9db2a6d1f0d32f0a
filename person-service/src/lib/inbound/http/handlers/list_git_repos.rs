use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::git::models::GitRepo;
use crate::domain::git::ports::GitRepository;
use crate::inbound::http::router::AppState;

pub async fn list_git_repos(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<GitRepoData>>, ApiError> {
    state
        .git_repository
        .list_repos()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "GitHub listing failed");
            ApiError::from(e)
        })
        .map(|repos| {
            let data = repos.iter().map(GitRepoData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRepoData {
    pub name: String,
    pub full_name: String,
}

impl From<&GitRepo> for GitRepoData {
    fn from(repo: &GitRepo) -> Self {
        Self {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
        }
    }
}
