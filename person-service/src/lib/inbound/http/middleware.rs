use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extractor that authorizes a request from its bearer token.
///
/// Runs the full resolution pipeline: token validation, revocation check,
/// then user lookup. Handlers that take a `CurrentUser` argument are
/// therefore protected; the rest stay public.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let user = state.auth_service.resolve_user(token).await.map_err(|e| {
            tracing::warn!(error = %e, "Request authorization failed");
            ApiError::Unauthorized("Could not validate credentials".to_string())
        })?;

        Ok(CurrentUser {
            user_id: user.id,
            email: user.email.to_string(),
        })
    }
}

/// Pull the bearer token out of the Authorization header.
///
/// A missing or garbled header is always a 401; what happens to a present
/// but invalid token is up to the caller.
pub(crate) fn bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
