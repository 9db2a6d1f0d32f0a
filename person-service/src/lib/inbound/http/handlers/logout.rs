use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::middleware::bearer_token;
use crate::inbound::http::router::AppState;

/// Revoke the presented token.
///
/// Deliberately not behind the CurrentUser extractor: logout only needs the
/// token to decode, not a live (unrevoked) session. An undecodable token is
/// a 400, a missing header a 401.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers)?;

    state
        .auth_service
        .logout(token)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
