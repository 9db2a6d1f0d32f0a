use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref access| ApiSuccess::new(StatusCode::OK, access.into()))
}

/// HTTP request body for login (raw JSON).
///
/// The email is deliberately not run through the value object here: a
/// malformed email is just an unknown one and fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&AccessToken> for LoginResponseData {
    fn from(access: &AccessToken) -> Self {
        Self {
            access_token: access.token.clone(),
            token_type: "bearer".to_string(),
            expires_at: access.expires_at,
        }
    }
}
