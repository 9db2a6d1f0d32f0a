use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::person::errors::PersonError;
use crate::domain::person::models::PersonId;
use crate::domain::person::ports::PersonServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_person(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(person_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let person_id = PersonId::from_string(&person_id).map_err(PersonError::from)?;

    state
        .person_service
        .delete_person(&person_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
