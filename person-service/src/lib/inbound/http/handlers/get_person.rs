use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_person::PersonResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::person::errors::PersonError;
use crate::domain::person::models::PersonId;
use crate::domain::person::ports::PersonServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<ApiSuccess<PersonResponseData>, ApiError> {
    let person_id = PersonId::from_string(&person_id).map_err(PersonError::from)?;

    state
        .person_service
        .get_person(&person_id)
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::OK, person.into()))
}
