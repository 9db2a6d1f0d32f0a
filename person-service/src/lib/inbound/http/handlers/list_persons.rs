use axum::extract::State;
use axum::http::StatusCode;

use super::create_person::PersonResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::person::ports::PersonServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PersonResponseData>>, ApiError> {
    state
        .person_service
        .list_persons()
        .await
        .map_err(ApiError::from)
        .map(|persons| {
            let data = persons.iter().map(PersonResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
