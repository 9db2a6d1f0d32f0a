use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_person::PersonResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::email::EmailAddress;
use crate::domain::person::errors::PersonError;
use crate::domain::person::models::PersonId;
use crate::domain::person::models::UpdatePersonCommand;
use crate::domain::person::ports::PersonServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a person (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UpdatePersonRequest {
    fn try_into_command(self) -> Result<UpdatePersonCommand, PersonError> {
        // Validation happens here - errors are automatically converted via #[from]
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdatePersonCommand {
            name: self.name,
            email,
            age: self.age,
        })
    }
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(body): Json<UpdatePersonRequest>,
) -> Result<ApiSuccess<PersonResponseData>, ApiError> {
    let person_id = PersonId::from_string(&person_id).map_err(PersonError::from)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .person_service
        .update_person(&person_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::OK, person.into()))
}
