use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::email::EmailAddress;
use crate::domain::email::EmailError;
use crate::domain::person::models::CreatePersonCommand;
use crate::domain::person::models::Person;
use crate::domain::person::ports::PersonServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_person(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(body): Json<CreatePersonRequest>,
) -> Result<ApiSuccess<PersonResponseData>, ApiError> {
    state
        .person_service
        .create_person(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::CREATED, person.into()))
}

/// HTTP request body for creating a person (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePersonRequest {
    name: String,
    email: String,
    age: Option<i32>,
}

impl CreatePersonRequest {
    fn try_into_command(self) -> Result<CreatePersonCommand, EmailError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreatePersonCommand::new(self.name, email, self.age))
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<&Person> for PersonResponseData {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name.clone(),
            email: person.email.as_str().to_string(),
            age: person.age,
        }
    }
}
