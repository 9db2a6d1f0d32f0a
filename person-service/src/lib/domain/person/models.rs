use std::fmt;

use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::person::errors::PersonIdError;

/// Person entity.
///
/// Plain value record; updates build a new value instead of mutating in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: EmailAddress,
    pub age: Option<i32>,
}

impl Person {
    /// Build an updated copy, replacing only the provided fields.
    pub fn with_updates(
        &self,
        name: Option<String>,
        email: Option<EmailAddress>,
        age: Option<i32>,
    ) -> Self {
        Self {
            id: self.id,
            name: name.unwrap_or_else(|| self.name.clone()),
            email: email.unwrap_or_else(|| self.email.clone()),
            age: age.or(self.age),
        }
    }
}

/// Person unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub Uuid);

impl PersonId {
    /// Generate a new random person ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a person ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PersonIdError> {
        Uuid::parse_str(s)
            .map(PersonId)
            .map_err(|e| PersonIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new person with validated fields
#[derive(Debug)]
pub struct CreatePersonCommand {
    pub name: String,
    pub email: EmailAddress,
    pub age: Option<i32>,
}

impl CreatePersonCommand {
    pub fn new(name: String, email: EmailAddress, age: Option<i32>) -> Self {
        Self { name, email, age }
    }
}

/// Command to update an existing person.
///
/// All fields are optional to support partial updates; absent fields keep
/// their current value.
#[derive(Debug)]
pub struct UpdatePersonCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub age: Option<i32>,
}
