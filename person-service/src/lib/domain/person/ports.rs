use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::CreatePersonCommand;
use crate::domain::person::models::Person;
use crate::domain::person::models::PersonId;
use crate::domain::person::models::UpdatePersonCommand;

/// Port for person domain service operations.
#[async_trait]
pub trait PersonServicePort: Send + Sync + 'static {
    /// Create a new person.
    async fn create_person(&self, command: CreatePersonCommand) -> Result<Person, PersonError>;

    /// Retrieve a person by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Person does not exist
    async fn get_person(&self, id: &PersonId) -> Result<Person, PersonError>;

    /// Retrieve all persons.
    async fn list_persons(&self) -> Result<Vec<Person>, PersonError>;

    /// Update an existing person, replacing only the provided fields.
    ///
    /// # Errors
    /// * `NotFound` - Person does not exist
    async fn update_person(
        &self,
        id: &PersonId,
        command: UpdatePersonCommand,
    ) -> Result<Person, PersonError>;

    /// Delete a person. Deleting an unknown id is a no-op.
    async fn delete_person(&self, id: &PersonId) -> Result<(), PersonError>;
}

/// Persistence operations for the person store.
#[async_trait]
pub trait PersonRepository: Send + Sync + 'static {
    /// Persist a new person.
    async fn create(&self, person: Person) -> Result<Person, PersonError>;

    /// Retrieve a person by identifier (None if not found).
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, PersonError>;

    /// Retrieve all persons.
    async fn list_all(&self) -> Result<Vec<Person>, PersonError>;

    /// Replace an existing person.
    ///
    /// # Errors
    /// * `NotFound` - Person does not exist
    async fn update(&self, person: Person) -> Result<Person, PersonError>;

    /// Remove a person. Removing an unknown id is a no-op.
    async fn delete(&self, id: &PersonId) -> Result<(), PersonError>;
}
