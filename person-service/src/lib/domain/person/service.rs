use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::CreatePersonCommand;
use crate::domain::person::models::Person;
use crate::domain::person::models::PersonId;
use crate::domain::person::models::UpdatePersonCommand;
use crate::domain::person::ports::PersonRepository;
use crate::domain::person::ports::PersonServicePort;

/// Domain service implementation for person operations.
///
/// Thin pass-through over the repository: persons carry no business rules
/// beyond their validated value objects.
pub struct PersonService<PR>
where
    PR: PersonRepository,
{
    repository: Arc<PR>,
}

impl<PR> PersonService<PR>
where
    PR: PersonRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PersonServicePort for PersonService<PR>
where
    PR: PersonRepository,
{
    async fn create_person(&self, command: CreatePersonCommand) -> Result<Person, PersonError> {
        let person = Person {
            id: PersonId::new(),
            name: command.name,
            email: command.email,
            age: command.age,
        };

        let created = self.repository.create(person).await?;
        tracing::debug!(person_id = %created.id, "Person created");

        Ok(created)
    }

    async fn get_person(&self, id: &PersonId) -> Result<Person, PersonError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id.to_string()))
    }

    async fn list_persons(&self) -> Result<Vec<Person>, PersonError> {
        self.repository.list_all().await
    }

    async fn update_person(
        &self,
        id: &PersonId,
        command: UpdatePersonCommand,
    ) -> Result<Person, PersonError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id.to_string()))?;

        let updated = existing.with_updates(command.name, command.email, command.age);

        self.repository.update(updated).await
    }

    async fn delete_person(&self, id: &PersonId) -> Result<(), PersonError> {
        self.repository.delete(id).await?;
        tracing::debug!(person_id = %id, "Person deleted");

        Ok(())
    }
}
