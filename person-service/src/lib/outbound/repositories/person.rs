use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::Person;
use crate::domain::person::models::PersonId;
use crate::domain::person::ports::PersonRepository;

/// In-memory implementation of PersonRepository.
#[derive(Default)]
pub struct InMemoryPersonRepository {
    store: RwLock<HashMap<Uuid, Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create(&self, person: Person) -> Result<Person, PersonError> {
        let mut store = self.store.write().await;
        store.insert(person.id.0, person.clone());
        Ok(person)
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, PersonError> {
        let store = self.store.read().await;
        Ok(store.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Person>, PersonError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, person: Person) -> Result<Person, PersonError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&person.id.0) {
            return Err(PersonError::NotFound(person.id.to_string()));
        }
        store.insert(person.id.0, person.clone());
        Ok(person)
    }

    async fn delete(&self, id: &PersonId) -> Result<(), PersonError> {
        let mut store = self.store.write().await;
        store.remove(&id.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::EmailAddress;

    fn person(name: &str, email: &str) -> Person {
        Person {
            id: PersonId::new(),
            name: name.to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            age: None,
        }
    }

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let repo = InMemoryPersonRepository::new();

        let created = repo.create(person("Alice", "alice@example.com")).await.unwrap();
        assert!(repo.find_by_id(&created.id).await.unwrap().is_some());

        repo.create(person("Bob", "bob@example.com")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 2);

        repo.delete(&created.id).await.unwrap();
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_person() {
        let repo = InMemoryPersonRepository::new();

        let result = repo.update(person("Ghost", "ghost@example.com")).await;
        assert!(matches!(result, Err(PersonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_person_is_noop() {
        let repo = InMemoryPersonRepository::new();
        assert!(repo.delete(&PersonId::new()).await.is_ok());
    }
}
