use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::RevokedTokenRepository;
use crate::domain::auth::ports::UserRepository;

/// In-memory implementation of UserRepository.
///
/// Keyed by user id; email lookups scan the map. Suitable for a single
/// process, which is the deployment shape of this service.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut store = self.store.write().await;

        if store.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyRegistered(user.email.to_string()));
        }

        store.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let store = self.store.read().await;
        Ok(store.get(&id.0).cloned())
    }
}

/// In-memory revoked token denylist.
///
/// Records `jti -> expires_at`; stale records (past their stored expiry) read
/// as not revoked and may linger harmlessly, since the token itself already
/// fails expiry validation by then.
#[derive(Default)]
pub struct InMemoryRevokedTokenRepository {
    tokens: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRevokedTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevokedTokenRepository for InMemoryRevokedTokenRepository {
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError> {
        let mut tokens = self.tokens.write().await;
        // Last write wins for a repeated jti
        tokens.insert(jti.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, AuthError> {
        let tokens = self.tokens.read().await;
        Ok(match tokens.get(jti) {
            Some(expires_at) => Utc::now() < *expires_at,
            None => false,
        })
    }
}
