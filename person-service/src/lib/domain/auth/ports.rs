use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from validated credentials.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `HashingFailed` - Password hashing failed
    /// * `StorageError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, or inactive
    ///   account (deliberately indistinguishable)
    /// * `TokenEncodingFailed` - Token generation failed
    /// * `StorageError` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Revoke the presented token for the rest of its lifetime.
    ///
    /// # Errors
    /// * `InvalidToken` - Token undecodable or missing required claims
    /// * `StorageError` - Store operation failed
    async fn logout(&self, token: &str) -> Result<(), AuthError>;

    /// Authorize a request: validate the token, check revocation, and load
    /// the subject's user record.
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid/expired/revoked, or user vanished
    /// * `StorageError` - Store operation failed
    async fn resolve_user(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the user store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `StorageError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by email (exact match as stored).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
}

/// Revoked token denylist keyed by `jti`.
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync + 'static {
    /// Record a revocation with the token's natural expiry. Re-recording the
    /// same `jti` overwrites the stored expiry (last write wins).
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError>;

    /// True iff a record exists for `jti` and its stored expiry has not yet
    /// passed. A past-expiry record is stale and reads as not revoked.
    async fn is_revoked(&self, jti: &str) -> Result<bool, AuthError>;
}
