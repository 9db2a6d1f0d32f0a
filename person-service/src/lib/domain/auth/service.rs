use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::RevokedTokenRepository;
use crate::domain::auth::ports::UserRepository;

/// Authentication domain service.
///
/// Coordinates the stateless auth components (hasher, token issuer, token
/// validator) with the user store and the revocation store.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RevokedTokenRepository,
{
    users: Arc<UR>,
    revoked_tokens: Arc<RR>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
    token_ttl: Duration,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RevokedTokenRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User store implementation
    /// * `revoked_tokens` - Revocation store implementation
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(users: Arc<UR>, revoked_tokens: Arc<RR>, jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            users,
            revoked_tokens,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret),
            token_validator: TokenValidator::new(jwt_secret),
            token_ttl,
        }
    }

    /// Authenticate a login attempt.
    ///
    /// Short-circuits on the first failure and reports all of them the same
    /// way: unknown email, wrong password, and inactive account all come back
    /// as `None`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Ok(None);
        }

        if !user.is_active {
            return Ok(None);
        }

        Ok(Some(user))
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RevokedTokenRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        if let Some(existing) = self.users.find_by_email(command.email.as_str()).await? {
            return Err(AuthError::EmailAlreadyRegistered(existing.email.to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            is_active: true,
        };

        let created = self.users.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let issued = self
            .token_issuer
            .issue(user.email.as_str(), self.token_ttl)
            .map_err(|e| AuthError::TokenEncodingFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, jti = %issued.jti, "Access token issued");

        Ok(AccessToken {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let claims = self
            .token_validator
            .decode(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("Expiry out of range".to_string()))?;

        self.revoked_tokens.add(&claims.jti, expires_at).await?;
        tracing::info!(jti = %claims.jti, "Token revoked");

        Ok(())
    }

    async fn resolve_user(&self, token: &str) -> Result<User, AuthError> {
        // Decode first: a malformed token never reaches the revocation store
        let claims = self
            .token_validator
            .decode(token)
            .map_err(|_| AuthError::Unauthorized)?;

        if self.revoked_tokens.is_revoked(&claims.jti).await? {
            return Err(AuthError::Unauthorized);
        }

        self.users
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::auth::models::Password;
    use crate::domain::email::EmailAddress;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, AuthError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
        }
    }

    mock! {
        pub TestRevokedTokenRepository {}

        #[async_trait]
        impl RevokedTokenRepository for TestRevokedTokenRepository {
            async fn add(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), AuthError>;
            async fn is_revoked(&self, jti: &str) -> Result<bool, AuthError>;
        }
    }

    fn service(
        users: MockTestUserRepository,
        revoked: MockTestRevokedTokenRepository,
    ) -> AuthService<MockTestUserRepository, MockTestRevokedTokenRepository> {
        AuthService::new(Arc::new(users), Arc::new(revoked), SECRET, Duration::hours(24))
    }

    fn stored_user(email: &str, password: &str, is_active: bool) -> User {
        let hash = PasswordHasher::new().hash(password).unwrap();
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: hash,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .with(eq("alice@example.com"))
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "alice@example.com"
                    && user.is_active
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = service(users, revoked);

        let command = RegisterUserCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("secret123".to_string()).unwrap(),
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
        // Plaintext never stored
        assert_ne!(user.password_hash, "secret123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", true))));
        users.expect_create().times(0);

        let service = service(users, revoked);

        let command = RegisterUserCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("secret123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered(_))));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(users, revoked);

        let result = service.authenticate("ghost@example.com", "whatever").await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", true))));

        let service = service(users, revoked);

        let result = service.authenticate("alice@example.com", "wrong").await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_inactive_account() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", false))));

        let service = service(users, revoked);

        // Correct password, but the account is deactivated
        let result = service.authenticate("alice@example.com", "secret123").await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", true))));

        let service = service(users, revoked);

        let user = service
            .authenticate("alice@example.com", "secret123")
            .await
            .unwrap()
            .expect("Expected authenticated user");
        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_issues_decodable_token() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", true))));

        let service = service(users, revoked);

        let access = service.login("alice@example.com", "secret123").await.unwrap();
        assert!(access.expires_at > Utc::now());

        let claims = TokenValidator::new(SECRET).decode(&access.token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp, access.expires_at.timestamp());
        assert!(!claims.jti.is_empty());
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let mut users = MockTestUserRepository::new();
        let revoked = MockTestRevokedTokenRepository::new();

        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(users, revoked);

        let result = service.login("ghost@example.com", "whatever").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_logout_records_jti_with_token_expiry() {
        let users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        let issued = TokenIssuer::new(SECRET)
            .issue("alice@example.com", Duration::hours(24))
            .unwrap();

        let expected_jti = issued.jti.clone();
        let expected_exp = issued.expires_at.timestamp();
        revoked
            .expect_add()
            .withf(move |jti, expires_at| {
                jti == expected_jti && expires_at.timestamp() == expected_exp
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(users, revoked);

        service.logout(&issued.token).await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_undecodable_token() {
        let users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        // Nothing reaches the revocation store
        revoked.expect_add().times(0);

        let service = service(users, revoked);

        let result = service.logout("invalid.token.here").await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn test_resolve_user_success() {
        let mut users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        let issued = TokenIssuer::new(SECRET)
            .issue("alice@example.com", Duration::hours(24))
            .unwrap();

        let expected_jti = issued.jti.clone();
        revoked
            .expect_is_revoked()
            .withf(move |jti| jti == expected_jti)
            .times(1)
            .returning(|_| Ok(false));
        users
            .expect_find_by_email()
            .with(eq("alice@example.com"))
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice@example.com", "secret123", true))));

        let service = service(users, revoked);

        let user = service.resolve_user(&issued.token).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_resolve_user_revoked_token() {
        let mut users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        revoked
            .expect_is_revoked()
            .times(1)
            .returning(|_| Ok(true));
        // Revoked tokens never reach the user store
        users.expect_find_by_email().times(0);

        let issued = TokenIssuer::new(SECRET)
            .issue("alice@example.com", Duration::hours(24))
            .unwrap();

        let service = service(users, revoked);

        let result = service.resolve_user(&issued.token).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_resolve_user_vanished_subject() {
        let mut users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        revoked
            .expect_is_revoked()
            .times(1)
            .returning(|_| Ok(false));
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let issued = TokenIssuer::new(SECRET)
            .issue("alice@example.com", Duration::hours(24))
            .unwrap();

        let service = service(users, revoked);

        let result = service.resolve_user(&issued.token).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_resolve_user_malformed_token_skips_stores() {
        let mut users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        // Cheap rejection: neither store is consulted
        revoked.expect_is_revoked().times(0);
        users.expect_find_by_email().times(0);

        let service = service(users, revoked);

        let result = service.resolve_user("invalid.token.here").await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_resolve_user_expired_token() {
        let mut users = MockTestUserRepository::new();
        let mut revoked = MockTestRevokedTokenRepository::new();

        revoked.expect_is_revoked().times(0);
        users.expect_find_by_email().times(0);

        let issued = TokenIssuer::new(SECRET)
            .issue("alice@example.com", Duration::minutes(-5))
            .unwrap();

        let service = service(users, revoked);

        let result = service.resolve_user(&issued.token).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }
}
