use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::JwtError;

/// Access token issuer.
///
/// Builds signed, time-bounded tokens with a fresh `jti` per issuance.
/// Uses HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

/// A freshly issued token together with the bookkeeping the caller needs.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed, encoded JWT
    pub token: String,

    /// Token expiry
    pub expires_at: DateTime<Utc>,

    /// Unique token identifier embedded in the claims
    pub jti: String,
}

impl TokenIssuer {
    /// Create a new token issuer with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed access token for a subject.
    ///
    /// Generates a random UUID v4 `jti`, so two issuances are distinct even
    /// for the same subject in the same second.
    ///
    /// # Arguments
    /// * `subject` - Subject claim (user email)
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// IssuedToken with the encoded JWT, its expiry, and its `jti`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, JwtError> {
        let jti = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: jti.clone(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at,
            jti,
        })
    }
}
