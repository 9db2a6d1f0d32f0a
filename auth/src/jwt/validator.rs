use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Access token validator.
///
/// Verifies signature and expiry, and requires the full claim set to be
/// present. Pure function of token, secret, and current time.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenValidator {
    /// Create a new token validator with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key the tokens were signed with
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Decode and validate a token.
    ///
    /// Checks the HS256 signature and the `exp` claim with zero leeway: a
    /// token is rejected the moment its expiry passes. A token missing any
    /// of `sub`, `iat`, `exp`, or `jti` fails claim deserialization and is
    /// rejected the same way as a malformed token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `DecodingFailed` - Bad signature, malformed token, or missing claims
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // No expiry leeway: a revocation record is only held until the
        // token's exp, so accepting a just-expired token would let a
        // logged-out token back in.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
