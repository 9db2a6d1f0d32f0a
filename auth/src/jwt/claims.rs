use serde::Deserialize;
use serde::Serialize;

/// Access token claim set.
///
/// All fields are required: a token missing any of them fails
/// deserialization and therefore fails validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the user's email address)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier, used as the revocation key
    pub jti: String,
}
