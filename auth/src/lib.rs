//! Authentication building blocks
//!
//! Provides the stateless pieces of the authentication flow:
//! - Password hashing (Argon2id) with fail-closed verification
//! - JWT access token issuance with a fresh `jti` per issuance
//! - JWT validation (signature, expiry, required claims)
//!
//! Credential lookup and revocation checks live in the consuming service,
//! which wires these components to its own stores. Nothing in this crate
//! performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenIssuer, TokenValidator};
//! use chrono::Duration;
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret);
//! let validator = TokenValidator::new(secret);
//!
//! let issued = issuer.issue("alice@example.com", Duration::hours(24)).unwrap();
//! let claims = validator.decode(&issued.token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! assert_eq!(claims.jti, issued.jti);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
