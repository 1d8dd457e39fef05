//! Authentication utilities library
//!
//! Provides the credential and token primitives of the auth service:
//! - Password hashing (Argon2id, configurable work factor)
//! - JWT token issuance and validation (HMAC)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! assert!(hasher.verify("other_password", &hash).is_err());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, TokenSettings};
//!
//! let handler = JwtHandler::new(TokenSettings::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "my-service",
//! ));
//! let token = handler.issue(42, "alice@example.com").unwrap();
//! let claims = handler.validate(&token).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, JwtHandler, PasswordHasher, TokenSettings};
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::new(),
//!     JwtHandler::new(TokenSettings::new("secret_key_at_least_32_bytes_long!", "my-service")),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 42, "alice@example.com").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenSettings;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
