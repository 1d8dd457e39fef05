use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::CredentialsError;

/// User aggregate entity.
///
/// Represents a registered user. `password_hash` never leaves the service
/// through any outward representation.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier, assigned by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Only non-emptiness is enforced; no format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Errors
    /// * `EmptyEmail` - Email is the empty string
    pub fn new(email: String) -> Result<Self, CredentialsError> {
        if email.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }
        Ok(Self(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password held only for the duration of a request.
///
/// `Debug` output is redacted so the value cannot end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new password.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is the empty string
    pub fn new(password: String) -> Result<Self, CredentialsError> {
        if password.is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }
        Ok(Self(password))
    }

    /// Expose the plaintext for hashing or verification.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Validated email and password pair
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Password,
}

impl Credentials {
    /// Validate raw email and password.
    ///
    /// # Errors
    /// * `EmptyEmail` - Email is empty
    /// * `EmptyPassword` - Password is empty
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Command to register a new user from raw, unvalidated input
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Command to log a user in from raw, unvalidated input
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Token and identity returned by a successful register or login
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty_fields() {
        assert_eq!(
            Credentials::new(String::new(), "pw".to_string()).unwrap_err(),
            CredentialsError::EmptyEmail
        );
        assert_eq!(
            Credentials::new("a@x.com".to_string(), String::new()).unwrap_err(),
            CredentialsError::EmptyPassword
        );
    }

    #[test]
    fn test_email_has_no_format_check() {
        let email = EmailAddress::new("not-an-email".to_string()).unwrap();
        assert_eq!(email.as_str(), "not-an-email");
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter2".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("hunter2"));

        let command = LoginCommand::new("a@x.com".to_string(), "hunter2".to_string());
        let rendered = format!("{:?}", command);
        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
