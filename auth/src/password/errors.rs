use thiserror::Error;

/// Error type for password operations.
///
/// `Mismatch` covers both a wrong password and an unparseable stored hash so
/// callers cannot tell the two apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password does not match")]
    Mismatch,
}
