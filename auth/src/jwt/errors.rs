use thiserror::Error;

/// Error type for JWT operations.
///
/// Every validation failure (malformed, bad signature, wrong algorithm,
/// expired, wrong issuer) is reported as `InvalidToken`; the message is for
/// logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
