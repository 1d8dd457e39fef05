use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Numeric user identifier
    pub user_id: i64,

    /// User email at issuance time
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid from now for `lifetime`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email
    /// * `issuer` - Service name placed in `iss`
    /// * `lifetime` - Time until the token expires
    pub fn for_user(
        user_id: i64,
        email: impl Into<String>,
        issuer: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + lifetime;

        Self {
            user_id,
            email: email.into(),
            iss: issuer.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user(42, "alice@example.com", "test-issuer", Duration::hours(24));

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = Claims::for_user(7, "a@x.com", "svc", Duration::minutes(5));
        let value = serde_json::to_value(&claims).expect("Failed to serialize claims");

        assert_eq!(value["user_id"], 7);
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["iss"], "svc");
        assert!(value["iat"].is_i64());
        assert!(value["exp"].is_i64());
    }
}
