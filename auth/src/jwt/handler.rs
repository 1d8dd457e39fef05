use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// Immutable token configuration fixed at startup.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: Vec<u8>,
    pub issuer: String,
    pub lifetime: Duration,
}

impl TokenSettings {
    /// Settings with the default 24 hour token lifetime.
    pub fn new(secret: impl Into<Vec<u8>>, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            lifetime: Duration::hours(24),
        }
    }

    /// Override the token lifetime.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }
}

/// JWT token handler for issuing and validating access tokens.
///
/// Signs with HS256. Validation accepts only the HMAC family, so tokens using
/// `none` or an asymmetric algorithm are rejected before the signature is
/// even considered.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    issuer: String,
    lifetime: Duration,
    missing_secret: bool,
}

impl JwtHandler {
    /// Create a new JWT handler from token settings.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(settings: TokenSettings) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            decoding_key: DecodingKey::from_secret(&settings.secret),
            algorithm,
            validation,
            issuer: settings.issuer,
            lifetime: settings.lifetime,
            missing_secret: settings.secret.is_empty(),
        }
    }

    /// Issue a signed access token for a user.
    ///
    /// # Arguments
    /// * `user_id` - User identifier placed in the claims
    /// * `email` - User email placed in the claims
    ///
    /// # Returns
    /// JWT token string valid for the configured lifetime
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing key is missing or signing failed
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, self.issuer.as_str(), self.lifetime);
        self.encode(&claims)
    }

    /// Encode arbitrary claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing key is missing or signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        if self.missing_secret {
            return Err(JwtError::EncodingFailed("signing key is empty".to_string()));
        }

        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a JWT and return its claims.
    ///
    /// # Arguments
    /// * `token` - JWT token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, bad signature, unexpected algorithm,
    ///   wrong issuer or expired
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| JwtError::InvalidToken(format!("{:?}", e.kind())))
    }
}
