use std::fmt;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Why the gate turned a request away. Only ever logged; every variant
/// produces the same 401 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    MissingCredentials,
    MalformedHeader,
    InvalidToken(auth::JwtError),
}

impl fmt::Display for AuthRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthRejection::MissingCredentials => f.write_str("missing Authorization header"),
            AuthRejection::MalformedHeader => f.write_str("malformed Authorization header"),
            AuthRejection::InvalidToken(e) => write!(f, "invalid or expired token: {}", e),
        }
    }
}

impl From<AuthRejection> for ApiError {
    fn from(rejection: AuthRejection) -> Self {
        tracing::warn!(reason = %rejection, "Request rejected by auth gate");
        ApiError::unauthorized()
    }
}

/// Middleware that validates bearer tokens and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = extract_bearer_token(req.headers())?;

        state
            .authenticator
            .validate_token(token)
            .map_err(AuthRejection::InvalidToken)?
    };

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The value must split on single spaces into exactly two parts, the first
/// being the literal `Bearer`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthRejection::MissingCredentials)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthRejection::MalformedHeader)?;

    if auth_str.is_empty() {
        return Err(AuthRejection::MissingCredentials);
    }

    let parts: Vec<&str> = auth_str.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] => Ok(*token),
        _ => Err(AuthRejection::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            Err(AuthRejection::MissingCredentials)
        );
        assert_eq!(
            extract_bearer_token(&headers("")),
            Err(AuthRejection::MissingCredentials)
        );
    }

    #[test]
    fn test_malformed_header() {
        for value in ["Basic abc", "Bearer", "bearer abc", "Bearer a b", "Bearer  abc", "abc"] {
            assert_eq!(
                extract_bearer_token(&headers(value)),
                Err(AuthRejection::MalformedHeader),
                "accepted {:?}",
                value
            );
        }
    }

    #[test]
    fn test_rejections_map_to_same_response() {
        let missing = ApiError::from(AuthRejection::MissingCredentials);
        let malformed = ApiError::from(AuthRejection::MalformedHeader);
        let invalid = ApiError::from(AuthRejection::InvalidToken(auth::JwtError::InvalidToken(
            "ExpiredSignature".to_string(),
        )));

        assert_eq!(missing, malformed);
        assert_eq!(malformed, invalid);
    }
}
