use std::time::Duration;

use axum::http::{header, HeaderMap};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token inválido o faltante")]
    MissingOrMalformedCredential,
    #[error("Token inválido")]
    InvalidCredential,
    #[error("Token expirado")]
    ExpiredCredential,
}

/// Extracts the caller's `user_id` claim from a `Bearer` authorization
/// header. The claim itself may be absent; absence is not a failure.
pub fn authenticate_bearer(headers: &HeaderMap, keys: &JwtKeys) -> Result<Option<i64>, AuthError> {
    let Some(header_value) = headers.get(header::AUTHORIZATION) else {
        return Err(AuthError::MissingOrMalformedCredential);
    };
    let header_str = header_value
        .to_str()
        .map_err(|_| AuthError::MissingOrMalformedCredential)?;
    let token = header_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingOrMalformedCredential)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    match decode::<Claims>(token, &keys.decoding, &validation) {
        Ok(data) => Ok(data.claims.user_id),
        Err(err) if matches!(err.kind(), ErrorKind::ExpiredSignature) => {
            Err(AuthError::ExpiredCredential)
        }
        Err(err) => {
            warn!(error = ?err, "failed to decode jwt");
            Err(AuthError::InvalidCredential)
        }
    }
}

pub fn issue_token(
    keys: &JwtKeys,
    user_id: i64,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = chrono::Utc::now()
        + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(24));
    let claims = Claims {
        user_id: Some(user_id),
        exp: expiration.timestamp() as usize,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    #[test]
    fn round_trips_user_id_claim() {
        let keys = JwtKeys::new("test-secret");
        let token = issue_token(&keys, 42, Duration::from_secs(3_600)).unwrap();

        let user_id = authenticate_bearer(&bearer_headers(&token), &keys).unwrap();

        assert_eq!(user_id, Some(42));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let keys = JwtKeys::new("test-secret");
        let other = JwtKeys::new("other-secret");
        let token = issue_token(&other, 42, Duration::from_secs(3_600)).unwrap();

        let error = authenticate_bearer(&bearer_headers(&token), &keys).unwrap_err();

        assert_eq!(error, AuthError::InvalidCredential);
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::new("test-secret");
        let claims = Claims {
            user_id: Some(42),
            exp: (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).unwrap();

        let error = authenticate_bearer(&bearer_headers(&token), &keys).unwrap_err();

        assert_eq!(error, AuthError::ExpiredCredential);
    }

    #[test]
    fn rejects_header_without_bearer_prefix() {
        let keys = JwtKeys::new("test-secret");
        let token = issue_token(&keys, 42, Duration::from_secs(3_600)).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, token.parse().unwrap());

        let error = authenticate_bearer(&headers, &keys).unwrap_err();

        assert_eq!(error, AuthError::MissingOrMalformedCredential);
    }

    #[test]
    fn rejects_missing_header() {
        let keys = JwtKeys::new("test-secret");

        let error = authenticate_bearer(&HeaderMap::new(), &keys).unwrap_err();

        assert_eq!(error, AuthError::MissingOrMalformedCredential);
    }

    #[test]
    fn accepts_token_without_user_id_claim() {
        let keys = JwtKeys::new("test-secret");
        let claims = serde_json::json!({
            "exp": (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp()
        });
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).unwrap();

        let user_id = authenticate_bearer(&bearer_headers(&token), &keys).unwrap();

        assert_eq!(user_id, None);
    }
}
