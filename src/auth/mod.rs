use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;
use crate::database::ProfileId;

pub mod password;

pub use password::hash_password;

/// Claims carried by a profile token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Owning profile id
    pub sub: ProfileId,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims valid from now for `expiry_hours`. Lifetimes that do not fit
    /// a timestamp are rejected instead of wrapping.
    pub fn new(profile_id: ProfileId, email: impl Into<String>, expiry_hours: u64) -> Result<Self, AuthError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(AuthError::InvalidLifetime(expiry_hours))?;

        Ok(Self {
            sub: profile_id,
            email: email.into(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,

    #[error("Invalid token header. {0}")]
    MalformedHeader(&'static str),

    #[error("Invalid token.")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token has expired.")]
    Expired,

    #[error("Invalid token.")]
    UnknownProfile,

    #[error("Token secret is not configured")]
    InvalidSecret,

    #[error("Token lifetime of {0} hours is out of range")]
    InvalidLifetime(u64),

    #[error("Token generation failed: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    PasswordTask(String),
}

/// Signs a token for the given profile with the configured secret and lifetime.
pub fn issue_token(
    security: &SecurityConfig,
    profile_id: ProfileId,
    email: &str,
) -> Result<String, AuthError> {
    let claims = Claims::new(profile_id, email, security.jwt_expiry_hours)?;
    encode_claims(security, &claims)
}

pub fn encode_claims(security: &SecurityConfig, claims: &Claims) -> Result<String, AuthError> {
    if security.jwt_secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(AuthError::TokenGeneration)
}

/// Verifies signature and expiry and returns the claims.
pub fn decode_token(security: &SecurityConfig, token: &str) -> Result<Claims, AuthError> {
    if security.jwt_secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::InvalidToken(e),
        })
}

/// Pulls the token out of an `Authorization` header value.
/// Both `Bearer <token>` and `Token <token>` are accepted.
pub fn token_from_header(value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader("No credentials provided."))?;

    if !scheme.eq_ignore_ascii_case("bearer") && !scheme.eq_ignore_ascii_case("token") {
        return Err(AuthError::MalformedHeader("Unsupported authorization scheme."));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader("No credentials provided."));
    }
    if token.contains(' ') {
        return Err(AuthError::MalformedHeader("Token string should not contain spaces."));
    }
    Ok(token)
}
