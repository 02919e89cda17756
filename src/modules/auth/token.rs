//! HMAC token signing and verification. Tokens are issued as HS256; HS384
//! and HS512 tokens signed with the same secret are accepted too.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::modules::auth::types::{Claims, TokenClaims};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("failed to decode token: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
    #[error("token expired")]
    Expired,
}

/// Sign `claims` with `secret`, expiring `ttl` after now.
pub fn sign(claims: &Claims, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
    let now = Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now + ttl).timestamp() as usize;

    let token_claims = TokenClaims {
        user_id: claims.user_id,
        role: claims.role.clone(),
        iat,
        exp: Some(exp),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &token_claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenError::Encode)
}

/// Verify signature and expiry of `token` against `secret`.
///
/// A token is considered expired from the second its `exp` is reached.
/// A token without `exp` never expires.
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.required_spec_claims = HashSet::new();
    validation.leeway = 0;

    let token_claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Decode(err),
        })?
        .claims;

    if let Some(exp) = token_claims.exp {
        if exp as i64 <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
    }

    Ok(token_claims.into())
}

/// Signing secret and token lifetime shared by the login and profile routes.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        sign(claims, self.secret.as_bytes(), self.ttl)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        verify(token, self.secret.as_bytes())
    }
}
