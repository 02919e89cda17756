use serde::{Deserialize, Serialize};

pub const ADMIN_USER_ID: i64 = 1;
pub const ADMIN_ROLE: &str = "admin";

/// Body of `POST /login`.
///
/// Both fields are optional so that an empty or partial body is answered as a
/// credential mismatch rather than a deserialization failure.
#[derive(Deserialize, Default, Debug)]
pub struct SignInPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Identity carried inside every issued token and echoed by `GET /profile`.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub role: String,
}

impl Claims {
    pub fn new(user_id: i64, role: impl Into<String>) -> Self {
        Self { user_id, role: role.into() }
    }

    pub fn admin() -> Self {
        Self::new(ADMIN_USER_ID, ADMIN_ROLE)
    }
}

/// On-the-wire JWT payload: the identity plus issuance and expiry seconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub role: String,
    #[serde(default)]
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl From<TokenClaims> for Claims {
    fn from(token_claims: TokenClaims) -> Self {
        Claims {
            user_id: token_claims.user_id,
            role: token_claims.role,
        }
    }
}
