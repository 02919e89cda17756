use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use http::{header, HeaderMap};

use crate::error::AuthError;
use crate::modules::auth::types::*;
use crate::types::AppState;

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Reads the login body the way a lenient JSON body parser would: no JSON
/// content type, an empty body, or a body of the wrong shape all read as `{}`.
fn parse_sign_in(headers: &HeaderMap, body: &Bytes) -> Result<SignInPayload, AuthError> {
    if !is_json_content_type(headers) {
        tracing::debug!("login body is not JSON, treating as empty");
        return Ok(SignInPayload::default());
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SignInPayload::default());
    }

    match Json::<SignInPayload>::from_bytes(body) {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::JsonSyntaxError(err)) => {
            tracing::debug!(error = %err, "login body is not valid JSON");
            Err(AuthError::MalformedBody)
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "login body rejected, treating as empty");
            Ok(SignInPayload::default())
        }
    }
}

pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TokenResponse>, AuthError> {
    let body = parse_sign_in(&headers, &body)?;

    let authenticated = match (body.username.as_deref(), body.password.as_deref()) {
        (Some(username), Some(password)) => state.credentials.verify(username, password),
        _ => false,
    };

    if !authenticated {
        tracing::info!("login rejected");
        return Err(AuthError::InvalidCredentials);
    }

    let claims = Claims::admin();
    let token = state.codec.sign(&claims).map_err(|err| {
        tracing::error!(error = %err, "could not sign token");
        AuthError::TokenCreation
    })?;

    tracing::info!(
        user_id = claims.user_id,
        role = %claims.role,
        ttl_seconds = state.codec.ttl().num_seconds(),
        "token issued"
    );
    Ok(Json(TokenResponse { token }))
}

pub async fn profile(Extension(claims): Extension<Claims>) -> Json<Claims> {
    Json(claims)
}
