use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use http::{header, HeaderMap};

use crate::{error::AuthError, types::AppState};

/// Second space-separated element of the `Authorization` header, if any.
///
/// The scheme word is not checked, so `Bearer abc` and `Token abc` both yield `abc`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

/// Verifies the bearer token and exposes its claims to the handler as an extension.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingToken)?;

    let claims = state.codec.verify(token).map_err(|err| {
        tracing::debug!(error = %err, "bearer token rejected");
        AuthError::InvalidToken
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
