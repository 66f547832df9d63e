use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::CookieJar;

use crate::auth::{self, Claims, Role, TOKEN_COOKIE};
use crate::config;
use crate::error::ApiError;

/// Gate for routes that require the "cliente" role. On success the decoded
/// claims are inserted into request extensions for the handler.
pub async fn require_cliente(jar: CookieJar, mut request: Request, next: Next) -> Result<Response, ApiError> {
    let secret = &config::config().security.jwt_secret;
    let claims = authorize(&jar, &[Role::Cliente], secret)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Verify the session cookie and check the role claim against `allowed`.
///
/// Missing cookie or failed signature/expiry verification is 401; a decoded
/// token whose role is not in the allowed set is 403.
fn authorize(jar: &CookieJar, allowed: &[Role], secret: &str) -> Result<Claims, ApiError> {
    let cookie = jar
        .get(TOKEN_COOKIE)
        .ok_or_else(|| ApiError::unauthorized("invalid or expired token"))?;

    let claims = auth::decode_token(cookie.value(), secret)
        .map_err(|_| ApiError::unauthorized("invalid or expired token"))?;

    if !claims.has_role(allowed) {
        return Err(ApiError::forbidden("forbidden for this role"));
    }

    Ok(claims)
}
