use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Name of the cookie that transports the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Roles a token can carry. The gate in `middleware::auth` checks membership
/// against a slice of allowed roles, so new roles only need a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Cliente,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Cliente => "cliente",
        }
    }
}

/// Signed claim set carried by the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Client identifier.
    pub sub: Uuid,
    /// Client display name.
    pub nome: String,
    /// Role marker. Kept as a plain string so tokens with an absent or
    /// unknown role still decode and are rejected by the gate with a 403.
    #[serde(default)]
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(id_cliente: Uuid, nome: String, role: Role, ttl_secs: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: id_cliente,
            nome,
            role: role.as_str().to_string(),
            exp: now + ttl_secs as i64,
            iat: now,
        }
    }

    /// Set-membership role check used by the authorization gate.
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        allowed.iter().any(|role| self.role == role.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    Ok(encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))?)
}

/// Verify signature and expiry, returning the decoded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Build the session cookie. Max-age mirrors the token TTL.
pub fn session_cookie(token: String, ttl_secs: u64) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(ttl_secs as i64))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn claims() -> Claims {
        Claims::new(Uuid::new_v4(), "Maria".to_string(), Role::Cliente, 3600)
    }

    #[test]
    fn token_round_trip_preserves_role_claim() {
        let claims = claims();
        let token = encode_token(&claims, SECRET).unwrap();
        let decoded = decode_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.nome, "Maria");
        assert_eq!(decoded.role, "cliente");
    }

    #[test]
    fn tampered_secret_is_rejected() {
        let token = encode_token(&claims(), SECRET).unwrap();
        assert!(decode_token(&token, "some-other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = claims();
        // Past the default validation leeway
        claims.exp = claims.iat - 3600;
        let token = encode_token(&claims, SECRET).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn empty_secret_is_an_error() {
        assert!(matches!(encode_token(&claims(), ""), Err(AuthError::MissingSecret)));
        assert!(matches!(decode_token("x.y.z", ""), Err(AuthError::MissingSecret)));
    }

    #[test]
    fn role_membership() {
        let claims = claims();
        assert!(claims.has_role(&[Role::Cliente]));

        let mut other = claims.clone();
        other.role = "admin".to_string();
        assert!(!other.has_role(&[Role::Cliente]));

        let mut absent = claims;
        absent.role = String::new();
        assert!(!absent.has_role(&[Role::Cliente]));
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), 3600);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
        assert_eq!(cookie.path(), Some("/"));
    }
}
