use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{self, Claims, Role};
use crate::config;
use crate::database::clientes;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_cliente: Option<String>,
    pub cpf_cliente: Option<String>,
    pub senha_cliente: Option<String>,
}

/// POST /clientes/login - verify credentials and issue the session cookie.
///
/// The token is returned in the body as well as set as the `token` cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(payload), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    if (payload.email_cliente.is_none() && payload.cpf_cliente.is_none()) || payload.senha_cliente.is_none() {
        return Err(ApiError::bad_request("email or tax id and password are required"));
    }
    let senha = payload.senha_cliente.as_deref().unwrap_or_default();

    let matches = clientes::find_by_email_or_cpf(
        &state.db,
        payload.cpf_cliente.as_deref(),
        payload.email_cliente.as_deref(),
    )
    .await?;

    // Empty result means the identifier is unknown: 401, same as a wrong
    // password, so the response does not reveal which part failed.
    let cliente = matches
        .first()
        .ok_or_else(|| ApiError::unauthorized("credentials not found"))?;

    let senha_valida = bcrypt::verify(senha, &cliente.senha_cliente).map_err(|e| {
        tracing::error!("password verification failed: {}", e);
        ApiError::internal_server_error("failed to log in")
    })?;

    if !senha_valida {
        return Err(ApiError::unauthorized("invalid password"));
    }

    let security = &config::config().security;
    let claims = Claims::new(
        cliente.id_cliente,
        cliente.nome_cliente.clone(),
        Role::Cliente,
        security.token_ttl_secs,
    );

    let token = auth::encode_token(&claims, &security.jwt_secret).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("failed to log in")
    })?;

    let jar = jar.add(auth::session_cookie(token.clone(), security.token_ttl_secs));

    Ok((
        StatusCode::OK,
        jar,
        Json(json!({ "message": "login successful", "token": token })),
    ))
}
