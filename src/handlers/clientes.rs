use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;

use crate::auth::Claims;
use crate::database::clientes::{self, NewCliente};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id_cliente: Option<String>,
}

/// GET /clientes - single client by id or the full list.
///
/// Sits behind `require_cliente`; the verified claims arrive through request
/// extensions.
pub async fn listar(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    tracing::debug!(cliente = %claims.sub, "listing clients");

    if let Some(raw) = query.id_cliente.as_deref() {
        let id = validate::parse_uuid(raw, "client")?;
        let cliente = clientes::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ApiError::not_found("client not found"))?;
        return Ok(Json(cliente).into_response());
    }

    let todos = clientes::list_all(&state.db).await?;
    Ok(Json(todos).into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteRequest {
    pub nome_cliente: Option<String>,
    pub cpf_cliente: Option<String>,
    pub email_cliente: Option<String>,
    pub senha_cliente: Option<String>,
}

/// POST /clientes - register a new client.
pub async fn criar(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateClienteRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let nome = validate::non_empty(payload.nome_cliente.as_deref(), "nomeCliente")?;
    let cpf = validate::valid_cpf(validate::non_empty(payload.cpf_cliente.as_deref(), "cpfCliente")?)?;
    let email = validate::valid_email(validate::non_empty(payload.email_cliente.as_deref(), "emailCliente")?)?;
    let senha = validate::valid_senha(validate::non_empty(payload.senha_cliente.as_deref(), "senhaCliente")?)?;

    // The unique constraints on Clientes remain authoritative; this check
    // only answers the common case before the hashing work.
    let existing = clientes::find_by_email_or_cpf(&state.db, Some(cpf), Some(email)).await?;
    if !existing.is_empty() {
        return Err(ApiError::conflict("tax id or email already registered"));
    }

    let senha_hash = bcrypt::hash(senha, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal_server_error("failed to register client")
    })?;

    let id = clientes::insert(
        &state.db,
        NewCliente {
            nome,
            cpf,
            email,
            senha_hash: &senha_hash,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "client registered", "idCliente": id })),
    ))
}
