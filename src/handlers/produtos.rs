use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::database::produtos;
use crate::error::ApiError;
use crate::handlers::validate;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id_produto: Option<String>,
}

/// GET /produtos - single product by id or the full list.
pub async fn listar(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    if let Some(raw) = query.id_produto.as_deref() {
        let id = validate::parse_uuid(raw, "product")?;
        let produto = produtos::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ApiError::not_found("product not found"))?;
        return Ok(Json(produto).into_response());
    }

    let todos = produtos::list_all(&state.db).await?;
    Ok(Json(todos).into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProdutoRequest {
    pub nome_produto: Option<String>,
    pub preco_produto: Option<Decimal>,
}

/// POST /produtos - add a product to the catalog.
pub async fn criar(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProdutoRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let nome = validate::non_empty(payload.nome_produto.as_deref(), "nomeProduto")?;
    let preco = payload
        .preco_produto
        .ok_or_else(|| ApiError::bad_request("precoProduto is required"))?;
    let preco = validate::valid_preco(preco)?;

    let id = produtos::insert(&state.db, nome, preco).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "product created", "idProduto": id })),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProdutoRequest {
    pub nome_produto: Option<String>,
    pub preco_produto: Option<Decimal>,
}

/// PUT /produtos/:id - full or partial update.
///
/// Fields omitted from the body keep their stored values: the current record
/// is fetched, supplied fields are overlaid, and the full record is written
/// back.
pub async fn atualizar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateProdutoRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::parse_uuid(&id, "product")?;

    if let Some(nome) = payload.nome_produto.as_deref() {
        validate::non_empty(Some(nome), "nomeProduto")?;
    }
    let preco_novo = payload.preco_produto.map(validate::valid_preco).transpose()?;

    let atual = produtos::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("product not found"))?;

    let nome = payload.nome_produto.unwrap_or(atual.nome_produto);
    let preco = preco_novo.unwrap_or(atual.preco_produto);

    produtos::update(&state.db, id, &nome, preco).await?;

    Ok(Json(json!({ "message": "product updated" })))
}

/// DELETE /produtos/:id - physically remove a product.
pub async fn deletar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate::parse_uuid(&id, "product")?;

    produtos::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("product not found"))?;

    produtos::delete(&state.db, id).await?;

    Ok(Json(json!({ "message": "product deleted" })))
}
