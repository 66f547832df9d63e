use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A product in the catalog. Prices are `NUMERIC(10,2)` in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Produto {
    pub id_produto: Uuid,
    pub nome_produto: String,
    pub preco_produto: Decimal,
}
