//! Data access for the `Produtos` table.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::Produto;
use super::StorageError;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Produto>, StorageError> {
    sqlx::query_as::<_, Produto>(
        r#"SELECT "idProduto", "nomeProduto", "precoProduto" FROM "Produtos""#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to list products: {}", e);
        e.into()
    })
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Produto>, StorageError> {
    sqlx::query_as::<_, Produto>(
        r#"SELECT "idProduto", "nomeProduto", "precoProduto"
           FROM "Produtos"
           WHERE "idProduto" = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to fetch product {}: {}", id, e);
        e.into()
    })
}

/// Insert a new product and return its generated id.
pub async fn insert(pool: &PgPool, nome: &str, preco: Decimal) -> Result<Uuid, StorageError> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"INSERT INTO "Produtos" ("idProduto", "nomeProduto", "precoProduto")
           VALUES ($1, $2, $3)"#,
    )
    .bind(id)
    .bind(nome)
    .bind(preco)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to insert product: {}", e);
        StorageError::from(e)
    })?;

    Ok(id)
}

/// Write back the full record; callers overlay omitted fields beforehand.
pub async fn update(pool: &PgPool, id: Uuid, nome: &str, preco: Decimal) -> Result<(), StorageError> {
    sqlx::query(
        r#"UPDATE "Produtos"
           SET "nomeProduto" = $2, "precoProduto" = $3
           WHERE "idProduto" = $1"#,
    )
    .bind(id)
    .bind(nome)
    .bind(preco)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to update product {}: {}", id, e);
        StorageError::from(e)
    })?;

    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), StorageError> {
    sqlx::query(r#"DELETE FROM "Produtos" WHERE "idProduto" = $1"#)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to delete product {}: {}", id, e);
            StorageError::from(e)
        })?;

    Ok(())
}
