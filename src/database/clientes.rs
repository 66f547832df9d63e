//! Data access for the `Clientes` table. One parameterized statement per
//! function; driver failures are logged here and re-raised unchanged.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::Cliente;
use super::StorageError;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Cliente>, StorageError> {
    sqlx::query_as::<_, Cliente>(
        r#"SELECT "idCliente", "nomeCliente", "cpfCliente", "emailCliente", "senhaCliente"
           FROM "Clientes""#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to list clients: {}", e);
        e.into()
    })
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Cliente>, StorageError> {
    sqlx::query_as::<_, Cliente>(
        r#"SELECT "idCliente", "nomeCliente", "cpfCliente", "emailCliente", "senhaCliente"
           FROM "Clientes"
           WHERE "idCliente" = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to fetch client {}: {}", id, e);
        e.into()
    })
}

/// Clients matching either identifier. Serves both the login lookup and the
/// duplicate-registration check; absent identifiers bind as NULL and match
/// nothing.
pub async fn find_by_email_or_cpf(
    pool: &PgPool,
    cpf: Option<&str>,
    email: Option<&str>,
) -> Result<Vec<Cliente>, StorageError> {
    sqlx::query_as::<_, Cliente>(
        r#"SELECT "idCliente", "nomeCliente", "cpfCliente", "emailCliente", "senhaCliente"
           FROM "Clientes"
           WHERE "cpfCliente" = $1 OR "emailCliente" = $2"#,
    )
    .bind(cpf)
    .bind(email)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to look up client by email/cpf: {}", e);
        e.into()
    })
}

pub struct NewCliente<'a> {
    pub nome: &'a str,
    pub cpf: &'a str,
    pub email: &'a str,
    pub senha_hash: &'a str,
}

/// Insert a new client and return its generated id.
pub async fn insert(pool: &PgPool, novo: NewCliente<'_>) -> Result<Uuid, StorageError> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"INSERT INTO "Clientes" ("idCliente", "nomeCliente", "cpfCliente", "emailCliente", "senhaCliente")
           VALUES ($1, $2, $3, $4, $5)"#,
    )
    .bind(id)
    .bind(novo.nome)
    .bind(novo.cpf)
    .bind(novo.email)
    .bind(novo.senha_hash)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to insert client: {}", e);
        StorageError::from(e)
    })?;

    Ok(id)
}
