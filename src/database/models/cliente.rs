use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered store client.
///
/// The password hash never leaves the server: it is skipped during
/// serialization, so no handler can leak it by returning the record.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Cliente {
    pub id_cliente: Uuid,
    pub nome_cliente: String,
    pub cpf_cliente: String,
    pub email_cliente: String,
    #[serde(skip_serializing)]
    pub senha_cliente: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let cliente = Cliente {
            id_cliente: Uuid::new_v4(),
            nome_cliente: "Maria".to_string(),
            cpf_cliente: "12345678901".to_string(),
            email_cliente: "maria@example.com".to_string(),
            senha_cliente: "$2b$12$hash".to_string(),
        };

        let value = serde_json::to_value(&cliente).unwrap();
        assert!(value.get("senhaCliente").is_none());
        assert_eq!(value["nomeCliente"], "Maria");
        assert_eq!(value["cpfCliente"], "12345678901");
    }
}
