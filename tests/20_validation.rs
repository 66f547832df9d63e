//! Input validation happens before any database access, so every case here
//! must answer 400 even with no database behind the server.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn assert_bad_request(res: reqwest::Response) -> Result<Value> {
    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "expected 400");
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true, "error envelope: {}", body);
    assert!(body.get("message").is_some(), "error envelope: {}", body);
    Ok(body)
}

#[tokio::test]
async fn register_client_with_missing_fields_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/clientes", server.base_url))
        .json(&json!({ "nomeCliente": "Maria" }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    Ok(())
}

#[tokio::test]
async fn register_client_field_constraints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/clientes", server.base_url);

    // tax id must be exactly 11 characters
    let res = client
        .post(&url)
        .json(&json!({
            "nomeCliente": "Maria",
            "cpfCliente": "123",
            "emailCliente": "maria@example.com",
            "senhaCliente": "supersecret"
        }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // email must contain @
    let res = client
        .post(&url)
        .json(&json!({
            "nomeCliente": "Maria",
            "cpfCliente": "12345678901",
            "emailCliente": "maria.example.com",
            "senhaCliente": "supersecret"
        }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // password minimum length is 8
    let res = client
        .post(&url)
        .json(&json!({
            "nomeCliente": "Maria",
            "cpfCliente": "12345678901",
            "emailCliente": "maria@example.com",
            "senhaCliente": "curta"
        }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // name must not be blank
    let res = client
        .post(&url)
        .json(&json!({
            "nomeCliente": "   ",
            "cpfCliente": "12345678901",
            "emailCliente": "maria@example.com",
            "senhaCliente": "supersecret"
        }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    Ok(())
}

#[tokio::test]
async fn create_product_requires_name_and_numeric_price() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/produtos", server.base_url);

    let res = client.post(&url).json(&json!({ "nomeProduto": "Camiseta" })).send().await?;
    assert_bad_request(res).await?;

    let res = client
        .post(&url)
        .json(&json!({ "nomeProduto": "Camiseta", "precoProduto": "not-a-number" }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    let res = client
        .post(&url)
        .json(&json!({ "nomeProduto": "Camiseta", "precoProduto": -1.0 }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    Ok(())
}

#[tokio::test]
async fn malformed_product_id_is_rejected_everywhere() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // query parameter on the list endpoint
    let res = client
        .get(format!("{}/produtos?idProduto=123", server.base_url))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // un-hyphenated UUIDs are not the 36-character canonical form
    let res = client
        .get(format!(
            "{}/produtos?idProduto=67e5504410b1426f9247bb680e5fe0c8",
            server.base_url
        ))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // path parameter on update
    let res = client
        .put(format!("{}/produtos/123", server.base_url))
        .json(&json!({ "nomeProduto": "Camiseta" }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // path parameter on delete
    let res = client
        .delete(format!("{}/produtos/123", server.base_url))
        .send()
        .await?;
    assert_bad_request(res).await?;

    Ok(())
}

#[tokio::test]
async fn login_payload_validation() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/clientes/login", server.base_url);

    // neither email nor tax id
    let res = client
        .post(&url)
        .json(&json!({ "senhaCliente": "supersecret" }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    // password missing
    let res = client
        .post(&url)
        .json(&json!({ "emailCliente": "maria@example.com" }))
        .send()
        .await?;
    assert_bad_request(res).await?;

    Ok(())
}
