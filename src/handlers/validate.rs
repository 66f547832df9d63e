//! Field validation shared by the request handlers. Everything here runs
//! before any database access.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ApiError;

/// Length of a canonical hyphenated UUID.
const UUID_LEN: usize = 36;

const CPF_LEN: usize = 11;

const MIN_SENHA_LEN: usize = 8;

/// Parse a path/query id, accepting only the 36-character hyphenated form.
pub fn parse_uuid(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    if raw.len() != UUID_LEN {
        return Err(ApiError::bad_request(format!("invalid {} id", what)));
    }
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("invalid {} id", what)))
}

/// Require a present, non-blank string field.
pub fn non_empty<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("{} is required", field))),
    }
}

pub fn valid_cpf(cpf: &str) -> Result<&str, ApiError> {
    if cpf.len() != CPF_LEN {
        return Err(ApiError::bad_request("cpfCliente must be exactly 11 characters"));
    }
    Ok(cpf)
}

pub fn valid_email(email: &str) -> Result<&str, ApiError> {
    if !email.contains('@') {
        return Err(ApiError::bad_request("emailCliente is not a valid email"));
    }
    Ok(email)
}

pub fn valid_senha(senha: &str) -> Result<&str, ApiError> {
    if senha.len() < MIN_SENHA_LEN {
        return Err(ApiError::bad_request("senhaCliente must be at least 8 characters"));
    }
    Ok(senha)
}

/// Non-negative price, normalized to the column's 2-decimal scale.
pub fn valid_preco(preco: Decimal) -> Result<Decimal, ApiError> {
    if preco.is_sign_negative() {
        return Err(ApiError::bad_request("precoProduto must not be negative"));
    }
    Ok(preco.round_dp(2))
}
