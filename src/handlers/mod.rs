pub mod auth;
pub mod clientes;
pub mod produtos;
pub mod validate;
