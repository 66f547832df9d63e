pub mod cliente;
pub mod produto;

pub use cliente::Cliente;
pub use produto::Produto;
