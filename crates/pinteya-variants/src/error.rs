use thiserror::Error;

/// Why a cart line could not be assembled. Messages are shown to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("la cantidad debe ser al menos 1")]
    InvalidQuantity,

    #[error("producto sin stock")]
    OutOfStock,

    #[error("stock insuficiente: pediste {requested}, hay {available} disponibles")]
    InsufficientStock { requested: u32, available: u32 },
}
