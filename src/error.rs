use crate::domain::client::ClientId;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("client {0} not found")]
    ClientNotFound(ClientId),
    #[error("insufficient balance: {required} required, {available} available")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },
    #[error("invalid product category: {0}")]
    InvalidCategory(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    Storage(#[from] rocksdb::Error),
}
