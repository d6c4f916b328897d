//! Error types for paperdex-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid time frame: {0}")]
    InvalidTimeFrame(String),

    #[error("Invalid order side: {0}")]
    InvalidOrderSide(String),

    #[error("Invalid order type: {0}")]
    InvalidOrderType(String),

    #[error("Invalid order status: {0}")]
    InvalidOrderStatus(String),

    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    #[error("Invalid transaction status: {0}")]
    InvalidTransactionStatus(String),

    #[error("Decimal parse error: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
