//! Trading error types.

use paperdex_core::TokenId;
use paperdex_ledger::TradeRejection;
use thiserror::Error;

/// Why an order was not placed. Every variant maps to a structured HTTP
/// error at the route boundary; none of them leaves wallet state changed.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid order side")]
    InvalidSide(String),

    #[error("Invalid order type")]
    InvalidType(String),

    #[error("Price is required for limit orders")]
    MissingLimitPrice,

    #[error("Order amount must be positive")]
    NonPositiveAmount,

    #[error("Token '{0}' not found")]
    UnknownToken(TokenId),

    #[error("Failed to get market data")]
    MarketData,

    #[error(transparent)]
    Rejected(#[from] TradeRejection),
}

pub type TradingResult<T> = Result<T, PlaceOrderError>;
