//! Core domain types for the paperdex paper-trading platform.
//!
//! This crate provides fundamental types used throughout the system:
//! - `UserId`, `TokenId`, `OrderId`, `TransactionId`: string-backed identifiers
//! - `Order`, `Transaction`: trade records with their status enums
//! - `Token`, `TokenMarketData`, `Candle`: catalog and market-data types
//! - `PaginationParams`, `Paginated`: shared pagination envelope

pub mod error;
pub mod ids;
pub mod order;
pub mod pagination;
pub mod price;
pub mod token;
pub mod transaction;

pub use error::{CoreError, Result};
pub use ids::{OrderId, TokenId, TraderId, TransactionId, UserId};
pub use order::{Order, OrderSide, OrderStatus, OrderType};
pub use pagination::{PageMeta, Paginated, PaginationParams};
pub use price::{MarketQuote, PriceSource};
pub use token::{Candle, TimeFrame, Token, TokenMarketData, TokenWithMarket};
pub use transaction::{Transaction, TransactionStatus, TransactionType};
