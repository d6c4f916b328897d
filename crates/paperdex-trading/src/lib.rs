//! paperdex-trading - Order placement on top of the wallet ledger.
//!
//! Thin orchestration: validate the request shape, resolve the token and
//! its market price from the catalog, compute the slippage-adjusted
//! execution price and fee, and hand the balance mutation to the ledger.
//! Market orders fill immediately; limit orders are recorded as pending
//! and never auto-fill (there is no matching engine).

pub mod error;
pub mod service;

pub use error::{PlaceOrderError, TradingResult};
pub use service::{
    CancelAck, PlaceOrderRequest, Quote, TradingService, DEFAULT_SLIPPAGE_PCT, FEE_RATE,
};
