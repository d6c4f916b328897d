//! paperdex-catalog - Token catalog and market data.
//!
//! Provides the read-only list of supported tokens plus their current
//! market statistics, from one of two sources:
//!
//! - **Simulated**: per-token baseline stats with a small random jitter on
//!   every read. Fully offline, the default for demos and tests.
//! - **Live**: DexScreener REST lookups with a fixed timeout. Any upstream
//!   failure silently falls back to the simulated baseline for that token;
//!   callers are never told a fallback occurred.
//!
//! The catalog also generates OHLCV chart data (random walk) and implements
//! the ledger's [`PriceSource`] seam.
//!
//! [`PriceSource`]: paperdex_core::PriceSource

pub mod chart;
pub mod dexscreener;
pub mod error;
pub mod service;
pub mod simulated;
pub mod tokens;

pub use chart::token_chart;
pub use dexscreener::{DexScreenerClient, DexScreenerPair};
pub use error::{CatalogError, CatalogResult};
pub use service::{
    filter_tokens_by_query, sort_tokens_by, MarketDataMode, MarketDataService, SortOrder,
    TokenSortField,
};
pub use tokens::{supported_tokens, token_by_id};
