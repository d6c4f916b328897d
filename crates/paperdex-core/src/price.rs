//! Price lookup seam.
//!
//! The wallet ledger's projections (balance listing, portfolio value,
//! summary) need current prices but must not couple to a concrete market
//! data provider, so they take this capability as `Arc<dyn PriceSource>`.
//! Production injects the catalog's market-data service; tests inject a
//! fixed fake.

use crate::ids::TokenId;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Current quote for one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketQuote {
    pub price: Decimal,
    /// Relative 24h change in percent.
    pub price_change_percent_24h: Decimal,
}

/// Source of current token prices.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Quote for a token, or `None` when the token is unknown to the
    /// source. A lookup failure is reported as `None`, never an error.
    async fn quote(&self, token_id: &TokenId) -> Option<MarketQuote>;
}
