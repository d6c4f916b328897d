//! Market data service.
//!
//! Joins the static token catalog with current market statistics and
//! implements the ledger's `PriceSource` seam. In `Live` mode each lookup
//! makes exactly one DexScreener attempt; every failure path lands on the
//! simulated baseline for the token, and callers are not told which source
//! produced the numbers.

use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use paperdex_core::{MarketQuote, PriceSource, Token, TokenId, TokenMarketData, TokenWithMarket};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::dexscreener::{DexScreenerClient, DexScreenerPair};
use crate::error::CatalogResult;
use crate::simulated::simulated_market_data;
use crate::tokens::{supported_tokens, token_by_id};

/// Where market statistics come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDataMode {
    /// Randomly jittered baselines, fully offline.
    #[default]
    Simulated,
    /// DexScreener lookups with baseline fallback.
    Live,
}

/// Sortable token listing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSortField {
    MarketCap,
    Volume24h,
    PriceChangePercent24h,
}

impl FromStr for TokenSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marketCap" => Ok(Self::MarketCap),
            "volume24h" => Ok(Self::Volume24h),
            "priceChangePercent24h" => Ok(Self::PriceChangePercent24h),
            _ => Err(()),
        }
    }
}

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// Token catalog joined with a market-data source.
pub struct MarketDataService {
    mode: MarketDataMode,
    dex: DexScreenerClient,
}

impl MarketDataService {
    pub fn new(mode: MarketDataMode, dexscreener_base_url: impl Into<String>) -> CatalogResult<Self> {
        Ok(Self {
            mode,
            dex: DexScreenerClient::new(dexscreener_base_url)?,
        })
    }

    /// Current market data for a token; `None` for ids outside the catalog.
    pub async fn market_data(&self, token_id: &TokenId) -> Option<TokenMarketData> {
        let token = token_by_id(token_id)?;

        if self.mode == MarketDataMode::Live {
            match self.dex.fetch_token_pair(&token.address, &token.chain).await {
                Ok(Some(pair)) => return Some(pair_to_market_data(token, &pair)),
                Ok(None) => {
                    warn!(token = %token.symbol, "No upstream data, using baseline");
                }
                Err(e) => {
                    warn!(token = %token.symbol, error = %e, "Upstream fetch failed, using baseline");
                }
            }
        }

        simulated_market_data(token_id)
    }

    /// A single token joined with its market data.
    pub async fn token_with_market(&self, token_id: &TokenId) -> Option<TokenWithMarket> {
        let token = token_by_id(token_id)?;
        let market = self.market_data(token_id).await?;
        Some(TokenWithMarket {
            token: token.clone(),
            market,
        })
    }

    /// All catalog tokens joined with market data, fetched concurrently.
    pub async fn all_with_market(&self) -> Vec<TokenWithMarket> {
        let futures = supported_tokens()
            .iter()
            .map(|token| self.token_with_market(&token.id));

        join_all(futures).await.into_iter().flatten().collect()
    }
}

#[async_trait]
impl PriceSource for MarketDataService {
    async fn quote(&self, token_id: &TokenId) -> Option<MarketQuote> {
        let data = self.market_data(token_id).await?;
        Some(MarketQuote {
            price: data.price,
            price_change_percent_24h: data.price_change_percent_24h,
        })
    }
}

fn pair_to_market_data(token: &Token, pair: &DexScreenerPair) -> TokenMarketData {
    let price = pair
        .price_usd
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or_default();
    let change_percent = Decimal::from_f64_retain(pair.price_change.h24).unwrap_or_default();

    TokenMarketData {
        token_id: token.id.clone(),
        price,
        price_change_24h: (price * change_percent / Decimal::from(100)).round_dp(10),
        price_change_percent_24h: change_percent,
        volume_24h: Decimal::from_f64_retain(pair.volume.h24).unwrap_or_default(),
        market_cap: pair
            .market_cap
            .and_then(Decimal::from_f64_retain)
            .unwrap_or_default(),
        liquidity: pair
            .liquidity
            .as_ref()
            .and_then(|l| Decimal::from_f64_retain(l.usd))
            .unwrap_or_default(),
        // Not provided by DexScreener.
        holders: 0,
        updated_at: Utc::now(),
    }
}

/// Case-insensitive substring match on symbol, name, or address. An empty
/// query keeps everything.
pub fn filter_tokens_by_query(tokens: Vec<TokenWithMarket>, query: &str) -> Vec<TokenWithMarket> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tokens;
    }
    tokens
        .into_iter()
        .filter(|t| {
            t.token.symbol.to_lowercase().contains(&needle)
                || t.token.name.to_lowercase().contains(&needle)
                || t.token.address.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort a joined token list in place.
pub fn sort_tokens_by(tokens: &mut [TokenWithMarket], field: TokenSortField, order: SortOrder) {
    tokens.sort_by(|a, b| {
        let key = |t: &TokenWithMarket| match field {
            TokenSortField::MarketCap => t.market.market_cap,
            TokenSortField::Volume24h => t.market.volume_24h,
            TokenSortField::PriceChangePercent24h => t.market.price_change_percent_24h,
        };
        let ord = key(a).cmp(&key(b));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
