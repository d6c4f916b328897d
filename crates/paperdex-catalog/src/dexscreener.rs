//! HTTP client for the DexScreener price aggregator.
//!
//! One attempt per lookup with a fixed timeout; callers treat any failure
//! as "no data" and fall back to simulated baselines. No retries.

use crate::error::{CatalogError, CatalogResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default public API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com/latest";

/// Fixed timeout for upstream requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One trading pair as reported by DexScreener.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexScreenerPair {
    pub chain_id: String,
    pub dex_id: String,
    pub pair_address: String,
    /// USD price comes over the wire as a string.
    pub price_usd: String,
    #[serde(default)]
    pub volume: VolumeStats,
    #[serde(default)]
    pub price_change: ChangeStats,
    #[serde(default)]
    pub liquidity: Option<LiquidityStats>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub fdv: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeStats {
    #[serde(default)]
    pub h24: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeStats {
    #[serde(default)]
    pub h24: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiquidityStats {
    #[serde(default)]
    pub usd: f64,
}

#[derive(Debug, Deserialize)]
struct TokenPairsResponse {
    pairs: Option<Vec<DexScreenerPair>>,
}

/// Client for fetching token pairs from DexScreener.
pub struct DexScreenerClient {
    client: Client,
    base_url: String,
}

impl DexScreenerClient {
    /// Create a new client with the fixed request timeout.
    pub fn new(base_url: impl Into<String>) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the most liquid pair for a token address on the given chain.
    ///
    /// Returns `Ok(None)` when the upstream has no pair for the token on
    /// that chain; network/decode failures are errors for the caller to
    /// swallow into a fallback.
    pub async fn fetch_token_pair(
        &self,
        token_address: &str,
        chain_id: &str,
    ) -> CatalogResult<Option<DexScreenerPair>> {
        let url = format!("{}/dex/tokens/{token_address}", self.base_url);
        debug!(url = %url, "Fetching token pair from DexScreener");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::HttpClient(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream(format!("HTTP {status}")));
        }

        let body: TokenPairsResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Upstream(format!("Failed to parse response: {e}")))?;

        let pairs = match body.pairs {
            Some(pairs) if !pairs.is_empty() => pairs,
            _ => {
                warn!(token = %token_address, "No DexScreener pairs found");
                return Ok(None);
            }
        };

        let best = pairs
            .into_iter()
            .filter(|p| p.chain_id.eq_ignore_ascii_case(chain_id))
            .max_by(|a, b| {
                let liq = |p: &DexScreenerPair| p.liquidity.as_ref().map(|l| l.usd).unwrap_or(0.0);
                liq(a).total_cmp(&liq(b))
            });

        if best.is_none() {
            warn!(token = %token_address, chain = %chain_id, "No pairs on requested chain");
        }

        Ok(best)
    }
}
