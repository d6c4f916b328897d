//! Simulated market data.
//!
//! Each supported token has baseline statistics; every read applies a small
//! random jitter (±2% on price, ±1 on the absolute 24h change, ±10% on
//! volume) so repeated polls look alive. The baselines double as the
//! hardcoded fallback when the live upstream fails.

use chrono::Utc;
use paperdex_core::{TokenId, TokenMarketData};
use rand::Rng;
use rust_decimal::Decimal;

/// Baseline statistics for one token.
pub(crate) struct Baseline {
    pub token_id: &'static str,
    pub base_price: f64,
    pub base_change: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub liquidity: f64,
    pub holders: u64,
}

pub(crate) const BASELINES: &[Baseline] = &[
    Baseline {
        token_id: "sol",
        base_price: 178.45,
        base_change: 5.23,
        volume_24h: 2_450_000_000.0,
        market_cap: 82_000_000_000.0,
        liquidity: 450_000_000.0,
        holders: 2_500_000,
    },
    Baseline {
        token_id: "bonk",
        base_price: 0.00002834,
        base_change: 0.00000156,
        volume_24h: 180_000_000.0,
        market_cap: 1_800_000_000.0,
        liquidity: 45_000_000.0,
        holders: 850_000,
    },
    Baseline {
        token_id: "wif",
        base_price: 2.45,
        base_change: -0.12,
        volume_24h: 320_000_000.0,
        market_cap: 2_400_000_000.0,
        liquidity: 85_000_000.0,
        holders: 420_000,
    },
    Baseline {
        token_id: "jup",
        base_price: 0.92,
        base_change: 0.04,
        volume_24h: 95_000_000.0,
        market_cap: 1_250_000_000.0,
        liquidity: 65_000_000.0,
        holders: 380_000,
    },
    Baseline {
        token_id: "ray",
        base_price: 4.78,
        base_change: 0.23,
        volume_24h: 42_000_000.0,
        market_cap: 720_000_000.0,
        liquidity: 28_000_000.0,
        holders: 145_000,
    },
    Baseline {
        token_id: "orca",
        base_price: 3.92,
        base_change: -0.08,
        volume_24h: 18_000_000.0,
        market_cap: 280_000_000.0,
        liquidity: 22_000_000.0,
        holders: 95_000,
    },
    Baseline {
        token_id: "popcat",
        base_price: 0.78,
        base_change: 0.15,
        volume_24h: 125_000_000.0,
        market_cap: 760_000_000.0,
        liquidity: 32_000_000.0,
        holders: 185_000,
    },
    Baseline {
        token_id: "render",
        base_price: 7.24,
        base_change: 0.42,
        volume_24h: 85_000_000.0,
        market_cap: 2_800_000_000.0,
        liquidity: 48_000_000.0,
        holders: 125_000,
    },
];

/// Price variance applied per read (fraction of base price).
const PRICE_VARIANCE: f64 = 0.02;

pub(crate) fn baseline_for(token_id: &TokenId) -> Option<&'static Baseline> {
    BASELINES.iter().find(|b| b.token_id == token_id.as_str())
}

/// Base price for a token, `1.0` for ids without a baseline.
pub(crate) fn base_price(token_id: &TokenId) -> f64 {
    baseline_for(token_id).map(|b| b.base_price).unwrap_or(1.0)
}

fn to_decimal(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(dp)
}

/// Simulated market data for a token, or `None` for unknown ids.
pub fn simulated_market_data(token_id: &TokenId) -> Option<TokenMarketData> {
    let baseline = baseline_for(token_id)?;
    let mut rng = rand::thread_rng();

    let price = baseline.base_price * (1.0 + (rng.gen::<f64>() - 0.5) * PRICE_VARIANCE);
    let price_change = baseline.base_change + (rng.gen::<f64>() - 0.5) * 2.0;
    let denom = price - price_change;
    let change_percent = if denom.abs() > f64::EPSILON {
        price_change / denom * 100.0
    } else {
        0.0
    };
    let volume = baseline.volume_24h * (1.0 + (rng.gen::<f64>() - 0.5) * 0.1);

    Some(TokenMarketData {
        token_id: token_id.clone(),
        price: to_decimal(price, 10),
        price_change_24h: to_decimal(price_change, 10),
        price_change_percent_24h: to_decimal(change_percent, 4),
        volume_24h: to_decimal(volume, 2),
        market_cap: to_decimal(baseline.market_cap, 2),
        liquidity: to_decimal(baseline.liquidity, 2),
        holders: baseline.holders,
        updated_at: Utc::now(),
    })
}
