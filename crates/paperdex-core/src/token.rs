//! Token catalog and market-data types.

use crate::error::CoreError;
use crate::ids::TokenId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static metadata for a supported token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    pub symbol: String,
    pub name: String,
    /// On-chain mint address, used as the upstream lookup key.
    pub address: String,
    pub decimals: u8,
    pub logo_url: String,
    pub chain: String,
}

/// Point-in-time market statistics for a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMarketData {
    pub token_id: TokenId,
    pub price: Decimal,
    /// Absolute 24h price change in USD.
    pub price_change_24h: Decimal,
    /// Relative 24h price change in percent.
    pub price_change_percent_24h: Decimal,
    pub volume_24h: Decimal,
    pub market_cap: Decimal,
    pub liquidity: Decimal,
    pub holders: u64,
    pub updated_at: DateTime<Utc>,
}

/// Token metadata joined with its current market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenWithMarket {
    #[serde(flatten)]
    pub token: Token,
    pub market: TokenMarketData,
}

/// A single OHLCV candle. `time` is a Unix timestamp in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// Chart aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1w")]
    W1,
}

impl TimeFrame {
    /// Candle width in seconds.
    pub fn as_secs(&self) -> i64 {
        match self {
            Self::M1 => 60,
            Self::M5 => 300,
            Self::M15 => 900,
            Self::H1 => 3_600,
            Self::H4 => 14_400,
            Self::D1 => 86_400,
            Self::W1 => 604_800,
        }
    }

    /// All supported frames, for validation messages.
    pub fn all() -> &'static [TimeFrame] {
        &[
            Self::M1,
            Self::M5,
            Self::M15,
            Self::H1,
            Self::H4,
            Self::D1,
            Self::W1,
        ]
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
            Self::W1 => "1w",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TimeFrame {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::M1),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "4h" => Ok(Self::H4),
            "1d" => Ok(Self::D1),
            "1w" => Ok(Self::W1),
            other => Err(CoreError::InvalidTimeFrame(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_frame_round_trip() {
        for tf in TimeFrame::all() {
            let parsed: TimeFrame = tf.to_string().parse().unwrap();
            assert_eq!(parsed, *tf);
        }
    }

    #[test]
    fn time_frame_widths_increase() {
        let secs: Vec<i64> = TimeFrame::all().iter().map(|tf| tf.as_secs()).collect();
        assert!(secs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_time_frame_rejected() {
        assert!("2h".parse::<TimeFrame>().is_err());
    }

    #[test]
    fn token_with_market_flattens_metadata() {
        let token = Token {
            id: TokenId::from("sol"),
            symbol: "SOL".into(),
            name: "Solana".into(),
            address: "So11111111111111111111111111111111111111112".into(),
            decimals: 9,
            logo_url: String::new(),
            chain: "solana".into(),
        };
        let market = TokenMarketData {
            token_id: token.id.clone(),
            price: Decimal::from(178),
            price_change_24h: Decimal::ZERO,
            price_change_percent_24h: Decimal::ZERO,
            volume_24h: Decimal::ZERO,
            market_cap: Decimal::ZERO,
            liquidity: Decimal::ZERO,
            holders: 0,
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(TokenWithMarket { token, market }).unwrap();
        assert_eq!(json["symbol"], "SOL");
        assert!(json["market"].get("priceChangePercent24h").is_some());
    }
}
