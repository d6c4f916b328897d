//! OHLCV chart generation.
//!
//! Candles are a random walk from the token's base price, oldest first,
//! with contiguous timestamps at the timeframe width. Nothing here is real
//! market history.

use chrono::Utc;
use paperdex_core::{Candle, TimeFrame, TokenId};
use rand::Rng;
use rust_decimal::Decimal;

use crate::simulated::base_price;

fn to_price(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(8)
}

/// Generate `count` candles ending at the current time.
pub fn generate_candles(
    base: f64,
    time_frame: TimeFrame,
    count: usize,
    volatility: f64,
) -> Vec<Candle> {
    let interval = time_frame.as_secs();
    let now = Utc::now().timestamp();
    let start = now - count as i64 * interval;

    let mut rng = rand::thread_rng();
    let mut current = base * (0.9 + rng.gen::<f64>() * 0.2);
    let mut candles = Vec::with_capacity(count);

    for i in 0..count {
        let time = start + i as i64 * interval;

        let change = (rng.gen::<f64>() - 0.5) * volatility;
        let open = current;
        let close = open * (1.0 + change);

        let wick_up = rng.gen::<f64>() * volatility * 0.5;
        let high = open.max(close) * (1.0 + wick_up);

        let wick_down = rng.gen::<f64>() * volatility * 0.5;
        let low = open.min(close) * (1.0 - wick_down);

        let volume = 1_000_000.0 * (0.5 + rng.gen::<f64>());

        candles.push(Candle {
            time,
            open: to_price(open),
            high: to_price(high),
            low: to_price(low),
            close: to_price(close),
            volume: volume as u64,
        });

        current = close;
    }

    candles
}

/// Chart data for a catalog token. SOL gets lower volatility than the
/// meme-heavy rest of the list.
pub fn token_chart(token_id: &TokenId, time_frame: TimeFrame, count: usize) -> Vec<Candle> {
    let volatility = if token_id.as_str() == "sol" { 0.015 } else { 0.03 };
    generate_candles(base_price(token_id), time_frame, count, volatility)
}
