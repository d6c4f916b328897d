//! Mock copy-trading positions.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use paperdex_core::{TokenId, TraderId, UserId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lifecycle of a copy position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Open,
    Closed,
}

/// One mirrored position of a followed trader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPosition {
    pub id: String,
    pub trader_id: TraderId,
    pub user_id: UserId,
    pub token_id: TokenId,
    pub entry_price: Decimal,
    pub current_price: Decimal,
    pub amount: Decimal,
    pub pnl: Decimal,
    pub pnl_percent: Decimal,
    pub status: PositionStatus,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[allow(clippy::too_many_arguments)]
fn position(
    id: &str,
    trader_id: &str,
    token_id: &str,
    entry_price: Decimal,
    current_price: Decimal,
    amount: Decimal,
    pnl: Decimal,
    pnl_percent: Decimal,
    opened_hours_ago: i64,
) -> CopyPosition {
    CopyPosition {
        id: id.to_string(),
        trader_id: TraderId::from(trader_id),
        user_id: UserId::from("user-1"),
        token_id: TokenId::from(token_id),
        entry_price,
        current_price,
        amount,
        pnl,
        pnl_percent,
        status: PositionStatus::Open,
        opened_at: Utc::now() - Duration::hours(opened_hours_ago),
        closed_at: None,
    }
}

static MOCK_POSITIONS: Lazy<Vec<CopyPosition>> = Lazy::new(|| {
    vec![
        position(
            "pos-1",
            "trader-1",
            "bonk",
            dec!(0.00002534),
            dec!(0.00002834),
            dec!(50_000_000),
            dec!(150),
            dec!(11.84),
            24,
        ),
        position(
            "pos-2",
            "trader-1",
            "wif",
            dec!(2.12),
            dec!(2.45),
            dec!(100),
            dec!(33),
            dec!(15.57),
            48,
        ),
        position(
            "pos-3",
            "trader-4",
            "jup",
            dec!(0.95),
            dec!(0.92),
            dec!(500),
            dec!(-15),
            dec!(-3.16),
            1,
        ),
    ]
});

/// All mock positions.
pub fn mock_positions() -> &'static [CopyPosition] {
    &MOCK_POSITIONS
}

/// Positions mirrored into one user's account.
pub fn positions_by_user<'a>(
    positions: &'a [CopyPosition],
    user_id: &UserId,
) -> Vec<&'a CopyPosition> {
    positions.iter().filter(|p| &p.user_id == user_id).collect()
}

/// Keep open positions only.
pub fn filter_open_positions<'a>(positions: &[&'a CopyPosition]) -> Vec<&'a CopyPosition> {
    positions
        .iter()
        .filter(|p| p.status == PositionStatus::Open)
        .copied()
        .collect()
}

/// Sum of realized/unrealized PnL across positions.
pub fn total_pnl(positions: &[&CopyPosition]) -> Decimal {
    positions.iter().map(|p| p.pnl).sum()
}
