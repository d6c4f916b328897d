//! Copy-trading settings.
//!
//! Settings are not persisted anywhere; follow/update endpoints echo an
//! adjusted copy of the defaults back to the client.

use paperdex_core::TraderId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Per-trader copy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySettings {
    pub trader_id: TraderId,
    pub is_active: bool,
    /// Maximum USD committed to one mirrored position.
    pub max_position_size: Decimal,
    /// Fraction of the trader's size to mirror (0..=1).
    pub copy_ratio: Decimal,
    /// Stop-loss threshold in percent.
    pub stop_loss: Decimal,
    /// Take-profit threshold in percent.
    pub take_profit: Decimal,
    pub max_daily_trades: u32,
}

impl CopySettings {
    /// Default settings for following a trader.
    pub fn default_for(trader_id: TraderId) -> Self {
        Self {
            trader_id,
            is_active: false,
            max_position_size: dec!(100),
            copy_ratio: dec!(0.1),
            stop_loss: dec!(10),
            take_profit: dec!(50),
            max_daily_trades: 10,
        }
    }

    /// Activated copy of the settings, for the follow endpoint.
    pub fn activated(mut self) -> Self {
        self.is_active = true;
        self
    }
}

/// Client-supplied partial update; unset fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySettingsUpdate {
    pub is_active: Option<bool>,
    pub max_position_size: Option<Decimal>,
    pub copy_ratio: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub max_daily_trades: Option<u32>,
}

impl CopySettings {
    /// Merge a partial update. The trader id is never changed by updates.
    pub fn merged(mut self, update: CopySettingsUpdate) -> Self {
        if let Some(v) = update.is_active {
            self.is_active = v;
        }
        if let Some(v) = update.max_position_size {
            self.max_position_size = v;
        }
        if let Some(v) = update.copy_ratio {
            self.copy_ratio = v;
        }
        if let Some(v) = update.stop_loss {
            self.stop_loss = v;
        }
        if let Some(v) = update.take_profit {
            self.take_profit = v;
        }
        if let Some(v) = update.max_daily_trades {
            self.max_daily_trades = v;
        }
        self
    }
}
