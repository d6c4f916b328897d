//! paperdex-copytrade - Mock trader leaderboard and copy-trading settings.
//!
//! Everything here is static demonstration data: traders, their copy
//! positions, and per-trader default copy settings. Following a trader
//! only echoes activated settings back; no trades are ever mirrored into
//! the wallet ledger.

pub mod positions;
pub mod settings;
pub mod traders;

pub use positions::{
    filter_open_positions, mock_positions, positions_by_user, total_pnl, CopyPosition,
    PositionStatus,
};
pub use settings::{CopySettings, CopySettingsUpdate};
pub use traders::{
    filter_traders_by_tag, filter_verified_traders, mock_traders, search_traders,
    sort_traders_by_field, trader_by_id, Trader, TraderSortField,
};
