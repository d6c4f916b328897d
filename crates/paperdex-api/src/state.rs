//! Shared application state for axum handlers.

use paperdex_catalog::MarketDataService;
use paperdex_core::UserId;
use paperdex_ledger::WalletLedger;
use paperdex_trading::TradingService;
use std::sync::Arc;
use std::time::Instant;

/// Everything the route handlers need, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MarketDataService>,
    pub ledger: Arc<WalletLedger>,
    pub trading: Arc<TradingService>,
    /// User credited when a request carries no `userId`.
    pub default_user: UserId,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        catalog: Arc<MarketDataService>,
        ledger: Arc<WalletLedger>,
        trading: Arc<TradingService>,
        default_user: UserId,
    ) -> Self {
        Self {
            catalog,
            ledger,
            trading,
            default_user,
            started_at: Instant::now(),
        }
    }

    /// Resolve the effective user for a request.
    pub fn user_or_default(&self, user_id: Option<UserId>) -> UserId {
        user_id.unwrap_or_else(|| self.default_user.clone())
    }
}
