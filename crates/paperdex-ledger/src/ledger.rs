//! The wallet ledger service.
//!
//! One `WalletLedger` is constructed at process start and shared by `Arc`
//! with every route handler; nothing else may touch wallet state. Wallets
//! are keyed by user id in a `DashMap` and each wallet sits behind its own
//! mutex, so mutations for one user are serialized: the sufficiency check
//! and the commit happen under a single lock acquisition and two
//! concurrent orders cannot jointly overdraw a balance. Price lookups are
//! awaited outside any lock.

use dashmap::DashMap;
use parking_lot::Mutex;
use paperdex_core::{
    Order, OrderId, OrderSide, OrderStatus, PriceSource, Token, TokenId, Transaction,
    TransactionStatus, TransactionType, UserId,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::rejection::TradeRejection;
use crate::wallet::{AssetHolding, Wallet, WalletBalance, WalletSummary};

/// Operational snapshot of the wallet store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub user_count: usize,
    pub total_transactions: usize,
}

/// Process-wide wallet store plus the injected price capability.
pub struct WalletLedger {
    wallets: DashMap<UserId, Arc<Mutex<Wallet>>>,
    prices: Arc<dyn PriceSource>,
}

impl WalletLedger {
    pub fn new(prices: Arc<dyn PriceSource>) -> Self {
        Self {
            wallets: DashMap::new(),
            prices,
        }
    }

    /// The wallet for a user, created with default funding on first touch.
    /// Idempotent: a second call for the same user returns the same
    /// instance, never re-funds.
    fn get_or_create(&self, user_id: &UserId) -> Arc<Mutex<Wallet>> {
        if let Some(existing) = self.wallets.get(user_id) {
            return existing.clone();
        }

        self.wallets
            .entry(user_id.clone())
            .or_insert_with(|| {
                info!(user = %user_id, "Created new wallet with default funding");
                Arc::new(Mutex::new(Wallet::with_defaults()))
            })
            .clone()
    }

    /// Run a closure against the locked wallet of a user.
    pub fn with_wallet<R>(&self, user_id: &UserId, f: impl FnOnce(&mut Wallet) -> R) -> R {
        let wallet = self.get_or_create(user_id);
        let mut guard = wallet.lock();
        f(&mut guard)
    }

    /// Current cash balance.
    pub fn usd_balance(&self, user_id: &UserId) -> Decimal {
        self.with_wallet(user_id, |w| w.usd_balance)
    }

    /// Held amount of a token; zero when absent.
    pub fn token_holding(&self, user_id: &UserId, token_id: &TokenId) -> Decimal {
        self.with_wallet(user_id, |w| w.holding_amount(token_id))
    }

    /// Apply a trade atomically for the user. See [`Wallet::apply_trade`].
    pub fn apply_trade(
        &self,
        user_id: &UserId,
        side: OrderSide,
        token: &Token,
        amount: Decimal,
        total_usd: Decimal,
        fee: Decimal,
    ) -> Result<(), TradeRejection> {
        self.with_wallet(user_id, |w| {
            w.apply_trade(side, token, amount, total_usd, fee)
        })
    }

    pub fn record_transaction(&self, user_id: &UserId, tx: Transaction) {
        self.with_wallet(user_id, |w| w.record_transaction(tx));
    }

    pub fn record_order(&self, user_id: &UserId, order: Order) {
        self.with_wallet(user_id, |w| w.record_order(order));
    }

    pub fn update_order_status(
        &self,
        user_id: &UserId,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Option<Order> {
        self.with_wallet(user_id, |w| w.update_order_status(order_id, status))
    }

    /// Transaction history, newest first, optionally filtered.
    pub fn transactions(
        &self,
        user_id: &UserId,
        tx_type: Option<TransactionType>,
        status: Option<TransactionStatus>,
    ) -> Vec<Transaction> {
        self.with_wallet(user_id, |w| {
            w.transactions
                .iter()
                .filter(|t| tx_type.map_or(true, |ty| t.tx_type == ty))
                .filter(|t| status.map_or(true, |st| t.status == st))
                .cloned()
                .collect()
        })
    }

    /// Order history, newest first, optionally filtered by status.
    pub fn orders(&self, user_id: &UserId, status: Option<OrderStatus>) -> Vec<Order> {
        self.with_wallet(user_id, |w| {
            w.orders
                .iter()
                .filter(|o| status.map_or(true, |st| o.status == st))
                .cloned()
                .collect()
        })
    }

    pub fn pending_orders(&self, user_id: &UserId) -> Vec<Order> {
        self.orders(user_id, Some(OrderStatus::Pending))
    }

    /// Holdings enriched with current prices, sorted descending by USD
    /// value. A holding whose price lookup fails is skipped. Pure
    /// projection: no wallet state changes.
    pub async fn list_balances(&self, user_id: &UserId) -> Vec<WalletBalance> {
        let holdings = self.holdings_snapshot(user_id);

        let mut balances = Vec::with_capacity(holdings.len());
        for holding in holdings {
            let Some(quote) = self.prices.quote(&holding.token_id).await else {
                continue;
            };

            balances.push(WalletBalance {
                balance_usd: holding.amount * quote.price,
                token_id: holding.token_id,
                symbol: holding.symbol,
                name: holding.name,
                logo_url: holding.logo_url,
                balance: holding.amount,
                price: quote.price,
                price_change_24h: quote.price_change_percent_24h,
            });
        }

        balances.sort_by(|a, b| b.balance_usd.cmp(&a.balance_usd));
        balances
    }

    /// `usd_balance + Σ amount * price` over all holdings; a missing price
    /// contributes zero.
    pub async fn portfolio_value(&self, user_id: &UserId) -> Decimal {
        let (cash, holdings) = self.with_wallet(user_id, |w| {
            (w.usd_balance, snapshot_assets(w))
        });

        let mut total = cash;
        for holding in holdings {
            if let Some(quote) = self.prices.quote(&holding.token_id).await {
                total += holding.amount * quote.price;
            }
        }
        total
    }

    /// Aggregate summary: portfolio value, 24h PnL, enriched balances, and
    /// the cash component.
    pub async fn summary(&self, user_id: &UserId) -> WalletSummary {
        let available_usd = self.usd_balance(user_id);
        let balances = self.list_balances(user_id).await;

        let hundred = Decimal::from(100);
        let token_total: Decimal = balances.iter().map(|b| b.balance_usd).sum();
        let total_pnl_24h: Decimal = balances
            .iter()
            .filter_map(|b| {
                let denom = Decimal::ONE + b.price_change_24h / hundred;
                if denom.is_zero() {
                    return None;
                }
                Some(b.balance_usd - b.balance_usd / denom)
            })
            .sum();

        let total_balance_usd = available_usd + token_total;
        let previous_total = total_balance_usd - total_pnl_24h;
        let total_pnl_percent_24h = if previous_total.is_zero() {
            Decimal::ZERO
        } else {
            total_pnl_24h / previous_total * hundred
        };

        WalletSummary {
            total_balance_usd,
            total_pnl_24h,
            total_pnl_percent_24h,
            balances,
            available_usd,
        }
    }

    /// Delete the wallet entirely; the next access recreates defaults.
    pub fn reset(&self, user_id: &UserId) {
        self.wallets.remove(user_id);
        info!(user = %user_id, "Wallet reset");
    }

    /// Store-wide counters.
    pub fn stats(&self) -> StoreStats {
        let mut total_transactions = 0;
        for entry in self.wallets.iter() {
            total_transactions += entry.value().lock().transactions.len();
        }

        StoreStats {
            user_count: self.wallets.len(),
            total_transactions,
        }
    }

    fn holdings_snapshot(&self, user_id: &UserId) -> Vec<AssetHolding> {
        self.with_wallet(user_id, snapshot_assets)
    }
}

fn snapshot_assets(wallet: &mut Wallet) -> Vec<AssetHolding> {
    wallet.assets.values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paperdex_core::MarketQuote;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    /// Fixed-price fake for the catalog seam.
    struct FakePrices(HashMap<&'static str, MarketQuote>);

    impl FakePrices {
        fn standard() -> Arc<Self> {
            let mut quotes = HashMap::new();
            quotes.insert(
                "sol",
                MarketQuote {
                    price: dec!(178.45),
                    price_change_percent_24h: dec!(3.02),
                },
            );
            quotes.insert(
                "jup",
                MarketQuote {
                    price: dec!(0.92),
                    price_change_percent_24h: dec!(4.54),
                },
            );
            Arc::new(Self(quotes))
        }
    }

    #[async_trait]
    impl PriceSource for FakePrices {
        async fn quote(&self, token_id: &TokenId) -> Option<MarketQuote> {
            self.0.get(token_id.as_str()).copied()
        }
    }

    fn ledger() -> WalletLedger {
        WalletLedger::new(FakePrices::standard())
    }

    fn user() -> UserId {
        UserId::from("user-1")
    }

    fn token(id: &str, symbol: &str) -> Token {
        Token {
            id: TokenId::from(id),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            address: String::new(),
            decimals: 6,
            logo_url: String::new(),
            chain: "solana".to_string(),
        }
    }

    #[test]
    fn wallet_creation_is_idempotent() {
        let ledger = ledger();
        let user = user();

        assert_eq!(ledger.usd_balance(&user), dec!(10_000));

        // Mutate, then access again: no re-funding.
        ledger
            .apply_trade(
                &user,
                OrderSide::Buy,
                &token("jup", "JUP"),
                dec!(100),
                dec!(92),
                dec!(0.09),
            )
            .unwrap();

        let after = ledger.usd_balance(&user);
        assert_eq!(after, dec!(9907.91));
        assert_eq!(ledger.usd_balance(&user), after);
    }

    #[test]
    fn reset_restores_default_funding() {
        let ledger = ledger();
        let user = user();

        ledger
            .apply_trade(
                &user,
                OrderSide::Sell,
                &token("sol", "SOL"),
                dec!(5),
                dec!(892.25),
                dec!(0.89),
            )
            .unwrap();
        assert!(ledger.token_holding(&user, &TokenId::from("sol")).is_zero());

        ledger.reset(&user);

        assert_eq!(ledger.usd_balance(&user), dec!(10_000));
        assert_eq!(ledger.token_holding(&user, &TokenId::from("sol")), dec!(5));
    }

    #[test]
    fn concurrent_buys_cannot_jointly_overdraw() {
        let ledger = Arc::new(ledger());
        let user = user();

        // Two buys of 6,000 against a 10,000 balance: exactly one must win.
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                let user = user.clone();
                std::thread::spawn(move || {
                    ledger.apply_trade(
                        &user,
                        OrderSide::Buy,
                        &token("jup", "JUP"),
                        dec!(6000),
                        dec!(6000),
                        Decimal::ZERO,
                    )
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1);
        assert_eq!(ledger.usd_balance(&user), dec!(4000));
    }

    #[tokio::test]
    async fn balances_are_enriched_and_sorted_by_value() {
        let ledger = ledger();
        let user = user();

        ledger
            .apply_trade(
                &user,
                OrderSide::Buy,
                &token("jup", "JUP"),
                dec!(5000),
                dec!(4600),
                dec!(4.6),
            )
            .unwrap();

        let balances = ledger.list_balances(&user).await;
        assert_eq!(balances.len(), 2);
        // jup: 5000 * 0.92 = 4600 > sol: 5 * 178.45 = 892.25
        assert_eq!(balances[0].token_id.as_str(), "jup");
        assert_eq!(balances[0].balance_usd, dec!(4600.00));
        assert_eq!(balances[1].balance_usd, dec!(892.25));
    }

    #[tokio::test]
    async fn unpriced_holdings_are_skipped_from_listing() {
        let ledger = ledger();
        let user = user();

        ledger
            .apply_trade(
                &user,
                OrderSide::Buy,
                &token("bonk", "BONK"),
                dec!(1000),
                dec!(10),
                Decimal::ZERO,
            )
            .unwrap();

        // The fake price source only knows sol and jup.
        let balances = ledger.list_balances(&user).await;
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].token_id.as_str(), "sol");
    }

    #[tokio::test]
    async fn portfolio_value_counts_cash_and_priced_holdings() {
        let ledger = ledger();
        let user = user();

        // Fresh wallet: 10,000 cash + 5 SOL * 178.45.
        let value = ledger.portfolio_value(&user).await;
        assert_eq!(value, dec!(10_000) + dec!(892.25));
    }

    #[tokio::test]
    async fn summary_reports_cash_and_pnl() {
        let ledger = ledger();
        let user = user();

        let summary = ledger.summary(&user).await;

        assert_eq!(summary.available_usd, dec!(10_000));
        assert_eq!(summary.total_balance_usd, dec!(10_000) + dec!(892.25));
        assert_eq!(summary.balances.len(), 1);
        // SOL is up 3.02% on the day, so PnL must be positive.
        assert!(summary.total_pnl_24h > Decimal::ZERO);
        assert!(summary.total_pnl_percent_24h > Decimal::ZERO);
    }

    #[test]
    fn stats_count_wallets_and_transactions() {
        let ledger = ledger();
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        ledger.usd_balance(&alice);
        ledger.usd_balance(&bob);
        ledger.with_wallet(&alice, |w| {
            w.record_transaction(sample_tx());
            w.record_transaction(sample_tx());
        });

        let stats = ledger.stats();
        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.total_transactions, 2);
    }

    fn sample_tx() -> Transaction {
        Transaction {
            id: paperdex_core::TransactionId::generate(),
            tx_type: TransactionType::Swap,
            token_id: TokenId::from("sol"),
            symbol: "SOL".into(),
            amount: Decimal::ONE,
            amount_usd: dec!(178.45),
            fee: Decimal::ZERO,
            tx_hash: String::new(),
            status: TransactionStatus::Confirmed,
            created_at: chrono::Utc::now(),
        }
    }
}
