//! Wallet state and its mutation rules.
//!
//! A `Wallet` is plain data plus synchronous mutations; all locking and
//! sharing lives in [`crate::ledger::WalletLedger`]. Keeping the rules on
//! the bare struct makes the invariants directly unit-testable.

use chrono::{DateTime, Utc};
use paperdex_core::{
    Order, OrderId, OrderSide, OrderStatus, Token, TokenId, Transaction,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

use crate::rejection::TradeRejection;

/// Starting cash for a freshly created wallet.
pub const DEFAULT_USD_BALANCE: Decimal = dec!(10_000);

/// Starting SOL quantity for a freshly created wallet.
pub const DEFAULT_SOL_HOLDING: Decimal = dec!(5);

/// Maximum retained transactions and orders per wallet; older entries are
/// evicted on insert.
pub const HISTORY_CAP: usize = 100;

const DEFAULT_SOL_LOGO: &str = "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png";

/// Quantity of one token owned by a wallet, with display metadata copied
/// from the catalog at acquisition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolding {
    pub token_id: TokenId,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    pub amount: Decimal,
}

/// A holding enriched with its current price, for balance listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub token_id: TokenId,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    pub balance: Decimal,
    pub balance_usd: Decimal,
    pub price: Decimal,
    /// Relative 24h price change in percent.
    pub price_change_24h: Decimal,
}

/// Aggregate view of a wallet: cash, enriched holdings, and 24h PnL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    /// Full portfolio value: cash plus token holdings at current prices.
    pub total_balance_usd: Decimal,
    pub total_pnl_24h: Decimal,
    pub total_pnl_percent_24h: Decimal,
    pub balances: Vec<WalletBalance>,
    /// Cash component of the portfolio.
    pub available_usd: Decimal,
}

/// Per-user in-memory record of cash, holdings, and trade history.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub usd_balance: Decimal,
    pub assets: HashMap<TokenId, AssetHolding>,
    /// Newest first, capped at [`HISTORY_CAP`].
    pub transactions: VecDeque<Transaction>,
    /// Newest first, capped at [`HISTORY_CAP`].
    pub orders: VecDeque<Order>,
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    /// A wallet with the fixed default funding: 10,000 USD and 5 SOL.
    pub fn with_defaults() -> Self {
        let sol = TokenId::from("sol");
        let mut assets = HashMap::new();
        assets.insert(
            sol.clone(),
            AssetHolding {
                token_id: sol,
                symbol: "SOL".to_string(),
                name: "Solana".to_string(),
                logo_url: DEFAULT_SOL_LOGO.to_string(),
                amount: DEFAULT_SOL_HOLDING,
            },
        );

        Self {
            usd_balance: DEFAULT_USD_BALANCE,
            assets,
            transactions: VecDeque::new(),
            orders: VecDeque::new(),
            created_at: Utc::now(),
        }
    }

    /// Held amount of a token; zero when absent (not an error).
    pub fn holding_amount(&self, token_id: &TokenId) -> Decimal {
        self.assets
            .get(token_id)
            .map(|a| a.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Apply a buy or sell against the wallet.
    ///
    /// The sufficiency check and the mutation happen together; on
    /// rejection no state changes. `amount`, `total_usd`, and `fee` are
    /// non-negative by caller contract (the order handler computes them
    /// from the catalog price).
    pub fn apply_trade(
        &mut self,
        side: OrderSide,
        token: &Token,
        amount: Decimal,
        total_usd: Decimal,
        fee: Decimal,
    ) -> Result<(), TradeRejection> {
        match side {
            OrderSide::Buy => {
                let total_cost = total_usd + fee;
                if self.usd_balance < total_cost {
                    return Err(TradeRejection::InsufficientBalance {
                        required: total_cost,
                        available: self.usd_balance,
                    });
                }

                self.usd_balance -= total_cost;
                self.assets
                    .entry(token.id.clone())
                    .and_modify(|holding| holding.amount += amount)
                    .or_insert_with(|| AssetHolding {
                        token_id: token.id.clone(),
                        symbol: token.symbol.clone(),
                        name: token.name.clone(),
                        logo_url: token.logo_url.clone(),
                        amount,
                    });
            }
            OrderSide::Sell => {
                let held = self.holding_amount(&token.id);
                if held < amount {
                    return Err(TradeRejection::InsufficientHolding {
                        token_id: token.id.clone(),
                        required: amount,
                        available: held,
                    });
                }

                let remaining = held - amount;
                if remaining.is_zero() {
                    self.assets.remove(&token.id);
                } else if let Some(holding) = self.assets.get_mut(&token.id) {
                    holding.amount = remaining;
                }

                self.usd_balance += total_usd - fee;
            }
        }

        Ok(())
    }

    /// Prepend a transaction, evicting beyond the cap.
    pub fn record_transaction(&mut self, tx: Transaction) {
        self.transactions.push_front(tx);
        self.transactions.truncate(HISTORY_CAP);
    }

    /// Prepend an order, evicting beyond the cap.
    pub fn record_order(&mut self, order: Order) {
        self.orders.push_front(order);
        self.orders.truncate(HISTORY_CAP);
    }

    /// Replace an order's status and `updated_at`, preserving all other
    /// fields. `None` when the order is not in the log (not an error).
    pub fn update_order_status(
        &mut self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Option<Order> {
        let slot = self.orders.iter_mut().find(|o| &o.id == order_id)?;
        let updated = slot.clone().with_status(status);
        *slot = updated.clone();
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperdex_core::{OrderType, TransactionId, TransactionStatus, TransactionType, UserId};

    fn sol() -> Token {
        Token {
            id: TokenId::from("sol"),
            symbol: "SOL".into(),
            name: "Solana".into(),
            address: "So11111111111111111111111111111111111111112".into(),
            decimals: 9,
            logo_url: DEFAULT_SOL_LOGO.into(),
            chain: "solana".into(),
        }
    }

    fn jup() -> Token {
        Token {
            id: TokenId::from("jup"),
            symbol: "JUP".into(),
            name: "Jupiter".into(),
            address: "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN".into(),
            decimals: 6,
            logo_url: String::new(),
            chain: "solana".into(),
        }
    }

    fn tx(n: u32) -> Transaction {
        Transaction {
            id: TransactionId::from(format!("tx-{n}")),
            tx_type: TransactionType::Swap,
            token_id: TokenId::from("sol"),
            symbol: "SOL".into(),
            amount: Decimal::from(n),
            amount_usd: Decimal::from(n),
            fee: Decimal::ZERO,
            tx_hash: String::new(),
            status: TransactionStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    fn order(n: u32) -> Order {
        let now = Utc::now();
        Order {
            id: OrderId::from(format!("order-{n}")),
            user_id: UserId::from("user-1"),
            token_id: TokenId::from("sol"),
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            status: OrderStatus::Pending,
            amount: Decimal::ONE,
            price: Decimal::ONE,
            filled_amount: Decimal::ZERO,
            filled_price: Decimal::ZERO,
            fee: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn defaults_fund_cash_and_sol() {
        let wallet = Wallet::with_defaults();
        assert_eq!(wallet.usd_balance, dec!(10_000));
        assert_eq!(wallet.holding_amount(&TokenId::from("sol")), dec!(5));
        assert!(wallet.transactions.is_empty());
        assert!(wallet.orders.is_empty());
    }

    #[test]
    fn buy_with_insufficient_balance_changes_nothing() {
        let mut wallet = Wallet::with_defaults();
        wallet.usd_balance = dec!(100);

        let err = wallet
            .apply_trade(OrderSide::Buy, &sol(), dec!(1), dec!(150), dec!(0.15))
            .unwrap_err();

        assert_eq!(
            err,
            TradeRejection::InsufficientBalance {
                required: dec!(150.15),
                available: dec!(100),
            }
        );
        assert_eq!(wallet.usd_balance, dec!(100));
        assert_eq!(wallet.holding_amount(&TokenId::from("sol")), dec!(5));
    }

    #[test]
    fn successful_buy_debits_cash_and_credits_holding() {
        let mut wallet = Wallet::with_defaults();

        wallet
            .apply_trade(OrderSide::Buy, &jup(), dec!(500), dec!(460), dec!(0.18))
            .unwrap();

        assert_eq!(wallet.usd_balance, dec!(9539.82));
        assert_eq!(wallet.holding_amount(&TokenId::from("jup")), dec!(500));

        let holding = wallet.assets.get(&TokenId::from("jup")).unwrap();
        assert_eq!(holding.symbol, "JUP");
        assert_eq!(holding.name, "Jupiter");
    }

    #[test]
    fn buy_boundary_is_inclusive() {
        let mut wallet = Wallet::with_defaults();
        wallet.usd_balance = dec!(150.15);

        wallet
            .apply_trade(OrderSide::Buy, &sol(), dec!(1), dec!(150), dec!(0.15))
            .unwrap();
        assert_eq!(wallet.usd_balance, Decimal::ZERO);
    }

    #[test]
    fn sell_more_than_held_is_rejected() {
        let mut wallet = Wallet::with_defaults();

        let err = wallet
            .apply_trade(OrderSide::Sell, &sol(), dec!(6), dec!(1070), dec!(1.07))
            .unwrap_err();

        assert_eq!(
            err,
            TradeRejection::InsufficientHolding {
                token_id: TokenId::from("sol"),
                required: dec!(6),
                available: dec!(5),
            }
        );
        assert_eq!(wallet.usd_balance, dec!(10_000));
        assert_eq!(wallet.holding_amount(&TokenId::from("sol")), dec!(5));
    }

    #[test]
    fn sell_of_unheld_token_reports_zero_available() {
        let mut wallet = Wallet::with_defaults();

        let err = wallet
            .apply_trade(OrderSide::Sell, &jup(), dec!(1), dec!(1), Decimal::ZERO)
            .unwrap_err();

        assert_eq!(err.available(), Decimal::ZERO);
    }

    #[test]
    fn sell_draining_holding_removes_entry() {
        let mut wallet = Wallet::with_defaults();

        wallet
            .apply_trade(OrderSide::Sell, &sol(), dec!(5), dec!(892.25), dec!(0.89))
            .unwrap();

        assert!(!wallet.assets.contains_key(&TokenId::from("sol")));
        assert_eq!(wallet.usd_balance, dec!(10_000) + dec!(892.25) - dec!(0.89));
    }

    #[test]
    fn buy_then_sell_round_trip_nets_double_fee() {
        let mut wallet = Wallet::with_defaults();
        let fee = dec!(0.46);

        wallet
            .apply_trade(OrderSide::Buy, &jup(), dec!(500), dec!(460), fee)
            .unwrap();
        wallet
            .apply_trade(OrderSide::Sell, &jup(), dec!(500), dec!(460), fee)
            .unwrap();

        assert_eq!(wallet.usd_balance, dec!(10_000) - fee - fee);
        assert!(!wallet.assets.contains_key(&TokenId::from("jup")));
    }

    #[test]
    fn transaction_log_evicts_beyond_cap() {
        let mut wallet = Wallet::with_defaults();
        for n in 1..=101 {
            wallet.record_transaction(tx(n));
        }

        assert_eq!(wallet.transactions.len(), HISTORY_CAP);
        // Newest first; the very first insert (n=1) fell off the back.
        assert_eq!(wallet.transactions.front().unwrap().id.as_str(), "tx-101");
        assert_eq!(wallet.transactions.back().unwrap().id.as_str(), "tx-2");
        assert!(wallet.transactions.iter().all(|t| t.id.as_str() != "tx-1"));
    }

    #[test]
    fn order_log_evicts_beyond_cap() {
        let mut wallet = Wallet::with_defaults();
        for n in 1..=105 {
            wallet.record_order(order(n));
        }

        assert_eq!(wallet.orders.len(), HISTORY_CAP);
        assert_eq!(wallet.orders.front().unwrap().id.as_str(), "order-105");
    }

    #[test]
    fn update_order_status_replaces_in_place() {
        let mut wallet = Wallet::with_defaults();
        wallet.record_order(order(1));
        let created_at = wallet.orders.front().unwrap().created_at;

        let updated = wallet
            .update_order_status(&OrderId::from("order-1"), OrderStatus::Cancelled)
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cancelled);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(
            wallet.orders.front().unwrap().status,
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn update_order_status_missing_returns_none() {
        let mut wallet = Wallet::with_defaults();
        assert!(wallet
            .update_order_status(&OrderId::from("order-9"), OrderStatus::Cancelled)
            .is_none());
    }
}
