//! Order placement, quoting, and cancellation.

use chrono::{Duration, Utc};
use paperdex_catalog::{token_by_id, MarketDataService};
use paperdex_core::{
    transaction::synthetic_tx_hash, Order, OrderId, OrderSide, OrderStatus, OrderType, TokenId,
    Transaction, TransactionId, TransactionStatus, TransactionType, UserId,
};
use paperdex_ledger::WalletLedger;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::error::{PlaceOrderError, TradingResult};

/// Simulated slippage applied to market orders when the client sends none,
/// in percent.
pub const DEFAULT_SLIPPAGE_PCT: Decimal = dec!(0.5);

/// Fee rate charged on filled notional (0.1%).
pub const FEE_RATE: Decimal = dec!(0.001);

/// Quote validity window.
const QUOTE_TTL_SECS: i64 = 30;

/// Raw order placement body. Field presence is validated here rather than
/// by serde so missing fields come back as one structured error listing
/// them all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub token_id: Option<TokenId>,
    pub side: Option<String>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub amount: Option<Decimal>,
    pub price: Option<Decimal>,
    /// Slippage tolerance in percent.
    pub slippage: Option<Decimal>,
    pub user_id: Option<UserId>,
}

/// Price estimate for a prospective trade.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub token_id: TokenId,
    pub side: OrderSide,
    pub amount: Decimal,
    pub price: Decimal,
    pub estimated_price: Decimal,
    pub estimated_total: Decimal,
    pub estimated_fee: Decimal,
    /// Slippage assumption in percent.
    pub slippage: Decimal,
    pub expires_at: chrono::DateTime<Utc>,
}

/// Minimal acknowledgement for cancelling an order that is not in the
/// user's log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAck {
    pub id: OrderId,
    pub status: OrderStatus,
    pub updated_at: chrono::DateTime<Utc>,
}

/// Order placement orchestration over the catalog and the ledger.
pub struct TradingService {
    catalog: Arc<MarketDataService>,
    ledger: Arc<WalletLedger>,
    default_user: UserId,
}

impl TradingService {
    pub fn new(
        catalog: Arc<MarketDataService>,
        ledger: Arc<WalletLedger>,
        default_user: UserId,
    ) -> Self {
        Self {
            catalog,
            ledger,
            default_user,
        }
    }

    /// Place an order. Market orders execute immediately against the
    /// ledger; limit orders are recorded as pending with zero fee.
    pub async fn place_order(&self, request: PlaceOrderRequest) -> TradingResult<Order> {
        let mut missing = Vec::new();
        if request.token_id.is_none() {
            missing.push("tokenId");
        }
        if request.side.is_none() {
            missing.push("side");
        }
        if request.order_type.is_none() {
            missing.push("type");
        }
        if request.amount.is_none() {
            missing.push("amount");
        }
        if !missing.is_empty() {
            return Err(PlaceOrderError::MissingFields(missing));
        }

        let token_id = request.token_id.unwrap();
        let raw_side = request.side.unwrap();
        let raw_type = request.order_type.unwrap();
        let amount = request.amount.unwrap();

        let token =
            token_by_id(&token_id).ok_or_else(|| PlaceOrderError::UnknownToken(token_id.clone()))?;

        // The price resolution may hit the network; the catalog falls back
        // to baseline data on upstream failure, so None means the token
        // itself is outside the catalog.
        let market = self
            .catalog
            .market_data(&token_id)
            .await
            .ok_or(PlaceOrderError::MarketData)?;

        let side =
            OrderSide::from_str(&raw_side).map_err(|_| PlaceOrderError::InvalidSide(raw_side))?;
        let order_type =
            OrderType::from_str(&raw_type).map_err(|_| PlaceOrderError::InvalidType(raw_type))?;

        if order_type == OrderType::Limit && request.price.is_none() {
            return Err(PlaceOrderError::MissingLimitPrice);
        }
        if amount <= Decimal::ZERO {
            return Err(PlaceOrderError::NonPositiveAmount);
        }

        let slippage = request.slippage.unwrap_or(DEFAULT_SLIPPAGE_PCT);
        let execution_price = match order_type {
            OrderType::Market => market.price * slippage_multiplier(side, slippage),
            OrderType::Limit => request.price.unwrap_or(market.price),
        };

        let user_id = request.user_id.unwrap_or_else(|| self.default_user.clone());
        let is_market = order_type == OrderType::Market;
        let now = Utc::now();

        let mut order = Order {
            id: OrderId::generate(),
            user_id: user_id.clone(),
            token_id: token_id.clone(),
            side,
            order_type,
            status: if is_market {
                OrderStatus::Filled
            } else {
                OrderStatus::Pending
            },
            amount,
            price: request.price.unwrap_or(market.price),
            filled_amount: if is_market { amount } else { Decimal::ZERO },
            filled_price: if is_market {
                execution_price
            } else {
                Decimal::ZERO
            },
            fee: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };

        if is_market {
            let total_usd = amount * execution_price;
            let fee = total_usd * FEE_RATE;
            order.fee = fee;

            self.ledger
                .apply_trade(&user_id, side, token, amount, total_usd, fee)?;

            let transaction = transaction_from_order(&order, &token.symbol);
            self.ledger.record_transaction(&user_id, transaction);
        }

        self.ledger.record_order(&user_id, order.clone());

        info!(
            order = %order.id,
            user = %user_id,
            token = %order.token_id,
            side = %order.side,
            status = %order.status,
            "Order created"
        );

        Ok(order)
    }

    /// Estimate execution for a prospective trade without touching any
    /// wallet state.
    pub async fn quote(
        &self,
        token_id: &TokenId,
        side: OrderSide,
        amount: Decimal,
    ) -> TradingResult<Quote> {
        if token_by_id(token_id).is_none() {
            return Err(PlaceOrderError::UnknownToken(token_id.clone()));
        }

        let market = self
            .catalog
            .market_data(token_id)
            .await
            .ok_or(PlaceOrderError::MarketData)?;

        let estimated_price = market.price * slippage_multiplier(side, DEFAULT_SLIPPAGE_PCT);
        let estimated_total = amount * estimated_price;

        Ok(Quote {
            token_id: token_id.clone(),
            side,
            amount,
            price: market.price,
            estimated_price,
            estimated_total,
            estimated_fee: estimated_total * FEE_RATE,
            slippage: DEFAULT_SLIPPAGE_PCT,
            expires_at: Utc::now() + Duration::seconds(QUOTE_TTL_SECS),
        })
    }

    /// Cancel an order by id. No balance reversal ever happens: only
    /// market orders debit funds and those fill immediately.
    ///
    /// Orders outside the user's log still get a cancelled acknowledgement
    /// so the endpoint stays idempotent from the client's view.
    pub fn cancel_order(&self, user_id: &UserId, order_id: &OrderId) -> Result<Order, CancelAck> {
        match self
            .ledger
            .update_order_status(user_id, order_id, OrderStatus::Cancelled)
        {
            Some(order) => {
                info!(order = %order_id, user = %user_id, "Order cancelled");
                Ok(order)
            }
            None => Err(CancelAck {
                id: order_id.clone(),
                status: OrderStatus::Cancelled,
                updated_at: Utc::now(),
            }),
        }
    }
}

/// `1 ± slippage/100`: buys pay up, sells receive less.
fn slippage_multiplier(side: OrderSide, slippage_pct: Decimal) -> Decimal {
    let fraction = slippage_pct / Decimal::from(100);
    match side {
        OrderSide::Buy => Decimal::ONE + fraction,
        OrderSide::Sell => Decimal::ONE - fraction,
    }
}

/// Transaction record for a filled order. Amounts are signed by side.
fn transaction_from_order(order: &Order, symbol: &str) -> Transaction {
    let total = order.filled_amount * order.filled_price;
    let sign = Decimal::from(order.side.sign());

    Transaction {
        id: TransactionId::generate(),
        tx_type: TransactionType::Swap,
        token_id: order.token_id.clone(),
        symbol: symbol.to_string(),
        amount: order.filled_amount * sign,
        amount_usd: total * sign,
        fee: order.fee,
        tx_hash: synthetic_tx_hash(),
        status: TransactionStatus::Confirmed,
        created_at: Utc::now(),
    }
}
