//! Transaction records.
//!
//! A transaction is an append-only record of a completed balance-affecting
//! event. Amounts are signed: positive for acquisitions, negative for
//! disposals; the USD amount carries the same sign.

use crate::error::CoreError;
use crate::ids::{TokenId, TransactionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of balance-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Swap,
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap => write!(f, "swap"),
            Self::Deposit => write!(f, "deposit"),
            Self::Withdraw => write!(f, "withdraw"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swap" => Ok(Self::Swap),
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(CoreError::InvalidTransactionType(other.to_string())),
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

impl FromStr for TransactionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "failed" => Ok(Self::Failed),
            other => Err(CoreError::InvalidTransactionStatus(other.to_string())),
        }
    }
}

/// Record of a completed balance-affecting event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub token_id: TokenId,
    pub symbol: String,
    /// Signed token quantity: positive for acquisition, negative for disposal.
    pub amount: Decimal,
    /// Signed USD notional, same sign convention as `amount`.
    pub amount_usd: Decimal,
    pub fee: Decimal,
    /// Synthetic transaction hash; nothing on chain ever sees it.
    pub tx_hash: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// Generate a synthetic transaction hash: `0x` followed by the hex digits
/// of a fresh UUID.
pub fn synthetic_tx_hash() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}
