//! Trade rejection outcomes.
//!
//! Insufficient balance and insufficient holdings are expected business
//! outcomes, not faults: the ledger reports them as values and callers
//! translate them into user-facing errors. A rejected trade leaves the
//! wallet untouched.

use paperdex_core::TokenId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a trade was not applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeRejection {
    /// Buy cost (notional + fee) exceeds the available cash balance.
    #[error("Insufficient USD balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },

    /// Sell quantity exceeds the held amount (possibly zero).
    #[error("Insufficient {token_id} balance: required {required}, available {available}")]
    InsufficientHolding {
        token_id: TokenId,
        required: Decimal,
        available: Decimal,
    },
}

impl TradeRejection {
    /// Required amount named by the rejection.
    pub fn required(&self) -> Decimal {
        match self {
            Self::InsufficientBalance { required, .. }
            | Self::InsufficientHolding { required, .. } => *required,
        }
    }

    /// Available amount named by the rejection.
    pub fn available(&self) -> Decimal {
        match self {
            Self::InsufficientBalance { available, .. }
            | Self::InsufficientHolding { available, .. } => *available,
        }
    }
}
