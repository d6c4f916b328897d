//! String-backed identifiers.
//!
//! Newtype wrappers keep user ids, token ids, and record ids from being
//! mixed up in function signatures. Generated ids follow the
//! `{prefix}-{uuid_short}` format used across the platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a short prefixed identifier: `{prefix}-{first 8 uuid chars}`.
fn prefixed_id(prefix: &str) -> String {
    let uuid_short = &Uuid::new_v4().to_string()[..8];
    format!("{prefix}-{uuid_short}")
}

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a platform user.
    UserId
}

string_id! {
    /// Identifier of a catalog token (e.g. "sol", "bonk").
    TokenId
}

string_id! {
    /// Identifier of an order record.
    OrderId
}

string_id! {
    /// Identifier of a transaction record.
    TransactionId
}

string_id! {
    /// Identifier of a copy-trading leaderboard trader.
    TraderId
}

impl OrderId {
    /// Create a fresh order id (`order-{uuid_short}`).
    pub fn generate() -> Self {
        Self(prefixed_id("order"))
    }
}

impl TransactionId {
    /// Create a fresh transaction id (`tx-{uuid_short}`).
    pub fn generate() -> Self {
        Self(prefixed_id("tx"))
    }
}
