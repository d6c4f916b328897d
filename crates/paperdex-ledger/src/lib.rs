//! paperdex-ledger - In-memory wallet ledger.
//!
//! Owns per-user simulated cash and token holdings and is the only path
//! through which balances change. Guarantees:
//!
//! - `usd_balance >= 0` after any committed mutation
//! - no holding amount ever goes negative; a holding drained to zero is
//!   removed from the map entirely
//! - transaction and order logs stay capped at 100 entries, newest first
//! - wallet creation is lazy and idempotent (fixed default funding)
//!
//! Mutations for one user are serialized by a per-wallet mutex, so two
//! concurrent orders cannot jointly overdraw a balance. Nothing is
//! persisted; a process restart resets every wallet.

pub mod ledger;
pub mod rejection;
pub mod wallet;

pub use ledger::{StoreStats, WalletLedger};
pub use rejection::TradeRejection;
pub use wallet::{
    AssetHolding, Wallet, WalletBalance, WalletSummary, DEFAULT_SOL_HOLDING, DEFAULT_USD_BALANCE,
    HISTORY_CAP,
};
