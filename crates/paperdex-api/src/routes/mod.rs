//! Route handlers, one module per API area.

pub mod auth;
pub mod copytrade;
pub mod market;
pub mod trading;
pub mod wallet;
