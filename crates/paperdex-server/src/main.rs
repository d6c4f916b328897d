//! paperdex API server - Entry Point
//!
//! Wires the token catalog, wallet ledger, and trading services together
//! and serves the REST API. All state is in-memory; restarting the
//! process resets every wallet to its default funding.

use anyhow::Result;
use clap::Parser;
use paperdex_api::AppState;
use paperdex_catalog::MarketDataService;
use paperdex_core::{PriceSource, UserId};
use paperdex_ledger::WalletLedger;
use paperdex_trading::TradingService;
use std::sync::Arc;
use tracing::info;

mod config;

use config::AppConfig;

/// paperdex paper-trading API server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PAPERDEX_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    paperdex_telemetry::init_logging()?;

    info!("Starting paperdex server v{}", env!("CARGO_PKG_VERSION"));

    let config = match args.config {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::load()?,
    };
    info!(
        mode = ?config.market_data.mode,
        addr = %config.bind_addr(),
        "Configuration loaded"
    );

    let catalog = Arc::new(MarketDataService::new(
        config.market_data.mode,
        config.market_data.dexscreener_base_url.clone(),
    )?);
    let prices: Arc<dyn PriceSource> = catalog.clone();
    let ledger = Arc::new(WalletLedger::new(prices));

    let default_user = UserId::from(config.demo_user_id.as_str());
    let trading = Arc::new(TradingService::new(
        catalog.clone(),
        ledger.clone(),
        default_user.clone(),
    ));

    let state = AppState::new(catalog, ledger, trading, default_user);
    let app = paperdex_api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
