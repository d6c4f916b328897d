//! paperdex-api - HTTP API layer.
//!
//! Maps the REST surface onto the catalog, ledger, trading, and copy-trade
//! services:
//!
//! ```text
//! GET    /api/health
//! POST   /api/auth/login|register|logout      GET /api/auth/me
//! GET    /api/market/tokens[/{id}[/chart]]    GET /api/market/trending|gainers|losers
//! POST   /api/trading/order                   DELETE /api/trading/order/{id}
//! GET    /api/trading/quote
//! GET    /api/wallet/summary|balances|transactions|orders|orders/pending
//! POST   /api/wallet/reset
//! GET    /api/copytrade/traders[/{id}]|top|positions
//! POST/DELETE /api/copytrade/follow/{id}      PUT /api/copytrade/settings/{id}
//! ```
//!
//! All responses share the `{success, data|error, timestamp}` envelope from
//! [`response`]. Business failures are mapped to structured error codes at
//! this boundary; nothing below it panics on bad input.

pub mod response;
pub mod routes;
pub mod state;

pub use response::{ApiError, ErrorCode};
pub use state::AppState;

use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{extract::State, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", routes::auth::router())
        .nest("/api/market", routes::market::router())
        .nest("/api/trading", routes::trading::router())
        .nest("/api/wallet", routes::wallet::router())
        .nest("/api/copytrade", routes::copytrade::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness endpoint.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "uptime": state.started_at.elapsed().as_secs(),
    }))
}

/// Envelope-shaped 404 for unknown routes.
async fn not_found(uri: Uri) -> impl IntoResponse {
    ApiError::not_found(format!("The requested resource '{uri}' was not found"))
}
