//! End-to-end router tests: real services behind the HTTP surface, no
//! network. Market data runs in simulated mode.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use paperdex_api::{create_router, AppState};
use paperdex_catalog::{MarketDataMode, MarketDataService};
use paperdex_core::{PriceSource, UserId};
use paperdex_ledger::WalletLedger;
use paperdex_trading::TradingService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let catalog = Arc::new(
        MarketDataService::new(MarketDataMode::Simulated, "http://unused.invalid").unwrap(),
    );
    let prices: Arc<dyn PriceSource> = catalog.clone();
    let ledger = Arc::new(WalletLedger::new(prices));
    let trading = Arc::new(TradingService::new(
        catalog.clone(),
        ledger.clone(),
        UserId::from("user-1"),
    ));

    create_router(AppState::new(
        catalog,
        ledger,
        trading,
        UserId::from("user-1"),
    ))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body.get("uptime").is_some());
}

#[tokio::test]
async fn unknown_route_gets_error_envelope() {
    let app = test_app();
    let (status, body) = get(&app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn market_order_fills_and_moves_the_wallet() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trading/order",
        Some(json!({
            "tokenId": "jup",
            "side": "buy",
            "type": "market",
            "amount": 100,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let order = &body["data"];
    assert_eq!(order["status"], "filled");
    assert_eq!(order["tokenId"], "jup");
    assert_eq!(order["filledAmount"].as_f64().unwrap(), 100.0);
    assert!(order["fee"].as_f64().unwrap() > 0.0);

    // The holding shows up in balances.
    let (status, body) = get(&app, "/api/wallet/balances").await;
    assert_eq!(status, StatusCode::OK);
    let balances = body["data"].as_array().unwrap();
    assert!(balances.iter().any(|b| b["tokenId"] == "jup"));

    // And a confirmed transaction was recorded.
    let (_, body) = get(&app, "/api/wallet/transactions").await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "swap");
    assert_eq!(items[0]["status"], "confirmed");
    assert!(items[0]["txHash"].as_str().unwrap().starts_with("0x"));

    // Cash went down from the default 10,000.
    let (_, body) = get(&app, "/api/wallet/summary").await;
    assert!(body["data"]["availableUsd"].as_f64().unwrap() < 10_000.0);
}

#[tokio::test]
async fn insufficient_balance_is_a_structured_rejection() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trading/order",
        Some(json!({
            "tokenId": "sol",
            "side": "buy",
            "type": "market",
            "amount": 1000,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INSUFFICIENT_BALANCE");
    assert!(body["error"]["details"]["required"].as_f64().unwrap() > 10_000.0);
    assert_eq!(
        body["error"]["details"]["available"].as_f64().unwrap(),
        10_000.0
    );

    // The wallet is untouched.
    let (_, body) = get(&app, "/api/wallet/summary").await;
    assert_eq!(body["data"]["availableUsd"].as_f64().unwrap(), 10_000.0);

    let (_, body) = get(&app, "/api/wallet/orders").await;
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_order_fields_are_listed() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/trading/order", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["details"]["fields"],
        json!(["tokenId", "side", "type", "amount"])
    );
}

#[tokio::test]
async fn unknown_token_is_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trading/order",
        Some(json!({
            "tokenId": "doge",
            "side": "buy",
            "type": "market",
            "amount": 1,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn limit_order_stays_pending_until_cancelled() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trading/order",
        Some(json!({
            "tokenId": "wif",
            "side": "sell",
            "type": "limit",
            "amount": 2,
            "price": 2.6,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["fee"].as_f64().unwrap(), 0.0);

    // Limit orders never touch the balance.
    let (_, body) = get(&app, "/api/wallet/summary").await;
    assert_eq!(body["data"]["availableUsd"].as_f64().unwrap(), 10_000.0);

    let (_, body) = get(&app, "/api/wallet/orders/pending").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/trading/order/{order_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");

    let (_, body) = get(&app, "/api/wallet/orders/pending").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn cancelling_unknown_order_still_acknowledges() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/trading/order/order-nonexistent",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");
}

#[tokio::test]
async fn reset_restores_default_funding() {
    let app = test_app();

    send(
        &app,
        Method::POST,
        "/api/trading/order",
        Some(json!({
            "tokenId": "jup",
            "side": "buy",
            "type": "market",
            "amount": 50,
        })),
    )
    .await;

    let (status, body) = send(&app, Method::POST, "/api/wallet/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availableUsd"].as_f64().unwrap(), 10_000.0);

    // Only the default SOL holding remains.
    let balances = body["data"]["balances"].as_array().unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0]["tokenId"], "sol");
    assert_eq!(balances[0]["balance"].as_f64().unwrap(), 5.0);

    let (_, body) = get(&app, "/api/wallet/transactions").await;
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn pagination_limit_is_clamped_to_100() {
    let app = test_app();

    let (status, body) = get(&app, "/api/wallet/transactions?limit=500&page=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["limit"], 100);
    assert_eq!(body["data"]["pagination"]["page"], 1);
}

#[tokio::test]
async fn invalid_transaction_filter_is_rejected() {
    let app = test_app();

    let (status, body) = get(&app, "/api/wallet/transactions?type=mint").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn token_listing_search_and_detail() {
    let app = test_app();

    let (status, body) = get(&app, "/api/market/tokens").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"]["pagination"]["total"], 8);

    let (_, body) = get(&app, "/api/market/tokens?search=bonk").await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["symbol"], "BONK");

    let (status, body) = get(&app, "/api/market/tokens/sol").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["symbol"], "SOL");
    assert!(body["data"]["market"]["price"].as_f64().unwrap() > 0.0);

    let (status, _) = get(&app, "/api/market/tokens/doge").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chart_validates_time_frame_and_clamps_count() {
    let app = test_app();

    let (status, body) = get(&app, "/api/market/tokens/sol/chart?timeFrame=2h").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = get(&app, "/api/market/tokens/sol/chart?timeFrame=1h&count=3").await;
    assert_eq!(status, StatusCode::OK);
    // Count below the floor of 10 is clamped up.
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let (_, body) = get(&app, "/api/market/tokens/sol/chart").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn quote_estimates_without_mutating() {
    let app = test_app();

    let (status, body) = get(&app, "/api/trading/quote?tokenId=jup&side=buy&amount=100").await;
    assert_eq!(status, StatusCode::OK);
    let quote = &body["data"];
    assert!(quote["estimatedPrice"].as_f64().unwrap() > quote["price"].as_f64().unwrap());
    assert!(quote["estimatedFee"].as_f64().unwrap() > 0.0);

    let (status, _) = get(&app, "/api/trading/quote?tokenId=jup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_accepts_anyone_and_register_rejects_duplicates() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"email": "someone@example.com", "password": "whatever"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["displayName"], "someone");
    assert!(body["data"]["tokens"]["accessToken"]
        .as_str()
        .unwrap()
        .starts_with("access-"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": "alice@example.com",
            "password": "secret1",
            "confirmPassword": "secret1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "email": "fresh@example.com",
            "password": "secret1",
            "confirmPassword": "secret1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn me_requires_a_bearer_token() {
    let app = test_app();

    let (status, body) = get(&app, "/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_ERROR");

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer anything")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn copytrade_surface_serves_mock_data() {
    let app = test_app();

    let (status, body) = get(&app, "/api/copytrade/traders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 6);

    let (_, body) = get(&app, "/api/copytrade/traders?verified=true").await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 4);

    let (_, body) = get(&app, "/api/copytrade/top").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let (status, body) = send(&app, Method::POST, "/api/copytrade/follow/trader-1", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(body["data"]["trader"]["displayName"], "SolanaWhale");

    let (status, _) = send(&app, Method::POST, "/api/copytrade/follow/trader-99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/api/copytrade/positions").await;
    assert_eq!(body["data"]["summary"]["total"], 3);
    assert_eq!(body["data"]["summary"]["totalPnl"].as_f64().unwrap(), 168.0);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/copytrade/settings/trader-2",
        Some(json!({"copyRatio": 0.25})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["copyRatio"].as_f64().unwrap(), 0.25);
    assert_eq!(body["data"]["traderId"], "trader-2");
}
