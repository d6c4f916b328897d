//! Wallet routes: summary, balances, history projections, reset.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use paperdex_core::{
    OrderStatus, Paginated, PaginationParams, TransactionStatus, TransactionType, UserId,
};
use serde::Deserialize;
use serde_json::json;

use crate::response::{success, success_with_message, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/balances", get(get_balances))
        .route("/transactions", get(get_transactions))
        .route("/orders", get(get_orders))
        .route("/orders/pending", get(get_pending_orders))
        .route("/reset", post(reset_wallet))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserQuery {
    user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalancesQuery {
    user_id: Option<UserId>,
    order: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionsQuery {
    user_id: Option<UserId>,
    page: Option<u32>,
    limit: Option<u32>,
    #[serde(rename = "type")]
    tx_type: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrdersQuery {
    user_id: Option<UserId>,
    page: Option<u32>,
    limit: Option<u32>,
    status: Option<String>,
}

async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> impl IntoResponse {
    let user = state.user_or_default(query.user_id);
    let summary = state.ledger.summary(&user).await;
    success(summary)
}

async fn get_balances(
    State(state): State<AppState>,
    Query(query): Query<BalancesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_or_default(query.user_id);

    let mut balances = state.ledger.list_balances(&user).await;
    if let Some(order) = query.order.as_deref() {
        match order {
            "desc" => {}
            "asc" => balances.reverse(),
            other => {
                return Err(ApiError::validation("Invalid sort order").with_details(json!({
                    "received": other,
                    "validValues": ["asc", "desc"],
                })))
            }
        }
    }

    Ok(success(balances))
}

async fn get_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_or_default(query.user_id);
    let params = PaginationParams::sanitize(query.page, query.limit);

    let tx_type = query
        .tx_type
        .as_deref()
        .map(|s| s.parse::<TransactionType>())
        .transpose()
        .map_err(|_| {
            ApiError::validation("Invalid transaction type").with_details(json!({
                "validValues": ["swap", "deposit", "withdraw"],
            }))
        })?;
    let status = query
        .status
        .as_deref()
        .map(|s| s.parse::<TransactionStatus>())
        .transpose()
        .map_err(|_| {
            ApiError::validation("Invalid transaction status").with_details(json!({
                "validValues": ["pending", "confirmed", "failed"],
            }))
        })?;

    let transactions = state.ledger.transactions(&user, tx_type, status);
    Ok(success(Paginated::from_slice(&transactions, params)))
}

async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_or_default(query.user_id);
    let params = PaginationParams::sanitize(query.page, query.limit);

    let status = query
        .status
        .as_deref()
        .map(|s| s.parse::<OrderStatus>())
        .transpose()
        .map_err(|_| {
            ApiError::validation("Invalid order status").with_details(json!({
                "validValues": ["pending", "filled", "cancelled"],
            }))
        })?;

    let orders = state.ledger.orders(&user, status);
    Ok(success(Paginated::from_slice(&orders, params)))
}

async fn get_pending_orders(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> impl IntoResponse {
    let user = state.user_or_default(query.user_id);
    success(state.ledger.pending_orders(&user))
}

async fn reset_wallet(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> impl IntoResponse {
    let user = state.user_or_default(query.user_id);
    state.ledger.reset(&user);

    // Recreate immediately so the response shows the default funding.
    let summary = state.ledger.summary(&user).await;
    success_with_message(summary, "Wallet reset to defaults")
}
