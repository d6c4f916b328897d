//! Trading routes: order placement, cancellation, quotes.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use paperdex_core::{OrderId, OrderSide, TokenId, UserId};
use paperdex_trading::{PlaceOrderError, PlaceOrderRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::response::{created, success_with_message, ApiError, ErrorCode};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", post(place_order))
        .route("/order/{order_id}", delete(cancel_order))
        .route("/quote", get(get_quote))
}

async fn place_order(
    State(state): State<AppState>,
    Json(mut body): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.user_id.is_none() {
        body.user_id = Some(state.default_user.clone());
    }

    let order = state
        .trading
        .place_order(body)
        .await
        .map_err(place_order_error)?;

    Ok(created(order))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelQuery {
    user_id: Option<UserId>,
}

async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
    Query(query): Query<CancelQuery>,
) -> impl IntoResponse {
    let user = state.user_or_default(query.user_id);

    match state.trading.cancel_order(&user, &order_id) {
        Ok(order) => success_with_message(order, "Order cancelled successfully"),
        Err(ack) => success_with_message(ack, "Order cancelled successfully"),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteQuery {
    token_id: Option<TokenId>,
    side: Option<String>,
    amount: Option<Decimal>,
}

async fn get_quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(token_id), Some(side), Some(amount)) = (query.token_id, query.side, query.amount)
    else {
        return Err(ApiError::validation(
            "Missing required parameters: tokenId, side, amount",
        ));
    };

    let side: OrderSide = side.parse().map_err(|_| {
        ApiError::validation("Invalid order side").with_details(json!({
            "validValues": ["buy", "sell"],
        }))
    })?;

    let quote = state
        .trading
        .quote(&token_id, side, amount)
        .await
        .map_err(place_order_error)?;

    Ok(crate::response::success(quote))
}

/// Map trading failures onto the wire error taxonomy.
fn place_order_error(err: PlaceOrderError) -> ApiError {
    match err {
        PlaceOrderError::MissingFields(fields) => {
            ApiError::validation("Missing required fields")
                .with_details(json!({ "fields": fields }))
        }
        PlaceOrderError::InvalidSide(received) => ApiError::validation("Invalid order side")
            .with_details(json!({
                "received": received,
                "validValues": ["buy", "sell"],
            })),
        PlaceOrderError::InvalidType(received) => ApiError::validation("Invalid order type")
            .with_details(json!({
                "received": received,
                "validValues": ["market", "limit"],
            })),
        PlaceOrderError::MissingLimitPrice => {
            ApiError::validation("Price is required for limit orders")
        }
        PlaceOrderError::NonPositiveAmount => {
            ApiError::validation("Order amount must be positive")
        }
        PlaceOrderError::UnknownToken(token_id) => {
            ApiError::not_found(format!("Token '{token_id}' not found"))
        }
        PlaceOrderError::MarketData => ApiError::internal("Failed to get market data"),
        PlaceOrderError::Rejected(rejection) => {
            ApiError::new(ErrorCode::InsufficientBalance, rejection.to_string()).with_details(
                json!({
                    "required": rejection.required(),
                    "available": rejection.available(),
                }),
            )
        }
    }
}
