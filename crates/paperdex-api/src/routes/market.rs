//! Market routes: token listings, detail, charts, movers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use paperdex_catalog::{
    filter_tokens_by_query, sort_tokens_by, token_by_id, token_chart, SortOrder, TokenSortField,
};
use paperdex_core::{Paginated, PaginationParams, TimeFrame, TokenId, TokenWithMarket};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::response::{success, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tokens", get(list_tokens))
        .route("/tokens/{token_id}", get(get_token))
        .route("/tokens/{token_id}/chart", get(get_chart))
        .route("/trending", get(get_trending))
        .route("/gainers", get(get_gainers))
        .route("/losers", get(get_losers))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokensQuery {
    page: Option<u32>,
    limit: Option<u32>,
    sort_by: Option<String>,
    order: Option<String>,
    search: Option<String>,
}

async fn list_tokens(
    State(state): State<AppState>,
    Query(query): Query<TokensQuery>,
) -> impl IntoResponse {
    let params = PaginationParams::sanitize(query.page, query.limit);

    let mut tokens: Vec<TokenWithMarket> = state.catalog.all_with_market().await;
    if let Some(search) = query.search.as_deref() {
        tokens = filter_tokens_by_query(tokens, search);
    }

    let sort_field = query
        .sort_by
        .as_deref()
        .unwrap_or("marketCap")
        .parse::<TokenSortField>();
    let order = query
        .order
        .as_deref()
        .and_then(|o| o.parse::<SortOrder>().ok())
        .unwrap_or_default();

    // Unknown sort fields leave the list in catalog order.
    if let Ok(field) = sort_field {
        sort_tokens_by(&mut tokens, field, order);
    }

    success(Paginated::from_slice(&tokens, params))
}

async fn get_token(
    State(state): State<AppState>,
    Path(token_id): Path<TokenId>,
) -> Result<impl IntoResponse, ApiError> {
    if token_by_id(&token_id).is_none() {
        return Err(ApiError::not_found(format!(
            "Token '{token_id}' not found"
        )));
    }

    let token = state
        .catalog
        .token_with_market(&token_id)
        .await
        .ok_or_else(|| ApiError::internal("Failed to get market data"))?;

    Ok(success(token))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartQuery {
    time_frame: Option<String>,
    count: Option<usize>,
}

async fn get_chart(
    Path(token_id): Path<TokenId>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if token_by_id(&token_id).is_none() {
        return Err(ApiError::not_found(format!(
            "Token '{token_id}' not found"
        )));
    }

    let time_frame = match query.time_frame.as_deref() {
        None => TimeFrame::H1,
        Some(raw) => raw.parse::<TimeFrame>().map_err(|_| {
            ApiError::validation("Invalid time frame").with_details(json!({
                "validValues": TimeFrame::all()
                    .iter()
                    .map(|tf| tf.to_string())
                    .collect::<Vec<_>>(),
            }))
        })?,
    };

    let count = query.count.unwrap_or(100).clamp(10, 500);

    Ok(success(token_chart(&token_id, time_frame, count)))
}

async fn get_trending(State(state): State<AppState>) -> impl IntoResponse {
    let mut tokens = state.catalog.all_with_market().await;
    sort_tokens_by(
        &mut tokens,
        TokenSortField::PriceChangePercent24h,
        SortOrder::Desc,
    );
    tokens.truncate(5);
    success(tokens)
}

async fn get_gainers(State(state): State<AppState>) -> impl IntoResponse {
    let mut tokens = state.catalog.all_with_market().await;
    sort_tokens_by(
        &mut tokens,
        TokenSortField::PriceChangePercent24h,
        SortOrder::Desc,
    );
    tokens.retain(|t| t.market.price_change_percent_24h > Decimal::ZERO);
    tokens.truncate(10);
    success(tokens)
}

async fn get_losers(State(state): State<AppState>) -> impl IntoResponse {
    let mut tokens = state.catalog.all_with_market().await;
    sort_tokens_by(
        &mut tokens,
        TokenSortField::PriceChangePercent24h,
        SortOrder::Asc,
    );
    tokens.retain(|t| t.market.price_change_percent_24h < Decimal::ZERO);
    tokens.truncate(10);
    success(tokens)
}
