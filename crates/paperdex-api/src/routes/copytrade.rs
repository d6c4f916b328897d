//! Copy-trading routes: leaderboard, positions, follow/unfollow, settings.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use paperdex_copytrade::{
    filter_open_positions, filter_traders_by_tag, filter_verified_traders, mock_positions,
    mock_traders, positions_by_user, search_traders, sort_traders_by_field, total_pnl,
    trader_by_id, CopySettings, CopySettingsUpdate, PositionStatus, Trader, TraderSortField,
};
use paperdex_core::{Paginated, PaginationParams, TraderId, UserId};
use serde::Deserialize;
use serde_json::json;

use crate::response::{created_with_message, success, success_with_message, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/traders", get(list_traders))
        .route("/traders/{trader_id}", get(get_trader))
        .route("/top", get(top_traders))
        .route("/positions", get(list_positions))
        .route("/follow/{trader_id}", post(follow_trader).delete(unfollow_trader))
        .route("/settings/{trader_id}", put(update_settings))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradersQuery {
    page: Option<u32>,
    limit: Option<u32>,
    sort_by: Option<String>,
    order: Option<String>,
    search: Option<String>,
    tag: Option<String>,
    verified: Option<String>,
}

async fn list_traders(Query(query): Query<TradersQuery>) -> impl IntoResponse {
    let params = PaginationParams::sanitize(query.page, query.limit);

    let mut traders: Vec<&Trader> = mock_traders().iter().collect();

    if let Some(search) = query.search.as_deref() {
        traders = search_traders(&traders, search);
    }
    if let Some(tag) = query.tag.as_deref() {
        traders = filter_traders_by_tag(&traders, tag);
    }
    if query.verified.as_deref() == Some("true") {
        traders = filter_verified_traders(&traders);
    }

    // Unknown sort fields leave leaderboard order untouched.
    if let Ok(field) = query
        .sort_by
        .as_deref()
        .unwrap_or("pnlPercent7d")
        .parse::<TraderSortField>()
    {
        let descending = query.order.as_deref() != Some("asc");
        sort_traders_by_field(&mut traders, field, descending);
    }

    let owned: Vec<Trader> = traders.into_iter().cloned().collect();
    success(Paginated::from_slice(&owned, params))
}

async fn get_trader(Path(trader_id): Path<TraderId>) -> Result<impl IntoResponse, ApiError> {
    let trader = trader_by_id(&trader_id)
        .ok_or_else(|| ApiError::not_found(format!("Trader '{trader_id}' not found")))?;
    Ok(success(trader))
}

async fn top_traders() -> impl IntoResponse {
    let mut traders: Vec<&Trader> = mock_traders().iter().collect();
    sort_traders_by_field(&mut traders, TraderSortField::PnlPercent7d, true);
    traders.truncate(5);
    success(traders)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionsQuery {
    user_id: Option<UserId>,
    status: Option<String>,
}

async fn list_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionsQuery>,
) -> impl IntoResponse {
    let user = state.user_or_default(query.user_id);

    let mut positions = positions_by_user(mock_positions(), &user);
    match query.status.as_deref() {
        Some("open") => positions = filter_open_positions(&positions),
        Some("closed") => positions.retain(|p| p.status == PositionStatus::Closed),
        _ => {}
    }

    let open_count = filter_open_positions(&positions).len();
    let pnl = total_pnl(&positions);

    success(json!({
        "positions": positions,
        "summary": {
            "total": positions.len(),
            "openCount": open_count,
            "totalPnl": pnl,
        },
    }))
}

async fn follow_trader(Path(trader_id): Path<TraderId>) -> Result<impl IntoResponse, ApiError> {
    let trader = trader_by_id(&trader_id)
        .ok_or_else(|| ApiError::not_found(format!("Trader '{trader_id}' not found")))?;

    let settings = CopySettings::default_for(trader_id).activated();

    let mut data = serde_json::to_value(&settings).unwrap_or_default();
    data["trader"] = serde_json::to_value(trader).unwrap_or_default();

    Ok(created_with_message(
        data,
        "Successfully started following trader",
    ))
}

async fn unfollow_trader(Path(trader_id): Path<TraderId>) -> Result<impl IntoResponse, ApiError> {
    if trader_by_id(&trader_id).is_none() {
        return Err(ApiError::not_found(format!(
            "Trader '{trader_id}' not found"
        )));
    }

    Ok(success_with_message(
        serde_json::Value::Null,
        "Successfully stopped following trader",
    ))
}

async fn update_settings(
    Path(trader_id): Path<TraderId>,
    Json(update): Json<CopySettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    if trader_by_id(&trader_id).is_none() {
        return Err(ApiError::not_found(format!(
            "Trader '{trader_id}' not found"
        )));
    }

    let settings = CopySettings::default_for(trader_id).merged(update);
    Ok(success_with_message(
        settings,
        "Settings updated successfully",
    ))
}
