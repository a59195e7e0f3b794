use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockmate_core::records::Stored;
use stockmate_market_data::{Dividend, NewsArticle, StockSplit};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_dividends(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Vec<Stored<Dividend>>>> {
    Ok(Json(state.corporate_events_service.get_dividends(&symbol)?))
}

async fn get_splits(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Vec<Stored<StockSplit>>>> {
    Ok(Json(state.corporate_events_service.get_splits(&symbol)?))
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    limit: Option<i64>,
}

async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<NewsQuery>,
) -> ApiResult<Json<Vec<Stored<NewsArticle>>>> {
    Ok(Json(
        state
            .corporate_events_service
            .get_news(&symbol, query.limit)?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies/{symbol}/dividends", get(get_dividends))
        .route("/companies/{symbol}/splits", get(get_splits))
        .route("/companies/{symbol}/news", get(get_news))
}
