use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockmate_core::records::Stored;
use stockmate_market_data::{Grading, PriceTarget};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
struct GradingsQuery {
    limit: Option<i64>,
}

async fn get_gradings(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<GradingsQuery>,
) -> ApiResult<Json<Vec<Stored<Grading>>>> {
    Ok(Json(state.analyst_service.get_gradings(&symbol, query.limit)?))
}

async fn get_price_targets(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Vec<Stored<PriceTarget>>>> {
    Ok(Json(state.analyst_service.get_price_targets(&symbol)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies/{symbol}/gradings", get(get_gradings))
        .route("/companies/{symbol}/price-targets", get(get_price_targets))
}
