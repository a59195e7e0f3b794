use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockmate_core::companies::Company;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_companies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Company>>> {
    Ok(Json(state.company_service.list_companies()?))
}

async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Company>> {
    Ok(Json(state.company_service.get_company(&symbol)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/companies/{symbol}", get(get_company))
}
