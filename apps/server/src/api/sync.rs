use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use stockmate_core::sync::{SyncOptions, SyncReport};
use stockmate_market_data::{DataKind, Period};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Body of a sync request. Every field is optional, as is the body itself.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SyncRequest {
    #[serde(default)]
    kinds: Vec<DataKind>,
    period: Option<Period>,
    limit: Option<u32>,
}

async fn sync_company(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    body: Bytes,
) -> ApiResult<Json<SyncReport>> {
    let request: SyncRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SyncRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid sync request: {}", e)))?
    };

    let options = SyncOptions {
        period: request.period,
        limit: request.limit,
    };
    let report = state
        .sync_service
        .sync_symbol(&symbol, &request.kinds, &options)
        .await?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/companies/{symbol}/sync", post(sync_company))
}
