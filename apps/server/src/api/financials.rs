use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockmate_core::financials::{StatementKind, StatementRows};
use stockmate_market_data::Period;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Default, Deserialize)]
struct PeriodQuery {
    period: Option<String>,
}

impl PeriodQuery {
    fn period(&self) -> ApiResult<Option<Period>> {
        Ok(self.period.as_deref().map(str::parse::<Period>).transpose()?)
    }
}

fn statements(
    state: &AppState,
    symbol: &str,
    kind: StatementKind,
    period: Option<Period>,
) -> ApiResult<Json<StatementRows>> {
    Ok(Json(
        state
            .financials_service
            .get_statements(symbol, kind, period)?,
    ))
}

async fn get_income_statements(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::IncomeStatement, query.period()?)
}

async fn get_balance_sheets(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::BalanceSheet, query.period()?)
}

async fn get_cash_flows(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::CashFlow, query.period()?)
}

async fn get_key_metrics(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::KeyMetrics, query.period()?)
}

async fn get_financial_ratios(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::FinancialRatios, query.period()?)
}

async fn get_financial_scores(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::FinancialScores, None)
}

async fn get_ratings(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StatementRows>> {
    statements(&state, &symbol, StatementKind::Rating, None)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies/{symbol}/income-statement", get(get_income_statements))
        .route("/companies/{symbol}/balance-sheet", get(get_balance_sheets))
        .route("/companies/{symbol}/cash-flow", get(get_cash_flows))
        .route("/companies/{symbol}/key-metrics", get(get_key_metrics))
        .route("/companies/{symbol}/financial-ratios", get(get_financial_ratios))
        .route("/companies/{symbol}/financial-scores", get(get_financial_scores))
        .route("/companies/{symbol}/ratings", get(get_ratings))
}
