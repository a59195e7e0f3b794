use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::Period;
use super::{require_text, RequiredFields};

/// Analyst-style rating snapshot.
///
/// The vendor only serves the current snapshot, so each record is keyed by
/// the day it was fetched and carries the `TTM` period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    pub rating: Option<String>,
    pub overall_score: Option<i32>,
    pub discounted_cash_flow_score: Option<i32>,
    pub return_on_equity_score: Option<i32>,
    pub return_on_assets_score: Option<i32>,
    pub debt_to_equity_score: Option<i32>,
    pub price_to_earnings_score: Option<i32>,
    pub price_to_book_score: Option<i32>,
}

/// Altman Z and Piotroski scores with the inputs behind them.
///
/// Like [`Rating`], a snapshot keyed by the day it was fetched, period `TTM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialScores {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    pub reported_currency: Option<String>,
    pub altman_z_score: Option<f64>,
    pub piotroski_score: Option<i32>,
    pub working_capital: Option<f64>,
    pub total_assets: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub ebit: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub revenue: Option<f64>,
}

impl RequiredFields for FinancialScores {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for Rating {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}
