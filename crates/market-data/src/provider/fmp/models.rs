//! Vendor payloads that need reshaping before they become typed records.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{require_text, FinancialScores, Period, PriceTarget, Rating, RequiredFields};

/// Row from `ratings-snapshot`. Carries no date of its own.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RatingSnapshot {
    symbol: String,
    rating: Option<String>,
    overall_score: Option<i32>,
    discounted_cash_flow_score: Option<i32>,
    return_on_equity_score: Option<i32>,
    return_on_assets_score: Option<i32>,
    debt_to_equity_score: Option<i32>,
    price_to_earnings_score: Option<i32>,
    price_to_book_score: Option<i32>,
}

impl RatingSnapshot {
    pub(super) fn into_rating(self, as_of: NaiveDate) -> Rating {
        Rating {
            symbol: self.symbol,
            date: as_of,
            period: Period::Ttm,
            rating: self.rating,
            overall_score: self.overall_score,
            discounted_cash_flow_score: self.discounted_cash_flow_score,
            return_on_equity_score: self.return_on_equity_score,
            return_on_assets_score: self.return_on_assets_score,
            debt_to_equity_score: self.debt_to_equity_score,
            price_to_earnings_score: self.price_to_earnings_score,
            price_to_book_score: self.price_to_book_score,
        }
    }
}

impl RequiredFields for RatingSnapshot {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

/// Row from `financial-scores`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScoresSnapshot {
    symbol: String,
    #[serde(default)]
    reported_currency: Option<String>,
    #[serde(default)]
    altman_z_score: Option<f64>,
    #[serde(default)]
    piotroski_score: Option<i32>,
    #[serde(default)]
    working_capital: Option<f64>,
    #[serde(default)]
    total_assets: Option<f64>,
    #[serde(default)]
    retained_earnings: Option<f64>,
    #[serde(default)]
    ebit: Option<f64>,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    total_liabilities: Option<f64>,
    #[serde(default)]
    revenue: Option<f64>,
}

impl ScoresSnapshot {
    pub(super) fn into_scores(self, as_of: NaiveDate) -> FinancialScores {
        FinancialScores {
            symbol: self.symbol,
            date: as_of,
            period: Period::Ttm,
            reported_currency: self.reported_currency,
            altman_z_score: self.altman_z_score,
            piotroski_score: self.piotroski_score,
            working_capital: self.working_capital,
            total_assets: self.total_assets,
            retained_earnings: self.retained_earnings,
            ebit: self.ebit,
            market_cap: self.market_cap,
            total_liabilities: self.total_liabilities,
            revenue: self.revenue,
        }
    }
}

impl RequiredFields for ScoresSnapshot {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

/// Row from `price-target-consensus`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceTargetConsensus {
    symbol: String,
    #[serde(default)]
    target_high: Option<f64>,
    #[serde(default)]
    target_low: Option<f64>,
    #[serde(default)]
    target_consensus: Option<f64>,
    #[serde(default)]
    target_median: Option<f64>,
}

impl PriceTargetConsensus {
    pub(super) fn into_price_target(self, as_of: NaiveDate) -> PriceTarget {
        PriceTarget {
            symbol: self.symbol,
            date: as_of,
            target_high: self.target_high,
            target_low: self.target_low,
            target_consensus: self.target_consensus,
            target_median: self.target_median,
        }
    }
}

impl RequiredFields for PriceTargetConsensus {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}
