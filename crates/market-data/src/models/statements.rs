//! Periodic financial records: statements, key metrics and financial ratios.
//!
//! Field names follow the vendor's camelCase spelling so records decode
//! straight from the response. Every figure is optional; the vendor omits
//! lines that do not apply to a company.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::Period;
use super::{require_text, RequiredFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub cost_of_revenue: Option<f64>,
    #[serde(default)]
    pub gross_profit: Option<f64>,
    #[serde(default)]
    pub research_and_development_expenses: Option<f64>,
    #[serde(default)]
    pub selling_general_and_administrative_expenses: Option<f64>,
    #[serde(default)]
    pub operating_expenses: Option<f64>,
    #[serde(default)]
    pub operating_income: Option<f64>,
    #[serde(default)]
    pub interest_expense: Option<f64>,
    #[serde(default)]
    pub ebitda: Option<f64>,
    #[serde(default)]
    pub income_before_tax: Option<f64>,
    #[serde(default)]
    pub income_tax_expense: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub eps_diluted: Option<f64>,
    #[serde(default)]
    pub weighted_average_shs_out: Option<f64>,
    #[serde(default)]
    pub weighted_average_shs_out_dil: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    #[serde(default)]
    pub short_term_investments: Option<f64>,
    #[serde(default)]
    pub net_receivables: Option<f64>,
    #[serde(default)]
    pub inventory: Option<f64>,
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    #[serde(default)]
    pub property_plant_equipment_net: Option<f64>,
    #[serde(default)]
    pub goodwill: Option<f64>,
    #[serde(default)]
    pub total_assets: Option<f64>,
    #[serde(default)]
    pub account_payables: Option<f64>,
    #[serde(default)]
    pub short_term_debt: Option<f64>,
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    #[serde(default)]
    pub long_term_debt: Option<f64>,
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    #[serde(default)]
    pub retained_earnings: Option<f64>,
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    #[serde(default)]
    pub total_debt: Option<f64>,
    #[serde(default)]
    pub net_debt: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub depreciation_and_amortization: Option<f64>,
    #[serde(default)]
    pub stock_based_compensation: Option<f64>,
    #[serde(default)]
    pub change_in_working_capital: Option<f64>,
    #[serde(default)]
    pub net_cash_provided_by_operating_activities: Option<f64>,
    #[serde(default)]
    pub investments_in_property_plant_and_equipment: Option<f64>,
    #[serde(default)]
    pub net_cash_provided_by_investing_activities: Option<f64>,
    #[serde(default)]
    pub common_stock_repurchased: Option<f64>,
    #[serde(default)]
    pub net_dividends_paid: Option<f64>,
    #[serde(default)]
    pub net_cash_provided_by_financing_activities: Option<f64>,
    #[serde(default)]
    pub net_change_in_cash: Option<f64>,
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
    #[serde(default)]
    pub capital_expenditure: Option<f64>,
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub enterprise_value: Option<f64>,
    #[serde(default)]
    pub ev_to_sales: Option<f64>,
    #[serde(default, rename = "evToEBITDA")]
    pub ev_to_ebitda: Option<f64>,
    #[serde(default, rename = "netDebtToEBITDA")]
    pub net_debt_to_ebitda: Option<f64>,
    #[serde(default)]
    pub current_ratio: Option<f64>,
    #[serde(default)]
    pub return_on_assets: Option<f64>,
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    #[serde(default)]
    pub return_on_invested_capital: Option<f64>,
    #[serde(default)]
    pub earnings_yield: Option<f64>,
    #[serde(default)]
    pub free_cash_flow_yield: Option<f64>,
    #[serde(default)]
    pub working_capital: Option<f64>,
    #[serde(default)]
    pub invested_capital: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Period,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub gross_profit_margin: Option<f64>,
    #[serde(default)]
    pub operating_profit_margin: Option<f64>,
    #[serde(default)]
    pub net_profit_margin: Option<f64>,
    #[serde(default)]
    pub current_ratio: Option<f64>,
    #[serde(default)]
    pub quick_ratio: Option<f64>,
    #[serde(default)]
    pub cash_ratio: Option<f64>,
    #[serde(default)]
    pub asset_turnover: Option<f64>,
    #[serde(default)]
    pub inventory_turnover: Option<f64>,
    #[serde(default)]
    pub price_to_earnings_ratio: Option<f64>,
    #[serde(default)]
    pub price_to_book_ratio: Option<f64>,
    #[serde(default)]
    pub price_to_sales_ratio: Option<f64>,
    #[serde(default)]
    pub price_to_free_cash_flow_ratio: Option<f64>,
    #[serde(default)]
    pub debt_to_assets_ratio: Option<f64>,
    #[serde(default)]
    pub debt_to_equity_ratio: Option<f64>,
    #[serde(default)]
    pub interest_coverage_ratio: Option<f64>,
    #[serde(default)]
    pub dividend_payout_ratio: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub book_value_per_share: Option<f64>,
    #[serde(default)]
    pub free_cash_flow_per_share: Option<f64>,
    #[serde(default)]
    pub effective_tax_rate: Option<f64>,
}

impl RequiredFields for IncomeStatement {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for BalanceSheet {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for CashFlowStatement {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for KeyMetrics {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for FinancialRatios {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_income_statement_from_vendor_row() {
        let statement: IncomeStatement = serde_json::from_value(json!({
            "date": "2024-09-28",
            "symbol": "AAPL",
            "reportedCurrency": "USD",
            "cik": "0000320193",
            "fiscalYear": "2024",
            "period": "FY",
            "revenue": 391035000000i64,
            "netIncome": 93736000000i64,
            "epsDiluted": 6.08
        }))
        .unwrap();

        assert_eq!(statement.period, Period::Fy);
        assert_eq!(statement.revenue, Some(391035000000.0));
        assert_eq!(statement.eps_diluted, Some(6.08));
        assert_eq!(statement.gross_profit, None);
    }

    #[test]
    fn test_statement_without_period_fails_to_decode() {
        let result = serde_json::from_value::<BalanceSheet>(json!({
            "date": "2024-09-28",
            "symbol": "AAPL"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_key_metrics_ebitda_spelling() {
        let metrics: KeyMetrics = serde_json::from_value(json!({
            "symbol": "AAPL",
            "date": "2024-09-28",
            "period": "FY",
            "evToEBITDA": 26.1
        }))
        .unwrap();
        assert_eq!(metrics.ev_to_ebitda, Some(26.1));
    }

    #[test]
    fn test_financial_ratios_from_vendor_row() {
        let ratios: FinancialRatios = serde_json::from_value(json!({
            "symbol": "AAPL",
            "date": "2024-09-28",
            "fiscalYear": "2024",
            "period": "FY",
            "reportedCurrency": "USD",
            "grossProfitMargin": 0.462,
            "priceToEarningsRatio": 37.29,
            "debtToEquityRatio": 1.87,
            "enterpriseValueMultiple": 26.5
        }))
        .unwrap();

        assert_eq!(ratios.period, Period::Fy);
        assert_eq!(ratios.gross_profit_margin, Some(0.462));
        assert_eq!(ratios.price_to_earnings_ratio, Some(37.29));
        assert_eq!(ratios.dividend_yield, None);
    }
}
