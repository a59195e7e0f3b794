//! Database models for the periodic financial tables.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use stockmate_core::Result;
use stockmate_market_data::{
    BalanceSheet, CashFlowStatement, FinancialRatios, FinancialScores, IncomeStatement, KeyMetrics,
    Rating,
};

use crate::records::{parse_period, RowMeta};

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::income_statements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct IncomeStatementDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub reported_currency: Option<String>,
    pub fiscal_year: Option<String>,
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub research_and_development_expenses: Option<f64>,
    pub selling_general_and_administrative_expenses: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub operating_income: Option<f64>,
    pub interest_expense: Option<f64>,
    pub ebitda: Option<f64>,
    pub income_before_tax: Option<f64>,
    pub income_tax_expense: Option<f64>,
    pub net_income: Option<f64>,
    pub eps: Option<f64>,
    pub eps_diluted: Option<f64>,
    pub weighted_average_shs_out: Option<f64>,
    pub weighted_average_shs_out_dil: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl IncomeStatementDB {
    pub fn new(record: &IncomeStatement, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            fiscal_year: record.fiscal_year.clone(),
            revenue: record.revenue,
            cost_of_revenue: record.cost_of_revenue,
            gross_profit: record.gross_profit,
            research_and_development_expenses: record.research_and_development_expenses,
            selling_general_and_administrative_expenses: record.selling_general_and_administrative_expenses,
            operating_expenses: record.operating_expenses,
            operating_income: record.operating_income,
            interest_expense: record.interest_expense,
            ebitda: record.ebitda,
            income_before_tax: record.income_before_tax,
            income_tax_expense: record.income_tax_expense,
            net_income: record.net_income,
            eps: record.eps,
            eps_diluted: record.eps_diluted,
            weighted_average_shs_out: record.weighted_average_shs_out,
            weighted_average_shs_out_dil: record.weighted_average_shs_out_dil,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<IncomeStatement> {
        Ok(IncomeStatement {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            fiscal_year: self.fiscal_year.clone(),
            revenue: self.revenue,
            cost_of_revenue: self.cost_of_revenue,
            gross_profit: self.gross_profit,
            research_and_development_expenses: self.research_and_development_expenses,
            selling_general_and_administrative_expenses: self.selling_general_and_administrative_expenses,
            operating_expenses: self.operating_expenses,
            operating_income: self.operating_income,
            interest_expense: self.interest_expense,
            ebitda: self.ebitda,
            income_before_tax: self.income_before_tax,
            income_tax_expense: self.income_tax_expense,
            net_income: self.net_income,
            eps: self.eps,
            eps_diluted: self.eps_diluted,
            weighted_average_shs_out: self.weighted_average_shs_out,
            weighted_average_shs_out_dil: self.weighted_average_shs_out_dil,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::balance_sheets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct BalanceSheetDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub reported_currency: Option<String>,
    pub fiscal_year: Option<String>,
    pub cash_and_cash_equivalents: Option<f64>,
    pub short_term_investments: Option<f64>,
    pub net_receivables: Option<f64>,
    pub inventory: Option<f64>,
    pub total_current_assets: Option<f64>,
    pub property_plant_equipment_net: Option<f64>,
    pub goodwill: Option<f64>,
    pub total_assets: Option<f64>,
    pub account_payables: Option<f64>,
    pub short_term_debt: Option<f64>,
    pub total_current_liabilities: Option<f64>,
    pub long_term_debt: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub total_stockholders_equity: Option<f64>,
    pub total_debt: Option<f64>,
    pub net_debt: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BalanceSheetDB {
    pub fn new(record: &BalanceSheet, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            fiscal_year: record.fiscal_year.clone(),
            cash_and_cash_equivalents: record.cash_and_cash_equivalents,
            short_term_investments: record.short_term_investments,
            net_receivables: record.net_receivables,
            inventory: record.inventory,
            total_current_assets: record.total_current_assets,
            property_plant_equipment_net: record.property_plant_equipment_net,
            goodwill: record.goodwill,
            total_assets: record.total_assets,
            account_payables: record.account_payables,
            short_term_debt: record.short_term_debt,
            total_current_liabilities: record.total_current_liabilities,
            long_term_debt: record.long_term_debt,
            total_liabilities: record.total_liabilities,
            retained_earnings: record.retained_earnings,
            total_stockholders_equity: record.total_stockholders_equity,
            total_debt: record.total_debt,
            net_debt: record.net_debt,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<BalanceSheet> {
        Ok(BalanceSheet {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            fiscal_year: self.fiscal_year.clone(),
            cash_and_cash_equivalents: self.cash_and_cash_equivalents,
            short_term_investments: self.short_term_investments,
            net_receivables: self.net_receivables,
            inventory: self.inventory,
            total_current_assets: self.total_current_assets,
            property_plant_equipment_net: self.property_plant_equipment_net,
            goodwill: self.goodwill,
            total_assets: self.total_assets,
            account_payables: self.account_payables,
            short_term_debt: self.short_term_debt,
            total_current_liabilities: self.total_current_liabilities,
            long_term_debt: self.long_term_debt,
            total_liabilities: self.total_liabilities,
            retained_earnings: self.retained_earnings,
            total_stockholders_equity: self.total_stockholders_equity,
            total_debt: self.total_debt,
            net_debt: self.net_debt,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::cash_flow_statements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CashFlowStatementDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub reported_currency: Option<String>,
    pub fiscal_year: Option<String>,
    pub net_income: Option<f64>,
    pub depreciation_and_amortization: Option<f64>,
    pub stock_based_compensation: Option<f64>,
    pub change_in_working_capital: Option<f64>,
    pub net_cash_provided_by_operating_activities: Option<f64>,
    pub investments_in_property_plant_and_equipment: Option<f64>,
    pub net_cash_provided_by_investing_activities: Option<f64>,
    pub common_stock_repurchased: Option<f64>,
    pub net_dividends_paid: Option<f64>,
    pub net_cash_provided_by_financing_activities: Option<f64>,
    pub net_change_in_cash: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub capital_expenditure: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CashFlowStatementDB {
    pub fn new(record: &CashFlowStatement, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            fiscal_year: record.fiscal_year.clone(),
            net_income: record.net_income,
            depreciation_and_amortization: record.depreciation_and_amortization,
            stock_based_compensation: record.stock_based_compensation,
            change_in_working_capital: record.change_in_working_capital,
            net_cash_provided_by_operating_activities: record.net_cash_provided_by_operating_activities,
            investments_in_property_plant_and_equipment: record.investments_in_property_plant_and_equipment,
            net_cash_provided_by_investing_activities: record.net_cash_provided_by_investing_activities,
            common_stock_repurchased: record.common_stock_repurchased,
            net_dividends_paid: record.net_dividends_paid,
            net_cash_provided_by_financing_activities: record.net_cash_provided_by_financing_activities,
            net_change_in_cash: record.net_change_in_cash,
            operating_cash_flow: record.operating_cash_flow,
            capital_expenditure: record.capital_expenditure,
            free_cash_flow: record.free_cash_flow,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<CashFlowStatement> {
        Ok(CashFlowStatement {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            fiscal_year: self.fiscal_year.clone(),
            net_income: self.net_income,
            depreciation_and_amortization: self.depreciation_and_amortization,
            stock_based_compensation: self.stock_based_compensation,
            change_in_working_capital: self.change_in_working_capital,
            net_cash_provided_by_operating_activities: self.net_cash_provided_by_operating_activities,
            investments_in_property_plant_and_equipment: self.investments_in_property_plant_and_equipment,
            net_cash_provided_by_investing_activities: self.net_cash_provided_by_investing_activities,
            common_stock_repurchased: self.common_stock_repurchased,
            net_dividends_paid: self.net_dividends_paid,
            net_cash_provided_by_financing_activities: self.net_cash_provided_by_financing_activities,
            net_change_in_cash: self.net_change_in_cash,
            operating_cash_flow: self.operating_cash_flow,
            capital_expenditure: self.capital_expenditure,
            free_cash_flow: self.free_cash_flow,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::key_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct KeyMetricsDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub reported_currency: Option<String>,
    pub fiscal_year: Option<String>,
    pub market_cap: Option<f64>,
    pub enterprise_value: Option<f64>,
    pub ev_to_sales: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub net_debt_to_ebitda: Option<f64>,
    pub current_ratio: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_invested_capital: Option<f64>,
    pub earnings_yield: Option<f64>,
    pub free_cash_flow_yield: Option<f64>,
    pub working_capital: Option<f64>,
    pub invested_capital: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl KeyMetricsDB {
    pub fn new(record: &KeyMetrics, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            fiscal_year: record.fiscal_year.clone(),
            market_cap: record.market_cap,
            enterprise_value: record.enterprise_value,
            ev_to_sales: record.ev_to_sales,
            ev_to_ebitda: record.ev_to_ebitda,
            net_debt_to_ebitda: record.net_debt_to_ebitda,
            current_ratio: record.current_ratio,
            return_on_assets: record.return_on_assets,
            return_on_equity: record.return_on_equity,
            return_on_invested_capital: record.return_on_invested_capital,
            earnings_yield: record.earnings_yield,
            free_cash_flow_yield: record.free_cash_flow_yield,
            working_capital: record.working_capital,
            invested_capital: record.invested_capital,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<KeyMetrics> {
        Ok(KeyMetrics {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            fiscal_year: self.fiscal_year.clone(),
            market_cap: self.market_cap,
            enterprise_value: self.enterprise_value,
            ev_to_sales: self.ev_to_sales,
            ev_to_ebitda: self.ev_to_ebitda,
            net_debt_to_ebitda: self.net_debt_to_ebitda,
            current_ratio: self.current_ratio,
            return_on_assets: self.return_on_assets,
            return_on_equity: self.return_on_equity,
            return_on_invested_capital: self.return_on_invested_capital,
            earnings_yield: self.earnings_yield,
            free_cash_flow_yield: self.free_cash_flow_yield,
            working_capital: self.working_capital,
            invested_capital: self.invested_capital,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct RatingDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub rating: Option<String>,
    pub overall_score: Option<i32>,
    pub discounted_cash_flow_score: Option<i32>,
    pub return_on_equity_score: Option<i32>,
    pub return_on_assets_score: Option<i32>,
    pub debt_to_equity_score: Option<i32>,
    pub price_to_earnings_score: Option<i32>,
    pub price_to_book_score: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RatingDB {
    pub fn new(record: &Rating, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            rating: record.rating.clone(),
            overall_score: record.overall_score,
            discounted_cash_flow_score: record.discounted_cash_flow_score,
            return_on_equity_score: record.return_on_equity_score,
            return_on_assets_score: record.return_on_assets_score,
            debt_to_equity_score: record.debt_to_equity_score,
            price_to_earnings_score: record.price_to_earnings_score,
            price_to_book_score: record.price_to_book_score,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<Rating> {
        Ok(Rating {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            rating: self.rating.clone(),
            overall_score: self.overall_score,
            discounted_cash_flow_score: self.discounted_cash_flow_score,
            return_on_equity_score: self.return_on_equity_score,
            return_on_assets_score: self.return_on_assets_score,
            debt_to_equity_score: self.debt_to_equity_score,
            price_to_earnings_score: self.price_to_earnings_score,
            price_to_book_score: self.price_to_book_score,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::financial_ratios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct FinancialRatiosDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
    pub reported_currency: Option<String>,
    pub fiscal_year: Option<String>,
    pub gross_profit_margin: Option<f64>,
    pub operating_profit_margin: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub cash_ratio: Option<f64>,
    pub asset_turnover: Option<f64>,
    pub inventory_turnover: Option<f64>,
    pub price_to_earnings_ratio: Option<f64>,
    pub price_to_book_ratio: Option<f64>,
    pub price_to_sales_ratio: Option<f64>,
    pub price_to_free_cash_flow_ratio: Option<f64>,
    pub debt_to_assets_ratio: Option<f64>,
    pub debt_to_equity_ratio: Option<f64>,
    pub interest_coverage_ratio: Option<f64>,
    pub dividend_payout_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub book_value_per_share: Option<f64>,
    pub free_cash_flow_per_share: Option<f64>,
    pub effective_tax_rate: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FinancialRatiosDB {
    pub fn new(record: &FinancialRatios, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            fiscal_year: record.fiscal_year.clone(),
            gross_profit_margin: record.gross_profit_margin,
            operating_profit_margin: record.operating_profit_margin,
            net_profit_margin: record.net_profit_margin,
            current_ratio: record.current_ratio,
            quick_ratio: record.quick_ratio,
            cash_ratio: record.cash_ratio,
            asset_turnover: record.asset_turnover,
            inventory_turnover: record.inventory_turnover,
            price_to_earnings_ratio: record.price_to_earnings_ratio,
            price_to_book_ratio: record.price_to_book_ratio,
            price_to_sales_ratio: record.price_to_sales_ratio,
            price_to_free_cash_flow_ratio: record.price_to_free_cash_flow_ratio,
            debt_to_assets_ratio: record.debt_to_assets_ratio,
            debt_to_equity_ratio: record.debt_to_equity_ratio,
            interest_coverage_ratio: record.interest_coverage_ratio,
            dividend_payout_ratio: record.dividend_payout_ratio,
            dividend_yield: record.dividend_yield,
            book_value_per_share: record.book_value_per_share,
            free_cash_flow_per_share: record.free_cash_flow_per_share,
            effective_tax_rate: record.effective_tax_rate,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<FinancialRatios> {
        Ok(FinancialRatios {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            fiscal_year: self.fiscal_year.clone(),
            gross_profit_margin: self.gross_profit_margin,
            operating_profit_margin: self.operating_profit_margin,
            net_profit_margin: self.net_profit_margin,
            current_ratio: self.current_ratio,
            quick_ratio: self.quick_ratio,
            cash_ratio: self.cash_ratio,
            asset_turnover: self.asset_turnover,
            inventory_turnover: self.inventory_turnover,
            price_to_earnings_ratio: self.price_to_earnings_ratio,
            price_to_book_ratio: self.price_to_book_ratio,
            price_to_sales_ratio: self.price_to_sales_ratio,
            price_to_free_cash_flow_ratio: self.price_to_free_cash_flow_ratio,
            debt_to_assets_ratio: self.debt_to_assets_ratio,
            debt_to_equity_ratio: self.debt_to_equity_ratio,
            interest_coverage_ratio: self.interest_coverage_ratio,
            dividend_payout_ratio: self.dividend_payout_ratio,
            dividend_yield: self.dividend_yield,
            book_value_per_share: self.book_value_per_share,
            free_cash_flow_per_share: self.free_cash_flow_per_share,
            effective_tax_rate: self.effective_tax_rate,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::financial_scores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct FinancialScoresDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub period: String,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FinancialScoresDB {
    pub fn new(record: &FinancialScores, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            period: record.period.as_str().to_string(),
            reported_currency: record.reported_currency.clone(),
            altman_z_score: record.altman_z_score,
            piotroski_score: record.piotroski_score,
            working_capital: record.working_capital,
            total_assets: record.total_assets,
            retained_earnings: record.retained_earnings,
            ebit: record.ebit,
            market_cap: record.market_cap,
            total_liabilities: record.total_liabilities,
            revenue: record.revenue,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<FinancialScores> {
        Ok(FinancialScores {
            symbol: self.symbol.clone(),
            date: self.date,
            period: parse_period(&self.period)?,
            reported_currency: self.reported_currency.clone(),
            altman_z_score: self.altman_z_score,
            piotroski_score: self.piotroski_score,
            working_capital: self.working_capital,
            total_assets: self.total_assets,
            retained_earnings: self.retained_earnings,
            ebit: self.ebit,
            market_cap: self.market_cap,
            total_liabilities: self.total_liabilities,
            revenue: self.revenue,
        })
    }
}
