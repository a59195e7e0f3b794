use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use stockmate_core::records::ListFilter;
use stockmate_market_data::{
    BalanceSheet, CashFlowStatement, FinancialRatios, FinancialScores, IncomeStatement, KeyMetrics,
    Rating,
};

use super::model::{
    BalanceSheetDB, CashFlowStatementDB, FinancialRatiosDB, FinancialScoresDB, IncomeStatementDB,
    KeyMetricsDB, RatingDB,
};
use crate::records::{row_plumbing, stored_periods, RecordRow, SqliteRecordStore};
use crate::schema;

pub type IncomeStatementRepository = SqliteRecordStore<IncomeStatementDB>;
pub type BalanceSheetRepository = SqliteRecordStore<BalanceSheetDB>;
pub type CashFlowRepository = SqliteRecordStore<CashFlowStatementDB>;
pub type KeyMetricsRepository = SqliteRecordStore<KeyMetricsDB>;
pub type FinancialRatiosRepository = SqliteRecordStore<FinancialRatiosDB>;
pub type FinancialScoresRepository = SqliteRecordStore<FinancialScoresDB>;
pub type RatingRepository = SqliteRecordStore<RatingDB>;

/// Rows keyed by (symbol, date, period), listed newest first.
macro_rules! periodic_row {
    ($row:ty, $record:ty, $table:ident) => {
        impl RecordRow for $row {
            type Record = $record;

            row_plumbing!(schema::$table::table);

            fn find(conn: &mut SqliteConnection, record: &$record) -> QueryResult<Option<Self>> {
                use schema::$table::dsl;
                dsl::$table
                    .filter(dsl::symbol.eq(&record.symbol))
                    .filter(dsl::date.eq(record.date))
                    .filter(dsl::period.eq(record.period.as_str()))
                    .select(<$row>::as_select())
                    .first(conn)
                    .optional()
            }

            fn list(
                conn: &mut SqliteConnection,
                symbol: &str,
                filter: &ListFilter,
            ) -> QueryResult<Vec<Self>> {
                use schema::$table::dsl;
                let mut query = dsl::$table
                    .filter(dsl::symbol.eq(symbol))
                    .select(<$row>::as_select())
                    .into_boxed();
                if let Some(period) = filter.period {
                    query = query.filter(dsl::period.eq_any(stored_periods(period)));
                }
                if let Some(limit) = filter.limit {
                    query = query.limit(limit);
                }
                query
                    .order((dsl::date.desc(), dsl::period.desc()))
                    .load::<$row>(conn)
            }
        }
    };
}

periodic_row!(IncomeStatementDB, IncomeStatement, income_statements);
periodic_row!(BalanceSheetDB, BalanceSheet, balance_sheets);
periodic_row!(CashFlowStatementDB, CashFlowStatement, cash_flow_statements);
periodic_row!(KeyMetricsDB, KeyMetrics, key_metrics);
periodic_row!(FinancialRatiosDB, FinancialRatios, financial_ratios);
periodic_row!(FinancialScoresDB, FinancialScores, financial_scores);
periodic_row!(RatingDB, Rating, ratings);

#[cfg(test)]
mod tests {
    use stockmate_core::companies::CompanyRepositoryTrait;
    use stockmate_core::records::{ListFilter, RecordStore, UpsertOutcome};
    use stockmate_market_data::{FinancialRatios, FinancialScores, Period};

    use crate::testing::{date, test_db};

    fn ratios(day: &str, period: Period, current_ratio: f64) -> FinancialRatios {
        FinancialRatios {
            symbol: "AAPL".to_string(),
            date: date(day),
            period,
            reported_currency: Some("USD".to_string()),
            fiscal_year: Some(day[..4].to_string()),
            gross_profit_margin: Some(0.46),
            operating_profit_margin: None,
            net_profit_margin: None,
            current_ratio: Some(current_ratio),
            quick_ratio: None,
            cash_ratio: None,
            asset_turnover: None,
            inventory_turnover: None,
            price_to_earnings_ratio: Some(37.3),
            price_to_book_ratio: None,
            price_to_sales_ratio: None,
            price_to_free_cash_flow_ratio: None,
            debt_to_assets_ratio: None,
            debt_to_equity_ratio: None,
            interest_coverage_ratio: None,
            dividend_payout_ratio: None,
            dividend_yield: None,
            book_value_per_share: None,
            free_cash_flow_per_share: None,
            effective_tax_rate: None,
        }
    }

    #[tokio::test]
    async fn test_ratios_filter_by_period() {
        let db = test_db();
        db.repos.companies.ensure_exists("AAPL").await.unwrap();
        let store = &db.repos.records.financial_ratios;

        store
            .reconcile(ratios("2024-09-28", Period::Fy, 0.87))
            .await
            .unwrap();
        store
            .reconcile(ratios("2024-12-28", Period::Q1, 0.92))
            .await
            .unwrap();
        let restated = store
            .reconcile(ratios("2024-09-28", Period::Fy, 0.88))
            .await
            .unwrap();
        assert_eq!(restated.outcome, UpsertOutcome::Updated);

        let annual = store
            .list_by_symbol("AAPL", &ListFilter::period(Some(Period::Annual)))
            .unwrap();
        assert_eq!(annual.len(), 1);
        assert_eq!(annual[0].record.current_ratio, Some(0.88));

        let all = store.list_by_symbol("AAPL", &ListFilter::default()).unwrap();
        assert_eq!(all[0].record.period, Period::Q1);
    }

    #[tokio::test]
    async fn test_scores_round_trip_integer_score() {
        let db = test_db();
        db.repos.companies.ensure_exists("AAPL").await.unwrap();
        let scores = FinancialScores {
            symbol: "AAPL".to_string(),
            date: date("2025-02-01"),
            period: Period::Ttm,
            reported_currency: Some("USD".to_string()),
            altman_z_score: Some(9.32),
            piotroski_score: Some(8),
            working_capital: Some(-11.1e9),
            total_assets: None,
            retained_earnings: None,
            ebit: None,
            market_cap: None,
            total_liabilities: None,
            revenue: None,
        };

        let stored = db
            .repos
            .records
            .financial_scores
            .reconcile(scores.clone())
            .await
            .unwrap();

        assert_eq!(stored.outcome, UpsertOutcome::Inserted);
        assert_eq!(stored.entity.record, scores);
    }
}
