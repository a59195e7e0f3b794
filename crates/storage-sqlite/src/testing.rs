//! Temp-database setup and fixtures for the storage tests.

use std::sync::Arc;

use chrono::NaiveDate;
use stockmate_market_data::{CompanyProfile, IncomeStatement, Period};
use tempfile::TempDir;

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::Repositories;

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    pub repos: Repositories,
    // Keeps the database file alive for the test's duration.
    _dir: TempDir,
}

/// A migrated database in a fresh temp dir. Call from within a tokio runtime.
pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("test.db").to_string_lossy().to_string();
    init(&path).expect("Failed to init database");
    let pool = create_pool(&path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer(&pool).expect("Failed to spawn writer");
    let repos = Repositories::new(pool.clone(), writer.clone());
    TestDb {
        pool,
        writer,
        repos,
        _dir: dir,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn apple_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Apple Inc.".to_string(),
        market_cap: Some(2.5e12),
        sector: Some("Technology".to_string()),
        exchange: Some("NASDAQ".to_string()),
        ..CompanyProfile::placeholder("AAPL")
    }
}

pub fn income_statement(day: &str, period: Period, revenue: f64) -> IncomeStatement {
    IncomeStatement {
        symbol: "AAPL".to_string(),
        date: date(day),
        period,
        reported_currency: Some("USD".to_string()),
        fiscal_year: Some(day[..4].to_string()),
        revenue: Some(revenue),
        cost_of_revenue: None,
        gross_profit: None,
        research_and_development_expenses: None,
        selling_general_and_administrative_expenses: None,
        operating_expenses: None,
        operating_income: None,
        interest_expense: None,
        ebitda: None,
        income_before_tax: None,
        income_tax_expense: None,
        net_income: Some(revenue * 0.25),
        eps: None,
        eps_diluted: None,
        weighted_average_shs_out: None,
        weighted_average_shs_out_dil: None,
    }
}
