use std::sync::Arc;

use stockmate_core::records::RecordStores;

use crate::analyst::{GradingRepository, PriceTargetRepository};
use crate::companies::CompanyRepository;
use crate::corporate_events::{DividendRepository, NewsRepository, StockSplitRepository};
use crate::db::{DbPool, WriteHandle};
use crate::financials::{
    BalanceSheetRepository, CashFlowRepository, FinancialRatiosRepository,
    FinancialScoresRepository, IncomeStatementRepository, KeyMetricsRepository, RatingRepository,
};

/// Every repository, sharing one pool and one writer.
#[derive(Clone)]
pub struct Repositories {
    pub companies: Arc<CompanyRepository>,
    pub records: RecordStores,
}

impl Repositories {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        let companies = Arc::new(CompanyRepository::new(pool.clone(), writer.clone()));
        let records = RecordStores {
            companies: companies.clone(),
            income_statements: Arc::new(IncomeStatementRepository::new(
                pool.clone(),
                writer.clone(),
            )),
            balance_sheets: Arc::new(BalanceSheetRepository::new(pool.clone(), writer.clone())),
            cash_flows: Arc::new(CashFlowRepository::new(pool.clone(), writer.clone())),
            key_metrics: Arc::new(KeyMetricsRepository::new(pool.clone(), writer.clone())),
            financial_ratios: Arc::new(FinancialRatiosRepository::new(
                pool.clone(),
                writer.clone(),
            )),
            financial_scores: Arc::new(FinancialScoresRepository::new(
                pool.clone(),
                writer.clone(),
            )),
            ratings: Arc::new(RatingRepository::new(pool.clone(), writer.clone())),
            price_targets: Arc::new(PriceTargetRepository::new(pool.clone(), writer.clone())),
            gradings: Arc::new(GradingRepository::new(pool.clone(), writer.clone())),
            dividends: Arc::new(DividendRepository::new(pool.clone(), writer.clone())),
            splits: Arc::new(StockSplitRepository::new(pool.clone(), writer.clone())),
            news: Arc::new(NewsRepository::new(pool, writer)),
        };
        Self { companies, records }
    }
}
