//! In-memory doubles shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use stockmate_market_data::{
    BalanceSheet, CashFlowStatement, CompanyProfile, DataKind, Dividend, FetchParams,
    FinancialDataProvider, FinancialRatios, FinancialScores, Grading, IncomeStatement, KeyMetrics,
    MarketDataError, NewsArticle, Period, PriceTarget, Rating, StockSplit, VendorData,
};

use super::{
    DomainRecord, ListFilter, Reconciled, RecordStore, RecordStores, Stored, UpsertOutcome,
};
use crate::companies::CompanyRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};

pub fn income_statement(date: &str, revenue: f64) -> IncomeStatement {
    IncomeStatement {
        symbol: "AAPL".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        period: Period::Fy,
        reported_currency: Some("USD".to_string()),
        fiscal_year: Some(date[..4].to_string()),
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
        net_income: None,
        eps: None,
        eps_diluted: None,
        weighted_average_shs_out: None,
        weighted_average_shs_out_dil: None,
    }
}

pub fn apple_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Apple Inc.".to_string(),
        market_cap: Some(2.5e12),
        ..CompanyProfile::placeholder("AAPL")
    }
}

pub fn in_memory_stores(companies: Arc<InMemoryStore<CompanyProfile>>) -> RecordStores {
    RecordStores {
        companies,
        income_statements: Arc::new(InMemoryStore::<IncomeStatement>::default()),
        balance_sheets: Arc::new(InMemoryStore::<BalanceSheet>::default()),
        cash_flows: Arc::new(InMemoryStore::<CashFlowStatement>::default()),
        key_metrics: Arc::new(InMemoryStore::<KeyMetrics>::default()),
        financial_ratios: Arc::new(InMemoryStore::<FinancialRatios>::default()),
        financial_scores: Arc::new(InMemoryStore::<FinancialScores>::default()),
        ratings: Arc::new(InMemoryStore::<Rating>::default()),
        price_targets: Arc::new(InMemoryStore::<PriceTarget>::default()),
        gradings: Arc::new(InMemoryStore::<Grading>::default()),
        dividends: Arc::new(InMemoryStore::<Dividend>::default()),
        splits: Arc::new(InMemoryStore::<StockSplit>::default()),
        news: Arc::new(InMemoryStore::<NewsArticle>::default()),
    }
}

/// Keyed by natural key, newest insert first.
pub struct InMemoryStore<T> {
    rows: Mutex<Vec<Stored<T>>>,
    failing_keys: Mutex<HashSet<String>>,
    next_id: AtomicUsize,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failing_keys: Mutex::new(HashSet::new()),
            next_id: AtomicUsize::new(1),
        }
    }
}

impl<T: DomainRecord> InMemoryStore<T> {
    pub fn fail_on(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl<T: DomainRecord> RecordStore<T> for InMemoryStore<T> {
    async fn reconcile(&self, candidate: T) -> Result<Reconciled<T>> {
        let key = candidate.natural_key();
        if self.failing_keys.lock().unwrap().contains(&key) {
            return Err(Error::Database(DatabaseError::QueryFailed(format!(
                "forced failure for {}",
                key
            ))));
        }

        let now = Utc::now().naive_utc();
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.record.natural_key() == key) {
            if row.record == candidate {
                return Ok(Reconciled {
                    outcome: UpsertOutcome::Unchanged,
                    entity: row.clone(),
                });
            }
            row.record = candidate;
            row.updated_at = now;
            return Ok(Reconciled {
                outcome: UpsertOutcome::Updated,
                entity: row.clone(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Stored {
            id: format!("row-{}", id),
            record: candidate,
            created_at: now,
            updated_at: now,
        };
        rows.insert(0, stored.clone());
        Ok(Reconciled {
            outcome: UpsertOutcome::Inserted,
            entity: stored,
        })
    }

    fn list_by_symbol(&self, symbol: &str, filter: &ListFilter) -> Result<Vec<Stored<T>>> {
        let rows = self.rows.lock().unwrap();
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .filter(|r| r.record.symbol() == symbol)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CompanyRepositoryTrait for InMemoryStore<CompanyProfile> {
    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Stored<CompanyProfile>>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.record.symbol == symbol).cloned())
    }

    fn list(&self) -> Result<Vec<Stored<CompanyProfile>>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn ensure_exists(&self, symbol: &str) -> Result<bool> {
        if self.get_by_symbol(symbol)?.is_some() {
            return Ok(false);
        }
        self.reconcile(CompanyProfile::placeholder(symbol)).await?;
        Ok(true)
    }

    async fn delete(&self, symbol: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.record.symbol != symbol);
        Ok(before - rows.len())
    }
}

/// Provider double: canned payloads per kind, or a transport failure.
#[derive(Default)]
pub struct StubProvider {
    responses: Mutex<HashMap<DataKind, VendorData>>,
    failing: Mutex<HashSet<DataKind>>,
    calls: Mutex<Vec<DataKind>>,
}

impl StubProvider {
    pub fn respond(&self, data: VendorData) {
        self.responses.lock().unwrap().insert(data.kind(), data);
    }

    pub fn fail(&self, kind: DataKind) {
        self.failing.lock().unwrap().insert(kind);
    }

    pub fn calls(&self) -> Vec<DataKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FinancialDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fetch(
        &self,
        kind: DataKind,
        _symbol: &str,
        params: &FetchParams,
    ) -> std::result::Result<VendorData, MarketDataError> {
        params.validate_for(kind)?;
        self.calls.lock().unwrap().push(kind);
        if self.failing.lock().unwrap().contains(&kind) {
            return Err(MarketDataError::transport(
                kind.as_str(),
                Some(500),
                "Internal Server Error",
            ));
        }
        let data = self.responses.lock().unwrap().get(&kind).cloned();
        Ok(data.unwrap_or_else(|| empty(kind)))
    }
}

fn empty(kind: DataKind) -> VendorData {
    use stockmate_market_data::Fetched;
    match kind {
        DataKind::Profile => VendorData::Profile(Fetched::empty()),
        DataKind::IncomeStatement => VendorData::IncomeStatements(Fetched::empty()),
        DataKind::BalanceSheet => VendorData::BalanceSheets(Fetched::empty()),
        DataKind::CashFlow => VendorData::CashFlows(Fetched::empty()),
        DataKind::KeyMetrics => VendorData::KeyMetrics(Fetched::empty()),
        DataKind::FinancialRatios => VendorData::FinancialRatios(Fetched::empty()),
        DataKind::FinancialScores => VendorData::FinancialScores(Fetched::empty()),
        DataKind::Rating => VendorData::Ratings(Fetched::empty()),
        DataKind::PriceTarget => VendorData::PriceTargets(Fetched::empty()),
        DataKind::Gradings => VendorData::Gradings(Fetched::empty()),
        DataKind::Dividends => VendorData::Dividends(Fetched::empty()),
        DataKind::Splits => VendorData::Splits(Fetched::empty()),
        DataKind::News => VendorData::News(Fetched::empty()),
    }
}
