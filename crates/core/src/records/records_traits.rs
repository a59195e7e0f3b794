use async_trait::async_trait;
use stockmate_market_data::{
    normalize_symbol, BalanceSheet, CashFlowStatement, CompanyProfile, DataKind, Dividend,
    FinancialRatios, FinancialScores, Grading, IncomeStatement, KeyMetrics, NewsArticle,
    PriceTarget, Rating, RequiredFields, StockSplit,
};

use super::records_model::{ListFilter, Reconciled, Stored};
use crate::errors::{Result, ValidationError};

/// A vendor record that can be persisted and reconciled by natural key.
pub trait DomainRecord: RequiredFields + Clone + PartialEq + Send + Sync + 'static {
    const KIND: DataKind;

    fn symbol(&self) -> &str;

    /// Natural key rendered as `SYMBOL/part/...`, for reports and logs.
    fn natural_key(&self) -> String;

    /// Checks the candidate before it is handed to storage.
    fn validate(&self) -> Result<()> {
        let key = self.natural_key();
        self.check_required()
            .map_err(|reason| ValidationError::InvalidInput(format!("{}: {}", key, reason)))?;
        let normalized = normalize_symbol(self.symbol())
            .map_err(|e| ValidationError::InvalidInput(format!("{}: {}", key, e)))?;
        if normalized != self.symbol() {
            return Err(ValidationError::InvalidInput(format!(
                "{}: symbol must be uppercase and trimmed",
                key
            ))
            .into());
        }
        Ok(())
    }
}

/// Storage for one record kind.
#[async_trait]
pub trait RecordStore<T: DomainRecord>: Send + Sync {
    /// Insert or update the row matching the candidate's natural key.
    ///
    /// Atomic per natural key: concurrent calls for the same key never
    /// produce two rows.
    async fn reconcile(&self, candidate: T) -> Result<Reconciled<T>>;

    /// Rows for `symbol`, most recent first.
    fn list_by_symbol(&self, symbol: &str, filter: &ListFilter) -> Result<Vec<Stored<T>>>;
}

impl DomainRecord for CompanyProfile {
    const KIND: DataKind = DataKind::Profile;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        self.symbol.clone()
    }
}

impl DomainRecord for IncomeStatement {
    const KIND: DataKind = DataKind::IncomeStatement;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for BalanceSheet {
    const KIND: DataKind = DataKind::BalanceSheet;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for CashFlowStatement {
    const KIND: DataKind = DataKind::CashFlow;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for KeyMetrics {
    const KIND: DataKind = DataKind::KeyMetrics;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for FinancialRatios {
    const KIND: DataKind = DataKind::FinancialRatios;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for FinancialScores {
    const KIND: DataKind = DataKind::FinancialScores;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for Rating {
    const KIND: DataKind = DataKind::Rating;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.period)
    }
}

impl DomainRecord for PriceTarget {
    const KIND: DataKind = DataKind::PriceTarget;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}", self.symbol, self.date)
    }
}

impl DomainRecord for Grading {
    const KIND: DataKind = DataKind::Gradings;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.date, self.grading_company)
    }
}

impl DomainRecord for Dividend {
    const KIND: DataKind = DataKind::Dividends;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}", self.symbol, self.date)
    }
}

impl DomainRecord for StockSplit {
    const KIND: DataKind = DataKind::Splits;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}", self.symbol, self.date)
    }
}

impl DomainRecord for NewsArticle {
    const KIND: DataKind = DataKind::News;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn natural_key(&self) -> String {
        format!("{}/{}/{}", self.symbol, self.published_at, self.url)
    }
}
