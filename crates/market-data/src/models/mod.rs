//! Typed vendor records
//!
//! - `types` - `DataKind` and `Period`
//! - `params` - request parameters and their validation
//! - `profile` - company profile (the master record)
//! - `statements` - income statement, balance sheet, cash flow, key metrics, ratios
//! - `rating` - rating and financial score snapshots
//! - `analyst` - grade changes and price target consensus
//! - `events` - dividends, splits, news
//! - `fetched` - per-call results with rejected elements

mod analyst;
mod dates;
mod events;
mod fetched;
mod params;
mod profile;
mod rating;
mod statements;
mod types;

pub use analyst::{Grading, PriceTarget};
pub use events::{Dividend, NewsArticle, StockSplit};
pub use fetched::{Fetched, Rejected};
pub use params::{normalize_symbol, FetchParams, MAX_LIMIT, MAX_PAGE, MAX_SYMBOL_LEN};
pub use profile::CompanyProfile;
pub use rating::{FinancialScores, Rating};
pub use statements::{
    BalanceSheet, CashFlowStatement, FinancialRatios, IncomeStatement, KeyMetrics,
};
pub use types::{DataKind, Period};

/// Contract a decoded record must satisfy beyond what its type already enforces.
pub trait RequiredFields {
    /// Returns the reason the record is unusable, if it is.
    fn check_required(&self) -> Result<(), String>;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

/// Typed result of a `fetch` for any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorData {
    Profile(Fetched<CompanyProfile>),
    IncomeStatements(Fetched<IncomeStatement>),
    BalanceSheets(Fetched<BalanceSheet>),
    CashFlows(Fetched<CashFlowStatement>),
    KeyMetrics(Fetched<KeyMetrics>),
    FinancialRatios(Fetched<FinancialRatios>),
    FinancialScores(Fetched<FinancialScores>),
    Ratings(Fetched<Rating>),
    PriceTargets(Fetched<PriceTarget>),
    Gradings(Fetched<Grading>),
    Dividends(Fetched<Dividend>),
    Splits(Fetched<StockSplit>),
    News(Fetched<NewsArticle>),
}

impl VendorData {
    pub fn kind(&self) -> DataKind {
        match self {
            VendorData::Profile(_) => DataKind::Profile,
            VendorData::IncomeStatements(_) => DataKind::IncomeStatement,
            VendorData::BalanceSheets(_) => DataKind::BalanceSheet,
            VendorData::CashFlows(_) => DataKind::CashFlow,
            VendorData::KeyMetrics(_) => DataKind::KeyMetrics,
            VendorData::FinancialRatios(_) => DataKind::FinancialRatios,
            VendorData::FinancialScores(_) => DataKind::FinancialScores,
            VendorData::Ratings(_) => DataKind::Rating,
            VendorData::PriceTargets(_) => DataKind::PriceTarget,
            VendorData::Gradings(_) => DataKind::Gradings,
            VendorData::Dividends(_) => DataKind::Dividends,
            VendorData::Splits(_) => DataKind::Splits,
            VendorData::News(_) => DataKind::News,
        }
    }
}
