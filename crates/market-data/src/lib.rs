//! StockMate Market Data Crate
//!
//! Vendor client for the financial data StockMate stores: company profiles,
//! financial statements, key metrics and ratios, rating and score snapshots,
//! analyst gradings and price targets, dividends, stock splits and news.
//!
//! # Overview
//!
//! - [`FinancialDataProvider`] is the provider seam, one `fetch` per data kind
//! - [`FmpProvider`] implements it against Financial Modeling Prep
//! - Parameters are validated before any request is issued
//! - Each response element is decoded on its own; elements that break their
//!   record's required fields are dropped and reported in [`Fetched::rejected`]
//! - An empty vendor response is an empty result, never an error
//!
//! # Core Types
//!
//! - [`DataKind`] - which dataset to fetch
//! - [`FetchParams`] - period, limit, page and date window
//! - [`VendorData`] - typed result of a fetch
//! - [`MarketDataError`] - `InvalidArgument` vs. transport failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{
    normalize_symbol, BalanceSheet, CashFlowStatement, CompanyProfile, DataKind, Dividend,
    FetchParams, Fetched, FinancialRatios, FinancialScores, Grading, IncomeStatement, KeyMetrics,
    NewsArticle, Period, PriceTarget, Rating, Rejected, RequiredFields, StockSplit, VendorData,
};

pub use provider::fmp::FmpProvider;
pub use provider::{FinancialDataProvider, ProviderConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
