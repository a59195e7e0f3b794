//! Provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{DataKind, FetchParams, VendorData};

/// A source of financial data.
///
/// One call maps to exactly one outbound request. Implementations validate
/// `symbol` and `params` before any I/O and report an empty vendor response
/// as an empty [`VendorData`] payload, never as an error.
///
/// # Example
///
/// ```ignore
/// let data = provider
///     .fetch(DataKind::IncomeStatement, "AAPL", &FetchParams::default())
///     .await?;
/// if let VendorData::IncomeStatements(fetched) = data {
///     println!("{} statements", fetched.records.len());
/// }
/// ```
#[async_trait]
pub trait FinancialDataProvider: Send + Sync {
    /// Constant identifier such as "FMP", used in logs.
    fn id(&self) -> &'static str;

    /// Fetch one kind of data for one symbol.
    async fn fetch(
        &self,
        kind: DataKind,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<VendorData, MarketDataError>;
}
