use stockmate_market_data::{Dividend, NewsArticle, StockSplit};

use crate::errors::Result;
use crate::records::Stored;

/// Trait for reading event records
pub trait CorporateEventsServiceTrait: Send + Sync {
    /// Dividends by ex-date, most recent first.
    fn get_dividends(&self, symbol: &str) -> Result<Vec<Stored<Dividend>>>;
    /// Splits by date, most recent first.
    fn get_splits(&self, symbol: &str) -> Result<Vec<Stored<StockSplit>>>;
    /// News by publication time, most recent first.
    fn get_news(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<Stored<NewsArticle>>>;
}
