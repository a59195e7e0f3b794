use stockmate_market_data::{Grading, PriceTarget};

use crate::errors::Result;
use crate::records::Stored;

/// Trait for reading analyst records
pub trait AnalystServiceTrait: Send + Sync {
    /// Grade changes by date, most recent first.
    fn get_gradings(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<Stored<Grading>>>;
    /// One consensus snapshot per sync day, most recent first.
    fn get_price_targets(&self, symbol: &str) -> Result<Vec<Stored<PriceTarget>>>;
}
