use stockmate_market_data::Period;

use super::financials_model::{StatementKind, StatementRows};
use crate::errors::Result;

/// Trait for reading periodic financial records
pub trait FinancialsServiceTrait: Send + Sync {
    /// Rows of `kind` for `symbol`, most recent reporting date first,
    /// optionally restricted to one period.
    fn get_statements(
        &self,
        symbol: &str,
        kind: StatementKind,
        period: Option<Period>,
    ) -> Result<StatementRows>;
}
