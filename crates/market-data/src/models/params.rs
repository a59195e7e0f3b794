use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{DataKind, Period};
use crate::errors::MarketDataError;

pub const MAX_LIMIT: u32 = 100;
pub const MAX_PAGE: u32 = 100;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Optional request parameters for a vendor call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    pub period: Option<Period>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FetchParams {
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Checks every parameter against what `kind` accepts.
    ///
    /// Parameters a kind does not take are rejected rather than ignored.
    pub fn validate_for(&self, kind: DataKind) -> Result<(), MarketDataError> {
        if let Some(period) = self.period {
            if !kind.accepts_period() {
                return Err(invalid(format!("period is not supported for {}", kind)));
            }
            if !period.is_requestable() {
                return Err(invalid(format!(
                    "period {} cannot be requested for {}",
                    period, kind
                )));
            }
        }

        if let Some(limit) = self.limit {
            if !kind.accepts_limit() {
                return Err(invalid(format!("limit is not supported for {}", kind)));
            }
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(invalid(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_LIMIT, limit
                )));
            }
        }

        let has_window = self.page.is_some() || self.from.is_some() || self.to.is_some();
        if has_window && !kind.accepts_window() {
            return Err(invalid(format!(
                "page and date range are not supported for {}",
                kind
            )));
        }

        if let Some(page) = self.page {
            if page > MAX_PAGE {
                return Err(invalid(format!("page must be at most {}", MAX_PAGE)));
            }
        }

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(invalid(format!(
                    "from ({}) must not be after to ({})",
                    from, to
                )));
            }
        }

        Ok(())
    }

    /// Keeps only the parameters `kind` accepts.
    ///
    /// Used when one set of options is applied across several kinds.
    pub fn scoped_to(&self, kind: DataKind) -> FetchParams {
        FetchParams {
            period: self.period.filter(|_| kind.accepts_period()),
            limit: self.limit.filter(|_| kind.accepts_limit()),
            page: self.page.filter(|_| kind.accepts_window()),
            from: self.from.filter(|_| kind.accepts_window()),
            to: self.to.filter(|_| kind.accepts_window()),
        }
    }

    /// Query pairs for an already validated request, defaults applied.
    pub(crate) fn query_pairs(&self, kind: DataKind) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if kind.accepts_period() {
            let period = self.period.unwrap_or(Period::Annual);
            pairs.push(("period", period.as_str().to_string()));
        }
        if let Some(limit) = self.limit.or(kind.default_limit()) {
            pairs.push(("limit", limit.to_string()));
        }
        if kind.accepts_window() {
            pairs.push(("page", self.page.unwrap_or(0).to_string()));
            if let Some(from) = self.from {
                pairs.push(("from", from.format("%Y-%m-%d").to_string()));
            }
            if let Some(to) = self.to {
                pairs.push(("to", to.format("%Y-%m-%d").to_string()));
            }
        }
        pairs
    }
}

/// Trims and uppercases a ticker, rejecting anything that is not a plausible symbol.
pub fn normalize_symbol(symbol: &str) -> Result<String, MarketDataError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(invalid("symbol must not be empty".to_string()));
    }
    if trimmed.len() > MAX_SYMBOL_LEN {
        return Err(invalid(format!(
            "symbol '{}' is longer than {} characters",
            trimmed, MAX_SYMBOL_LEN
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(invalid(format!(
            "symbol '{}' contains unsupported characters",
            trimmed
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn invalid(message: String) -> MarketDataError {
    MarketDataError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("   ").is_err());
        assert!(normalize_symbol("AAPL;DROP").is_err());
        assert!(normalize_symbol("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_limit_bounds() {
        let params = FetchParams::default().with_limit(0);
        assert!(params.validate_for(DataKind::IncomeStatement).is_err());

        let params = FetchParams::default().with_limit(101);
        assert!(params.validate_for(DataKind::IncomeStatement).is_err());

        let params = FetchParams::default().with_limit(100);
        assert!(params.validate_for(DataKind::IncomeStatement).is_ok());
    }

    #[test]
    fn test_period_rejected_for_kinds_without_periods() {
        let params = FetchParams::default().with_period(Period::Quarter);
        assert!(params.validate_for(DataKind::BalanceSheet).is_ok());

        let err = params.validate_for(DataKind::Dividends).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_ttm_is_not_requestable() {
        let params = FetchParams::default().with_period(Period::Ttm);
        assert!(params.validate_for(DataKind::KeyMetrics).is_err());
    }

    #[test]
    fn test_news_date_window() {
        let ok = FetchParams {
            from: Some(date("2024-01-01")),
            to: Some(date("2024-02-01")),
            ..Default::default()
        };
        assert!(ok.validate_for(DataKind::News).is_ok());
        assert!(ok.validate_for(DataKind::Splits).is_err());

        let reversed = FetchParams {
            from: Some(date("2024-02-01")),
            to: Some(date("2024-01-01")),
            ..Default::default()
        };
        assert!(reversed.validate_for(DataKind::News).is_err());
    }

    #[test]
    fn test_scoped_to_drops_unsupported_fields() {
        let params = FetchParams {
            period: Some(Period::Quarter),
            limit: Some(10),
            page: Some(2),
            from: None,
            to: None,
        };

        let scoped = params.scoped_to(DataKind::Dividends);
        assert_eq!(scoped.period, None);
        assert_eq!(scoped.limit, Some(10));
        assert_eq!(scoped.page, None);
        assert!(scoped.validate_for(DataKind::Dividends).is_ok());

        assert_eq!(params.scoped_to(DataKind::Profile), FetchParams::default());
    }

    #[test]
    fn test_query_pairs_apply_defaults() {
        let pairs = FetchParams::default().query_pairs(DataKind::IncomeStatement);
        assert_eq!(
            pairs,
            vec![("period", "annual".to_string()), ("limit", "5".to_string())]
        );

        let pairs = FetchParams::default().query_pairs(DataKind::Splits);
        assert!(pairs.is_empty());
    }
}
