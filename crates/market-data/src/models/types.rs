use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// The kinds of data the vendor can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    Profile,
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    KeyMetrics,
    FinancialRatios,
    FinancialScores,
    Rating,
    PriceTarget,
    Gradings,
    Dividends,
    Splits,
    News,
}

impl DataKind {
    pub const ALL: [DataKind; 13] = [
        DataKind::Profile,
        DataKind::IncomeStatement,
        DataKind::BalanceSheet,
        DataKind::CashFlow,
        DataKind::KeyMetrics,
        DataKind::FinancialRatios,
        DataKind::FinancialScores,
        DataKind::Rating,
        DataKind::PriceTarget,
        DataKind::Gradings,
        DataKind::Dividends,
        DataKind::Splits,
        DataKind::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Profile => "profile",
            DataKind::IncomeStatement => "income-statement",
            DataKind::BalanceSheet => "balance-sheet",
            DataKind::CashFlow => "cash-flow",
            DataKind::KeyMetrics => "key-metrics",
            DataKind::FinancialRatios => "financial-ratios",
            DataKind::FinancialScores => "financial-scores",
            DataKind::Rating => "rating",
            DataKind::PriceTarget => "price-target",
            DataKind::Gradings => "gradings",
            DataKind::Dividends => "dividends",
            DataKind::Splits => "splits",
            DataKind::News => "news",
        }
    }

    /// Statements, key metrics and ratios are reported per fiscal period.
    pub fn accepts_period(&self) -> bool {
        matches!(
            self,
            DataKind::IncomeStatement
                | DataKind::BalanceSheet
                | DataKind::CashFlow
                | DataKind::KeyMetrics
                | DataKind::FinancialRatios
        )
    }

    pub fn accepts_limit(&self) -> bool {
        self.default_limit().is_some()
    }

    /// Only the news endpoint supports paging and a date window.
    pub fn accepts_window(&self) -> bool {
        matches!(self, DataKind::News)
    }

    /// Limit sent when the caller does not supply one.
    pub fn default_limit(&self) -> Option<u32> {
        match self {
            DataKind::IncomeStatement
            | DataKind::BalanceSheet
            | DataKind::CashFlow
            | DataKind::KeyMetrics
            | DataKind::FinancialRatios => Some(5),
            DataKind::Dividends => Some(100),
            DataKind::News => Some(20),
            DataKind::Profile
            | DataKind::FinancialScores
            | DataKind::Rating
            | DataKind::PriceTarget
            | DataKind::Gradings
            | DataKind::Splits => None,
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataKind {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DataKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| MarketDataError::InvalidArgument(format!("unknown data kind '{}'", s)))
    }
}

/// Reporting period designator.
///
/// `Annual` and `Quarter` are request selectors; vendor rows come back
/// tagged `FY` or `Q1`..`Q4`. Rating and score snapshots are stored as `TTM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "annual")]
    Annual,
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "FY")]
    Fy,
    Q1,
    Q2,
    Q3,
    Q4,
    #[serde(rename = "TTM")]
    Ttm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Annual => "annual",
            Period::Quarter => "quarter",
            Period::Fy => "FY",
            Period::Q1 => "Q1",
            Period::Q2 => "Q2",
            Period::Q3 => "Q3",
            Period::Q4 => "Q4",
            Period::Ttm => "TTM",
        }
    }

    /// Periods a caller may request from the statement endpoints.
    pub fn is_requestable(&self) -> bool {
        !matches!(self, Period::Ttm)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Period::Annual),
            "quarter" => Ok(Period::Quarter),
            "fy" => Ok(Period::Fy),
            "q1" => Ok(Period::Q1),
            "q2" => Ok(Period::Q2),
            "q3" => Ok(Period::Q3),
            "q4" => Ok(Period::Q4),
            "ttm" => Ok(Period::Ttm),
            _ => Err(MarketDataError::InvalidArgument(format!(
                "unknown period '{}' (expected annual, quarter, FY, Q1-Q4 or TTM)",
                s
            ))),
        }
    }
}
