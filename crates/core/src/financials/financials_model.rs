use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockmate_market_data::{
    BalanceSheet, CashFlowStatement, DataKind, FinancialRatios, FinancialScores, IncomeStatement,
    KeyMetrics, Rating,
};

use crate::errors::{Error, ValidationError};
use crate::records::Stored;

/// Periodic record kinds, keyed by (symbol, date, period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatementKind {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    KeyMetrics,
    FinancialRatios,
    FinancialScores,
    Rating,
}

impl StatementKind {
    pub fn data_kind(&self) -> DataKind {
        match self {
            StatementKind::IncomeStatement => DataKind::IncomeStatement,
            StatementKind::BalanceSheet => DataKind::BalanceSheet,
            StatementKind::CashFlow => DataKind::CashFlow,
            StatementKind::KeyMetrics => DataKind::KeyMetrics,
            StatementKind::FinancialRatios => DataKind::FinancialRatios,
            StatementKind::FinancialScores => DataKind::FinancialScores,
            StatementKind::Rating => DataKind::Rating,
        }
    }
}

impl TryFrom<DataKind> for StatementKind {
    type Error = Error;

    fn try_from(kind: DataKind) -> Result<Self, Self::Error> {
        match kind {
            DataKind::IncomeStatement => Ok(StatementKind::IncomeStatement),
            DataKind::BalanceSheet => Ok(StatementKind::BalanceSheet),
            DataKind::CashFlow => Ok(StatementKind::CashFlow),
            DataKind::KeyMetrics => Ok(StatementKind::KeyMetrics),
            DataKind::FinancialRatios => Ok(StatementKind::FinancialRatios),
            DataKind::FinancialScores => Ok(StatementKind::FinancialScores),
            DataKind::Rating => Ok(StatementKind::Rating),
            other => Err(ValidationError::InvalidInput(format!(
                "{} is not a periodic record kind",
                other
            ))
            .into()),
        }
    }
}

impl FromStr for StatementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind: DataKind = s.parse()?;
        StatementKind::try_from(kind)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data_kind(), f)
    }
}

/// Rows of one statement kind, serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementRows {
    Income(Vec<Stored<IncomeStatement>>),
    Balance(Vec<Stored<BalanceSheet>>),
    CashFlow(Vec<Stored<CashFlowStatement>>),
    KeyMetrics(Vec<Stored<KeyMetrics>>),
    Ratios(Vec<Stored<FinancialRatios>>),
    Scores(Vec<Stored<FinancialScores>>),
    Ratings(Vec<Stored<Rating>>),
}

impl StatementRows {
    pub fn len(&self) -> usize {
        match self {
            StatementRows::Income(rows) => rows.len(),
            StatementRows::Balance(rows) => rows.len(),
            StatementRows::CashFlow(rows) => rows.len(),
            StatementRows::KeyMetrics(rows) => rows.len(),
            StatementRows::Ratios(rows) => rows.len(),
            StatementRows::Scores(rows) => rows.len(),
            StatementRows::Ratings(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
