use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use stockmate_market_data::Period;

/// A persisted record: the vendor payload plus identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// What a reconcile did to the persisted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    /// The row already held the candidate's payload and was left untouched.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled<T> {
    pub outcome: UpsertOutcome,
    pub entity: Stored<T>,
}

/// A candidate that could not be reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileFailure {
    /// Natural key of the candidate, e.g. `AAPL/2024-09-28/FY`
    pub key: String,
    pub message: String,
}

/// Outcome of reconciling a batch of candidates of one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failures: Vec<ReconcileFailure>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.created += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn fail(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.failures.push(ReconcileFailure {
            key: key.into(),
            message: message.into(),
        });
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Candidates that ended up persisted, whether written or already current.
    pub fn persisted(&self) -> usize {
        self.created + self.updated + self.unchanged
    }
}

/// Filter for listing a symbol's rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub period: Option<Period>,
    pub limit: Option<i64>,
}

impl ListFilter {
    pub fn period(period: Option<Period>) -> Self {
        Self {
            period,
            limit: None,
        }
    }

    pub fn limit(limit: Option<i64>) -> Self {
        Self {
            period: None,
            limit,
        }
    }
}
