use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockmate_market_data::{DataKind, FetchParams, Period};

use crate::records::BatchReport;

/// Options applied to every requested kind that accepts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptions {
    pub period: Option<Period>,
    pub limit: Option<u32>,
}

impl SyncOptions {
    /// Vendor parameters for `kind`, keeping only what it accepts.
    pub fn params_for(&self, kind: DataKind) -> FetchParams {
        FetchParams {
            period: self.period,
            limit: self.limit,
            ..Default::default()
        }
        .scoped_to(kind)
    }
}

/// Result of syncing one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindSyncReport {
    pub kind: DataKind,
    /// Elements the vendor returned, including rejected ones.
    pub fetched: usize,
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    /// First error hit while syncing this kind.
    pub error: Option<String>,
}

impl KindSyncReport {
    pub fn new(kind: DataKind) -> Self {
        Self {
            kind,
            fetched: 0,
            created: 0,
            updated: 0,
            unchanged: 0,
            failed: 0,
            error: None,
        }
    }

    /// The kind could not be attempted at all, e.g. the vendor call failed.
    pub fn aborted(kind: DataKind, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(kind)
        }
    }

    pub fn absorb(&mut self, batch: BatchReport) {
        self.created += batch.created;
        self.updated += batch.updated;
        self.unchanged += batch.unchanged;
        self.failed += batch.failures.len();
        if self.error.is_none() {
            self.error = batch
                .failures
                .into_iter()
                .next()
                .map(|f| format!("{}: {}", f.key, f.message));
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.failed == 0
    }
}

/// Aggregate result of one `sync_symbol` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub symbol: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub kinds: Vec<KindSyncReport>,
}

impl SyncReport {
    pub fn new(symbol: &str) -> Self {
        let now = Utc::now();
        Self {
            symbol: symbol.to_string(),
            started_at: now,
            finished_at: now,
            kinds: Vec::new(),
        }
    }

    /// True when every kind synced without an error.
    pub fn is_success(&self) -> bool {
        self.kinds.iter().all(KindSyncReport::is_success)
    }

    pub fn kind(&self, kind: DataKind) -> Option<&KindSyncReport> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    pub fn summary(&self) -> String {
        let created: usize = self.kinds.iter().map(|k| k.created).sum();
        let updated: usize = self.kinds.iter().map(|k| k.updated).sum();
        let failed_kinds = self.kinds.iter().filter(|k| !k.is_success()).count();
        format!(
            "{}: {} created, {} updated, {} of {} kinds with errors",
            self.symbol,
            created,
            updated,
            failed_kinds,
            self.kinds.len()
        )
    }
}
