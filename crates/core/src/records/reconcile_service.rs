use std::sync::Arc;

use log::{debug, warn};
use stockmate_market_data::{
    BalanceSheet, CashFlowStatement, CompanyProfile, Dividend, FinancialRatios, FinancialScores,
    Grading, IncomeStatement, KeyMetrics, NewsArticle, PriceTarget, Rating, StockSplit,
};

use super::records_model::BatchReport;
use super::records_traits::{DomainRecord, RecordStore};

/// One store per record kind.
#[derive(Clone)]
pub struct RecordStores {
    pub companies: Arc<dyn RecordStore<CompanyProfile>>,
    pub income_statements: Arc<dyn RecordStore<IncomeStatement>>,
    pub balance_sheets: Arc<dyn RecordStore<BalanceSheet>>,
    pub cash_flows: Arc<dyn RecordStore<CashFlowStatement>>,
    pub key_metrics: Arc<dyn RecordStore<KeyMetrics>>,
    pub financial_ratios: Arc<dyn RecordStore<FinancialRatios>>,
    pub financial_scores: Arc<dyn RecordStore<FinancialScores>>,
    pub ratings: Arc<dyn RecordStore<Rating>>,
    pub price_targets: Arc<dyn RecordStore<PriceTarget>>,
    pub gradings: Arc<dyn RecordStore<Grading>>,
    pub dividends: Arc<dyn RecordStore<Dividend>>,
    pub splits: Arc<dyn RecordStore<StockSplit>>,
    pub news: Arc<dyn RecordStore<NewsArticle>>,
}

/// Reconciles every candidate independently.
///
/// A candidate that fails validation or storage is recorded in the report;
/// the rest of the batch still runs.
pub async fn reconcile_batch<T: DomainRecord>(
    store: &dyn RecordStore<T>,
    candidates: Vec<T>,
) -> BatchReport {
    let mut report = BatchReport::default();

    for candidate in candidates {
        let key = candidate.natural_key();
        if let Err(e) = candidate.validate() {
            warn!("Skipping invalid {} candidate {}: {}", T::KIND, key, e);
            report.fail(key, e.to_string());
            continue;
        }

        match store.reconcile(candidate).await {
            Ok(reconciled) => {
                debug!("{} {} -> {:?}", T::KIND, key, reconciled.outcome);
                report.record(reconciled.outcome);
            }
            Err(e) => {
                warn!("Failed to reconcile {} {}: {}", T::KIND, key, e);
                report.fail(key, e.to_string());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::{income_statement, InMemoryStore};
    use crate::records::ListFilter;

    #[tokio::test]
    async fn test_batch_with_one_malformed_candidate() {
        let store = InMemoryStore::<IncomeStatement>::default();
        let mut malformed = income_statement("2022-12-31", 100.0);
        malformed.symbol = String::new();

        let report = reconcile_batch(
            &store,
            vec![
                income_statement("2024-12-31", 300.0),
                malformed,
                income_statement("2023-12-31", 200.0),
            ],
        )
        .await;

        assert_eq!(report.created, 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            store
                .list_by_symbol("AAPL", &ListFilter::default())
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_abort_batch() {
        let store = InMemoryStore::<IncomeStatement>::default();
        store.fail_on("AAPL/2023-12-31/FY");

        let report = reconcile_batch(
            &store,
            vec![
                income_statement("2023-12-31", 200.0),
                income_statement("2024-12-31", 300.0),
            ],
        )
        .await;

        assert_eq!(report.created, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].key, "AAPL/2023-12-31/FY");
    }

    #[tokio::test]
    async fn test_lowercase_symbol_is_rejected() {
        let store = InMemoryStore::<IncomeStatement>::default();
        let mut candidate = income_statement("2024-12-31", 300.0);
        candidate.symbol = "aapl".to_string();

        let report = reconcile_batch(&store, vec![candidate]).await;

        assert_eq!(report.failed(), 1);
        assert_eq!(report.persisted(), 0);
    }

    #[tokio::test]
    async fn test_repeated_batch_is_unchanged() {
        let store = InMemoryStore::<IncomeStatement>::default();
        let batch = vec![income_statement("2024-12-31", 300.0)];

        reconcile_batch(&store, batch.clone()).await;
        let second = reconcile_batch(&store, batch).await;

        assert_eq!(second.unchanged, 1);
        assert_eq!(second.created, 0);

        let updated = reconcile_batch(&store, vec![income_statement("2024-12-31", 310.0)]).await;
        assert_eq!(updated.updated, 1);
        let rows = store.list_by_symbol("AAPL", &ListFilter::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.revenue, Some(310.0));
    }
}
