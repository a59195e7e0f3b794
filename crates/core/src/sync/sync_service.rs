use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use stockmate_market_data::{normalize_symbol, DataKind, Fetched, FinancialDataProvider, VendorData};

use super::sync_model::{KindSyncReport, SyncOptions, SyncReport};
use super::sync_traits::SyncServiceTrait;
use crate::companies::CompanyRepositoryTrait;
use crate::errors::Result;
use crate::records::{reconcile_batch, BatchReport, DomainRecord, RecordStore, RecordStores};

/// Fetches vendor data for a symbol and reconciles it into storage.
///
/// Kinds run one after another with exactly one vendor call each. A failing
/// kind is recorded in the report and the remaining kinds still run.
pub struct SyncService {
    provider: Arc<dyn FinancialDataProvider>,
    companies: Arc<dyn CompanyRepositoryTrait>,
    stores: RecordStores,
}

impl SyncService {
    pub fn new(
        provider: Arc<dyn FinancialDataProvider>,
        companies: Arc<dyn CompanyRepositoryTrait>,
        stores: RecordStores,
    ) -> Self {
        Self {
            provider,
            companies,
            stores,
        }
    }

    /// De-duplicated kinds with the profile first, so the company row carries
    /// vendor data before children reference it.
    pub(crate) fn plan(kinds: &[DataKind]) -> Vec<DataKind> {
        let requested = if kinds.is_empty() {
            DataKind::ALL.to_vec()
        } else {
            kinds.to_vec()
        };

        let mut plan = Vec::with_capacity(requested.len());
        if requested.contains(&DataKind::Profile) {
            plan.push(DataKind::Profile);
        }
        for kind in requested {
            if !plan.contains(&kind) {
                plan.push(kind);
            }
        }
        plan
    }

    async fn sync_kind(&self, symbol: &str, kind: DataKind, options: &SyncOptions) -> KindSyncReport {
        let params = options.params_for(kind);
        let data = match self.provider.fetch(kind, symbol, &params).await {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "Fetching {} for {} from {} failed: {}",
                    kind,
                    symbol,
                    self.provider.id(),
                    e
                );
                return KindSyncReport::aborted(kind, e.to_string());
            }
        };

        match data {
            VendorData::Profile(f) => self.persist(self.stores.companies.as_ref(), symbol, f).await,
            VendorData::IncomeStatements(f) => {
                self.persist(self.stores.income_statements.as_ref(), symbol, f)
                    .await
            }
            VendorData::BalanceSheets(f) => {
                self.persist(self.stores.balance_sheets.as_ref(), symbol, f)
                    .await
            }
            VendorData::CashFlows(f) => {
                self.persist(self.stores.cash_flows.as_ref(), symbol, f).await
            }
            VendorData::KeyMetrics(f) => {
                self.persist(self.stores.key_metrics.as_ref(), symbol, f).await
            }
            VendorData::FinancialRatios(f) => {
                self.persist(self.stores.financial_ratios.as_ref(), symbol, f)
                    .await
            }
            VendorData::FinancialScores(f) => {
                self.persist(self.stores.financial_scores.as_ref(), symbol, f)
                    .await
            }
            VendorData::Ratings(f) => self.persist(self.stores.ratings.as_ref(), symbol, f).await,
            VendorData::PriceTargets(f) => {
                self.persist(self.stores.price_targets.as_ref(), symbol, f)
                    .await
            }
            VendorData::Gradings(f) => self.persist(self.stores.gradings.as_ref(), symbol, f).await,
            VendorData::Dividends(f) => {
                self.persist(self.stores.dividends.as_ref(), symbol, f).await
            }
            VendorData::Splits(f) => self.persist(self.stores.splits.as_ref(), symbol, f).await,
            VendorData::News(f) => self.persist(self.stores.news.as_ref(), symbol, f).await,
        }
    }

    async fn persist<T: DomainRecord>(
        &self,
        store: &dyn RecordStore<T>,
        symbol: &str,
        fetched: Fetched<T>,
    ) -> KindSyncReport {
        let mut report = KindSyncReport::new(T::KIND);
        report.fetched = fetched.records.len() + fetched.rejected.len();

        // Elements the client already dropped count as failed candidates.
        let mut dropped = BatchReport::default();
        for rejected in fetched.rejected {
            dropped.fail(
                format!("{}/{}[{}]", symbol, T::KIND, rejected.index),
                rejected.reason,
            );
        }

        let (candidates, foreign): (Vec<T>, Vec<T>) = fetched
            .records
            .into_iter()
            .partition(|record| record.symbol() == symbol);
        for record in foreign {
            dropped.fail(
                record.natural_key(),
                format!("vendor returned {} while syncing {}", record.symbol(), symbol),
            );
        }
        report.absorb(dropped);

        if candidates.is_empty() {
            return report;
        }

        if T::KIND != DataKind::Profile {
            match self.companies.ensure_exists(symbol).await {
                Ok(true) => info!("Created company row for {}", symbol),
                Ok(false) => {}
                Err(e) => {
                    warn!("Could not ensure company {}: {}", symbol, e);
                    report.failed += candidates.len();
                    report.error.get_or_insert_with(|| e.to_string());
                    return report;
                }
            }
        }

        report.absorb(reconcile_batch(store, candidates).await);
        report
    }
}

#[async_trait]
impl SyncServiceTrait for SyncService {
    async fn sync_symbol(
        &self,
        symbol: &str,
        kinds: &[DataKind],
        options: &SyncOptions,
    ) -> Result<SyncReport> {
        let symbol = normalize_symbol(symbol)?;
        let plan = Self::plan(kinds);
        info!("Syncing {} ({} kinds)", symbol, plan.len());

        let mut report = SyncReport::new(&symbol);
        for kind in plan {
            let kind_report = self.sync_kind(&symbol, kind, options).await;
            report.kinds.push(kind_report);
        }
        report.finished_at = chrono::Utc::now();

        if report.is_success() {
            info!("Sync finished: {}", report.summary());
        } else {
            warn!("Sync finished with errors: {}", report.summary());
        }
        Ok(report)
    }
}
