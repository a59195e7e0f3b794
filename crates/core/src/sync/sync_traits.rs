use async_trait::async_trait;
use stockmate_market_data::DataKind;

use super::sync_model::{SyncOptions, SyncReport};
use crate::errors::Result;

/// Trait for the sync orchestrator
#[async_trait]
pub trait SyncServiceTrait: Send + Sync {
    /// Fetch and reconcile `kinds` for `symbol`. An empty slice means every kind.
    ///
    /// Fails only when the symbol itself is invalid; per-kind failures are
    /// reported in the returned [`SyncReport`].
    async fn sync_symbol(
        &self,
        symbol: &str,
        kinds: &[DataKind],
        options: &SyncOptions,
    ) -> Result<SyncReport>;
}
