//! Sync orchestrator - fetch, reconcile and report per data kind.

mod sync_model;
mod sync_service;
mod sync_traits;

pub use sync_model::{KindSyncReport, SyncOptions, SyncReport};
pub use sync_service::SyncService;
pub use sync_traits::SyncServiceTrait;
