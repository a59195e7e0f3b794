//! Persisted record model, storage seam and batched reconciliation.

mod reconcile_service;
mod records_model;
mod records_traits;

#[cfg(test)]
pub(crate) mod testing;

pub use reconcile_service::{reconcile_batch, RecordStores};
pub use records_model::{
    BatchReport, ListFilter, ReconcileFailure, Reconciled, Stored, UpsertOutcome,
};
pub use records_traits::{DomainRecord, RecordStore};
