//! StockMate Core - domain records, services and storage traits.
//!
//! This crate holds the sync orchestrator and the read services. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod analyst;
pub mod companies;
pub mod corporate_events;
pub mod errors;
pub mod financials;
pub mod records;
pub mod sync;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
