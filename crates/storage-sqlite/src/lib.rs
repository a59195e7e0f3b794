//! SQLite storage implementation for StockMate.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the store traits defined in `stockmate-core` and contains:
//! - Database connection pooling and the single writer actor
//! - Diesel migrations
//! - Per-key reconciliation shared by every record table
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//! market-data (vendor)     core (domain, sync)
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//!          storage-sqlite (this crate)
//!                     │
//!                     ▼
//!                 SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod records;
pub mod schema;

// Repository implementations
pub mod analyst;
pub mod companies;
pub mod corporate_events;
pub mod financials;
mod repositories;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};
pub use repositories::Repositories;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from stockmate-core for convenience
pub use stockmate_core::errors::{DatabaseError, Error, Result};

#[cfg(test)]
pub(crate) mod testing;
