//! Core error types for StockMate.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

pub use stockmate_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    /// A read found nothing for the requested key.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True when the caller asked for something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_))
        )
    }

    /// True when the caller supplied a bad argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::MarketData(e) => e.is_invalid_argument(),
            _ => false,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate natural key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for candidate records and request input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(Error::NotFound("AAPL".into()).is_not_found());
        assert!(Error::Database(DatabaseError::NotFound("row".into())).is_not_found());
        let err: Error = ValidationError::InvalidInput("symbol".into()).into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_argument_classification() {
        let err: Error = MarketDataError::InvalidArgument("limit".into()).into();
        assert!(err.is_invalid_argument());

        let err: Error = MarketDataError::transport("profile", Some(500), "oops").into();
        assert!(!err.is_invalid_argument());

        let err: Error = ValidationError::InvalidInput("symbol".into()).into();
        assert!(err.is_invalid_argument());
    }
}
