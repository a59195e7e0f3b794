//! Financials module - periodic records (statements, key metrics, ratings) and their read service.

mod financials_model;
mod financials_service;
mod financials_traits;

pub use financials_model::{StatementKind, StatementRows};
pub use financials_service::FinancialsService;
pub use financials_traits::FinancialsServiceTrait;
