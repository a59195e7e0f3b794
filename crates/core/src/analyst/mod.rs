//! Analyst module - grade changes and price target consensus.

mod analyst_service;
mod analyst_traits;

pub use analyst_service::AnalystService;
pub use analyst_traits::AnalystServiceTrait;
