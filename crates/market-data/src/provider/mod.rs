//! Provider abstraction and implementations.
//!
//! - [`FinancialDataProvider`] is the seam the sync orchestrator depends on
//! - [`ProviderConfig`] carries the API key, base URL and timeout explicitly
//! - [`fmp`] talks to Financial Modeling Prep

mod config;
mod traits;

pub mod fmp;

pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use traits::FinancialDataProvider;
