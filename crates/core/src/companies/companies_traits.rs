use async_trait::async_trait;

use super::companies_model::Company;
use crate::errors::Result;

/// Trait for company (master record) repository operations
#[async_trait]
pub trait CompanyRepositoryTrait: Send + Sync {
    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Company>>;
    fn list(&self) -> Result<Vec<Company>>;
    /// Creates a bare company row for `symbol` if none exists. Returns true when created.
    async fn ensure_exists(&self, symbol: &str) -> Result<bool>;
    /// Deletes the company and, by cascade, every child row.
    async fn delete(&self, symbol: &str) -> Result<usize>;
}

/// Trait for company service operations
pub trait CompanyServiceTrait: Send + Sync {
    fn get_company(&self, symbol: &str) -> Result<Company>;
    fn list_companies(&self) -> Result<Vec<Company>>;
}
