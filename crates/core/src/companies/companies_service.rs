use std::sync::Arc;

use stockmate_market_data::normalize_symbol;

use super::companies_model::Company;
use super::companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
use crate::errors::{Error, Result};

pub struct CompanyService {
    repository: Arc<dyn CompanyRepositoryTrait>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl CompanyServiceTrait for CompanyService {
    fn get_company(&self, symbol: &str) -> Result<Company> {
        let symbol = normalize_symbol(symbol)?;
        require_company(self.repository.as_ref(), &symbol)
    }

    fn list_companies(&self) -> Result<Vec<Company>> {
        self.repository.list()
    }
}

/// Loads the company or fails with `NotFound` when the symbol was never synced.
pub(crate) fn require_company(
    repository: &dyn CompanyRepositoryTrait,
    symbol: &str,
) -> Result<Company> {
    repository
        .get_by_symbol(symbol)?
        .ok_or_else(|| Error::NotFound(format!("Company {} has not been synced", symbol)))
}
