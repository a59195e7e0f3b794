use std::sync::Arc;

use stockmate_market_data::{normalize_symbol, Dividend, NewsArticle, StockSplit};

use super::corporate_events_traits::CorporateEventsServiceTrait;
use crate::companies::{require_company, CompanyRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::records::{ListFilter, RecordStores, Stored};

pub struct CorporateEventsService {
    companies: Arc<dyn CompanyRepositoryTrait>,
    stores: RecordStores,
}

impl CorporateEventsService {
    pub fn new(companies: Arc<dyn CompanyRepositoryTrait>, stores: RecordStores) -> Self {
        Self { companies, stores }
    }

    fn synced_symbol(&self, symbol: &str) -> Result<String> {
        let symbol = normalize_symbol(symbol)?;
        require_company(self.companies.as_ref(), &symbol)?;
        Ok(symbol)
    }
}

impl CorporateEventsServiceTrait for CorporateEventsService {
    fn get_dividends(&self, symbol: &str) -> Result<Vec<Stored<Dividend>>> {
        let symbol = self.synced_symbol(symbol)?;
        self.stores
            .dividends
            .list_by_symbol(&symbol, &ListFilter::default())
    }

    fn get_splits(&self, symbol: &str) -> Result<Vec<Stored<StockSplit>>> {
        let symbol = self.synced_symbol(symbol)?;
        self.stores
            .splits
            .list_by_symbol(&symbol, &ListFilter::default())
    }

    fn get_news(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<Stored<NewsArticle>>> {
        if let Some(limit) = limit {
            if limit < 1 {
                return Err(ValidationError::InvalidInput(format!(
                    "limit must be positive, got {}",
                    limit
                ))
                .into());
            }
        }
        let symbol = self.synced_symbol(symbol)?;
        self.stores
            .news
            .list_by_symbol(&symbol, &ListFilter::limit(limit))
    }
}
