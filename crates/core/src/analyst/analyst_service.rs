use std::sync::Arc;

use stockmate_market_data::{normalize_symbol, Grading, PriceTarget};

use super::analyst_traits::AnalystServiceTrait;
use crate::companies::{require_company, CompanyRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::records::{ListFilter, RecordStores, Stored};

pub struct AnalystService {
    companies: Arc<dyn CompanyRepositoryTrait>,
    stores: RecordStores,
}

impl AnalystService {
    pub fn new(companies: Arc<dyn CompanyRepositoryTrait>, stores: RecordStores) -> Self {
        Self { companies, stores }
    }
}

impl AnalystServiceTrait for AnalystService {
    fn get_gradings(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<Stored<Grading>>> {
        if let Some(limit) = limit.filter(|l| *l < 1) {
            return Err(ValidationError::InvalidInput(format!(
                "limit must be positive, got {}",
                limit
            ))
            .into());
        }
        let symbol = normalize_symbol(symbol)?;
        require_company(self.companies.as_ref(), &symbol)?;
        self.stores
            .gradings
            .list_by_symbol(&symbol, &ListFilter::limit(limit))
    }

    fn get_price_targets(&self, symbol: &str) -> Result<Vec<Stored<PriceTarget>>> {
        let symbol = normalize_symbol(symbol)?;
        require_company(self.companies.as_ref(), &symbol)?;
        self.stores
            .price_targets
            .list_by_symbol(&symbol, &ListFilter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::{apple_profile, in_memory_stores, InMemoryStore};
    use crate::records::{RecordStore, UpsertOutcome};
    use chrono::NaiveDate;
    use stockmate_market_data::CompanyProfile;

    fn grading(date: &str, firm: &str, new_grade: &str) -> Grading {
        Grading {
            symbol: "AAPL".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            grading_company: firm.to_string(),
            previous_grade: None,
            new_grade: Some(new_grade.to_string()),
            action: Some("maintain".to_string()),
        }
    }

    #[tokio::test]
    async fn test_same_day_grades_from_two_firms_are_distinct() {
        let companies = Arc::new(InMemoryStore::<CompanyProfile>::default());
        companies.reconcile(apple_profile()).await.unwrap();
        let stores = in_memory_stores(companies.clone());
        stores
            .gradings
            .reconcile(grading("2025-01-31", "Morgan Stanley", "Overweight"))
            .await
            .unwrap();
        stores
            .gradings
            .reconcile(grading("2025-01-31", "Barclays", "Underweight"))
            .await
            .unwrap();
        let revised = stores
            .gradings
            .reconcile(grading("2025-01-31", "Barclays", "Equal-Weight"))
            .await
            .unwrap();
        assert_eq!(revised.outcome, UpsertOutcome::Updated);

        let service = AnalystService::new(companies, stores);
        let rows = service.get_gradings("aapl", None).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(service.get_gradings("AAPL", Some(1)).unwrap().len(), 1);
        assert!(service.get_price_targets("AAPL").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gradings_limit_must_be_positive() {
        let companies = Arc::new(InMemoryStore::<CompanyProfile>::default());
        companies.reconcile(apple_profile()).await.unwrap();
        let service = AnalystService::new(companies.clone(), in_memory_stores(companies));

        assert!(service
            .get_gradings("AAPL", Some(0))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_unsynced_symbol_is_not_found() {
        let companies = Arc::new(InMemoryStore::<CompanyProfile>::default());
        let service = AnalystService::new(companies.clone(), in_memory_stores(companies));

        assert!(service.get_price_targets("AAPL").unwrap_err().is_not_found());
    }
}
