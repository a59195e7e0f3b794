use std::sync::Arc;

use stockmate_market_data::{normalize_symbol, Period};

use super::financials_model::{StatementKind, StatementRows};
use super::financials_traits::FinancialsServiceTrait;
use crate::companies::{require_company, CompanyRepositoryTrait};
use crate::errors::Result;
use crate::records::{ListFilter, RecordStores};

pub struct FinancialsService {
    companies: Arc<dyn CompanyRepositoryTrait>,
    stores: RecordStores,
}

impl FinancialsService {
    pub fn new(companies: Arc<dyn CompanyRepositoryTrait>, stores: RecordStores) -> Self {
        Self { companies, stores }
    }
}

impl FinancialsServiceTrait for FinancialsService {
    fn get_statements(
        &self,
        symbol: &str,
        kind: StatementKind,
        period: Option<Period>,
    ) -> Result<StatementRows> {
        let symbol = normalize_symbol(symbol)?;
        require_company(self.companies.as_ref(), &symbol)?;

        let filter = ListFilter::period(period);
        let rows = match kind {
            StatementKind::IncomeStatement => {
                StatementRows::Income(self.stores.income_statements.list_by_symbol(&symbol, &filter)?)
            }
            StatementKind::BalanceSheet => {
                StatementRows::Balance(self.stores.balance_sheets.list_by_symbol(&symbol, &filter)?)
            }
            StatementKind::CashFlow => {
                StatementRows::CashFlow(self.stores.cash_flows.list_by_symbol(&symbol, &filter)?)
            }
            StatementKind::KeyMetrics => {
                StatementRows::KeyMetrics(self.stores.key_metrics.list_by_symbol(&symbol, &filter)?)
            }
            StatementKind::FinancialRatios => StatementRows::Ratios(
                self.stores.financial_ratios.list_by_symbol(&symbol, &filter)?,
            ),
            StatementKind::FinancialScores => StatementRows::Scores(
                self.stores.financial_scores.list_by_symbol(&symbol, &filter)?,
            ),
            StatementKind::Rating => {
                StatementRows::Ratings(self.stores.ratings.list_by_symbol(&symbol, &filter)?)
            }
        };
        Ok(rows)
    }
}
