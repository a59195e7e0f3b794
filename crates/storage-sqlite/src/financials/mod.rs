mod model;
mod repository;

pub use model::{
    BalanceSheetDB, CashFlowStatementDB, FinancialRatiosDB, FinancialScoresDB, IncomeStatementDB,
    KeyMetricsDB, RatingDB,
};
pub use repository::{
    BalanceSheetRepository, CashFlowRepository, FinancialRatiosRepository,
    FinancialScoresRepository, IncomeStatementRepository, KeyMetricsRepository, RatingRepository,
};
