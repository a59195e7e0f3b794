mod model;
mod repository;

pub use model::{DividendDB, NewsArticleDB, StockSplitDB};
pub use repository::{DividendRepository, NewsRepository, StockSplitRepository};
