use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use stockmate_core::records::ListFilter;
use stockmate_market_data::{Dividend, NewsArticle, StockSplit};

use super::model::{DividendDB, NewsArticleDB, StockSplitDB};
use crate::records::{row_plumbing, RecordRow, SqliteRecordStore};
use crate::schema::dividends::dsl as dividends_dsl;
use crate::schema::news_articles::dsl as news_dsl;
use crate::schema::stock_splits::dsl as splits_dsl;

pub type DividendRepository = SqliteRecordStore<DividendDB>;
pub type StockSplitRepository = SqliteRecordStore<StockSplitDB>;
pub type NewsRepository = SqliteRecordStore<NewsArticleDB>;

impl RecordRow for DividendDB {
    type Record = Dividend;

    row_plumbing!(crate::schema::dividends::table);

    fn find(conn: &mut SqliteConnection, record: &Dividend) -> QueryResult<Option<Self>> {
        dividends_dsl::dividends
            .filter(dividends_dsl::symbol.eq(&record.symbol))
            .filter(dividends_dsl::date.eq(record.date))
            .select(DividendDB::as_select())
            .first(conn)
            .optional()
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        let mut query = dividends_dsl::dividends
            .filter(dividends_dsl::symbol.eq(symbol))
            .select(DividendDB::as_select())
            .into_boxed();
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query.order(dividends_dsl::date.desc()).load(conn)
    }
}

impl RecordRow for StockSplitDB {
    type Record = StockSplit;

    row_plumbing!(crate::schema::stock_splits::table);

    fn find(conn: &mut SqliteConnection, record: &StockSplit) -> QueryResult<Option<Self>> {
        splits_dsl::stock_splits
            .filter(splits_dsl::symbol.eq(&record.symbol))
            .filter(splits_dsl::date.eq(record.date))
            .select(StockSplitDB::as_select())
            .first(conn)
            .optional()
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        let mut query = splits_dsl::stock_splits
            .filter(splits_dsl::symbol.eq(symbol))
            .select(StockSplitDB::as_select())
            .into_boxed();
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query.order(splits_dsl::date.desc()).load(conn)
    }
}

impl RecordRow for NewsArticleDB {
    type Record = NewsArticle;

    row_plumbing!(crate::schema::news_articles::table);

    fn find(conn: &mut SqliteConnection, record: &NewsArticle) -> QueryResult<Option<Self>> {
        news_dsl::news_articles
            .filter(news_dsl::symbol.eq(&record.symbol))
            .filter(news_dsl::published_at.eq(record.published_at))
            .filter(news_dsl::url.eq(&record.url))
            .select(NewsArticleDB::as_select())
            .first(conn)
            .optional()
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        let mut query = news_dsl::news_articles
            .filter(news_dsl::symbol.eq(symbol))
            .select(NewsArticleDB::as_select())
            .into_boxed();
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query.order(news_dsl::published_at.desc()).load(conn)
    }
}
