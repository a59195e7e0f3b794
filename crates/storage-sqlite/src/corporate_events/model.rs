use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use stockmate_core::Result;
use stockmate_market_data::{Dividend, NewsArticle, StockSplit};

use crate::records::RowMeta;

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::dividends)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct DividendDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub record_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub declaration_date: Option<NaiveDate>,
    pub adj_dividend: Option<f64>,
    pub dividend: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub frequency: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl DividendDB {
    pub fn new(record: &Dividend, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            record_date: record.record_date,
            payment_date: record.payment_date,
            declaration_date: record.declaration_date,
            adj_dividend: record.adj_dividend,
            dividend: record.dividend,
            dividend_yield: record.dividend_yield,
            frequency: record.frequency.clone(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<Dividend> {
        Ok(Dividend {
            symbol: self.symbol.clone(),
            date: self.date,
            record_date: self.record_date,
            payment_date: self.payment_date,
            declaration_date: self.declaration_date,
            adj_dividend: self.adj_dividend,
            dividend: self.dividend,
            dividend_yield: self.dividend_yield,
            frequency: self.frequency.clone(),
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::stock_splits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockSplitDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub numerator: f64,
    pub denominator: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl StockSplitDB {
    pub fn new(record: &StockSplit, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            numerator: record.numerator,
            denominator: record.denominator,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<StockSplit> {
        Ok(StockSplit {
            symbol: self.symbol.clone(),
            date: self.date,
            numerator: self.numerator,
            denominator: self.denominator,
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::news_articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct NewsArticleDB {
    pub id: String,
    pub symbol: String,
    pub published_at: NaiveDateTime,
    pub url: String,
    pub title: String,
    pub publisher: Option<String>,
    pub site: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewsArticleDB {
    pub fn new(record: &NewsArticle, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            published_at: record.published_at,
            url: record.url.clone(),
            title: record.title.clone(),
            publisher: record.publisher.clone(),
            site: record.site.clone(),
            image: record.image.clone(),
            text: record.text.clone(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<NewsArticle> {
        Ok(NewsArticle {
            symbol: self.symbol.clone(),
            published_at: self.published_at,
            title: self.title.clone(),
            url: self.url.clone(),
            publisher: self.publisher.clone(),
            site: self.site.clone(),
            image: self.image.clone(),
            text: self.text.clone(),
        })
    }
}
