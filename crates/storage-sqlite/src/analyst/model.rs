use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use stockmate_core::Result;
use stockmate_market_data::{Grading, PriceTarget};

use crate::records::RowMeta;

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::gradings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct GradingDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub grading_company: String,
    pub previous_grade: Option<String>,
    pub new_grade: Option<String>,
    pub action: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl GradingDB {
    pub fn new(record: &Grading, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            grading_company: record.grading_company.clone(),
            previous_grade: record.previous_grade.clone(),
            new_grade: record.new_grade.clone(),
            action: record.action.clone(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<Grading> {
        Ok(Grading {
            symbol: self.symbol.clone(),
            date: self.date,
            grading_company: self.grading_company.clone(),
            previous_grade: self.previous_grade.clone(),
            new_grade: self.new_grade.clone(),
            action: self.action.clone(),
        })
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::price_targets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PriceTargetDB {
    pub id: String,
    pub symbol: String,
    pub date: NaiveDate,
    pub target_high: Option<f64>,
    pub target_low: Option<f64>,
    pub target_consensus: Option<f64>,
    pub target_median: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PriceTargetDB {
    pub fn new(record: &PriceTarget, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: record.symbol.clone(),
            date: record.date,
            target_high: record.target_high,
            target_low: record.target_low,
            target_consensus: record.target_consensus,
            target_median: record.target_median,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<PriceTarget> {
        Ok(PriceTarget {
            symbol: self.symbol.clone(),
            date: self.date,
            target_high: self.target_high,
            target_low: self.target_low,
            target_consensus: self.target_consensus,
            target_median: self.target_median,
        })
    }
}
