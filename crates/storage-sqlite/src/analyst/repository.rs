use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use stockmate_core::records::ListFilter;
use stockmate_market_data::{Grading, PriceTarget};

use super::model::{GradingDB, PriceTargetDB};
use crate::records::{row_plumbing, RecordRow, SqliteRecordStore};
use crate::schema::gradings::dsl as gradings_dsl;
use crate::schema::price_targets::dsl as targets_dsl;

pub type GradingRepository = SqliteRecordStore<GradingDB>;
pub type PriceTargetRepository = SqliteRecordStore<PriceTargetDB>;

impl RecordRow for GradingDB {
    type Record = Grading;

    row_plumbing!(crate::schema::gradings::table);

    fn find(conn: &mut SqliteConnection, record: &Grading) -> QueryResult<Option<Self>> {
        gradings_dsl::gradings
            .filter(gradings_dsl::symbol.eq(&record.symbol))
            .filter(gradings_dsl::date.eq(record.date))
            .filter(gradings_dsl::grading_company.eq(&record.grading_company))
            .select(GradingDB::as_select())
            .first(conn)
            .optional()
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        let mut query = gradings_dsl::gradings
            .filter(gradings_dsl::symbol.eq(symbol))
            .select(GradingDB::as_select())
            .into_boxed();
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query
            .order((gradings_dsl::date.desc(), gradings_dsl::grading_company.asc()))
            .load(conn)
    }
}

impl RecordRow for PriceTargetDB {
    type Record = PriceTarget;

    row_plumbing!(crate::schema::price_targets::table);

    fn find(conn: &mut SqliteConnection, record: &PriceTarget) -> QueryResult<Option<Self>> {
        targets_dsl::price_targets
            .filter(targets_dsl::symbol.eq(&record.symbol))
            .filter(targets_dsl::date.eq(record.date))
            .select(PriceTargetDB::as_select())
            .first(conn)
            .optional()
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        let mut query = targets_dsl::price_targets
            .filter(targets_dsl::symbol.eq(symbol))
            .select(PriceTargetDB::as_select())
            .into_boxed();
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query.order(targets_dsl::date.desc()).load(conn)
    }
}
