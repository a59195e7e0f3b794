//! Row plumbing shared by every record table: the row/record mapping,
//! per-key reconciliation and the generic store.

mod reconcile;
mod store;

pub use store::SqliteRecordStore;

#[cfg(test)]
pub(crate) use reconcile::{apply, try_insert, Attempt};
pub(crate) use reconcile::reconcile;

use chrono::NaiveDateTime;
use diesel::sqlite::SqliteConnection;
use diesel::QueryResult;
use stockmate_core::errors::Result;
use stockmate_core::records::{DomainRecord, ListFilter, Stored};
use stockmate_market_data::Period;

use crate::errors::StorageError;

/// Identity and timestamps of a row, independent of its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMeta {
    pub id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RowMeta {
    pub fn fresh(now: NaiveDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Same identity, new `updated_at`.
    pub fn touched(&self, now: NaiveDateTime) -> Self {
        Self {
            updated_at: now,
            ..self.clone()
        }
    }
}

/// A table row that maps one-to-one onto a domain record.
pub trait RecordRow: Sized + Send + 'static {
    type Record: DomainRecord;

    fn from_record(record: &Self::Record, meta: RowMeta) -> Self;
    fn to_record(&self) -> Result<Self::Record>;
    fn meta(&self) -> RowMeta;

    /// The row holding `record`'s natural key, if any.
    fn find(conn: &mut SqliteConnection, record: &Self::Record) -> QueryResult<Option<Self>>;
    fn list(conn: &mut SqliteConnection, symbol: &str, filter: &ListFilter)
        -> QueryResult<Vec<Self>>;
    fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<usize>;
    fn update(&self, conn: &mut SqliteConnection) -> QueryResult<usize>;

    fn into_stored(self) -> Result<Stored<Self::Record>> {
        let record = self.to_record()?;
        let meta = self.meta();
        Ok(Stored {
            id: meta.id,
            record,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        })
    }
}

/// Expands to the `RecordRow` items every row type implements the same way.
/// The row must have `id`, `created_at` and `updated_at` fields plus inherent
/// `new(&Record, RowMeta)` and `record()` functions.
macro_rules! row_plumbing {
    ($table:path) => {
        fn from_record(record: &Self::Record, meta: $crate::records::RowMeta) -> Self {
            Self::new(record, meta)
        }

        fn to_record(&self) -> stockmate_core::Result<Self::Record> {
            self.record()
        }

        fn meta(&self) -> $crate::records::RowMeta {
            $crate::records::RowMeta {
                id: self.id.clone(),
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }

        fn insert(
            &self,
            conn: &mut diesel::sqlite::SqliteConnection,
        ) -> diesel::QueryResult<usize> {
            diesel::RunQueryDsl::execute(diesel::insert_into($table).values(self), conn)
        }

        fn update(
            &self,
            conn: &mut diesel::sqlite::SqliteConnection,
        ) -> diesel::QueryResult<usize> {
            diesel::RunQueryDsl::execute(diesel::update(self).set(self), conn)
        }
    };
}
pub(crate) use row_plumbing;

pub(crate) fn parse_period(value: &str) -> Result<Period> {
    value.parse().map_err(|_| {
        StorageError::CorruptRow(format!("unknown period '{}' in stored row", value)).into()
    })
}

/// Stored period designators matching a requested period.
///
/// Vendor rows are tagged `FY` or `Q1`..`Q4`, so the request selectors
/// `annual` and `quarter` expand to those.
pub(crate) fn stored_periods(period: Period) -> Vec<&'static str> {
    match period {
        Period::Annual => vec![Period::Fy.as_str()],
        Period::Quarter => vec![
            Period::Q1.as_str(),
            Period::Q2.as_str(),
            Period::Q3.as_str(),
            Period::Q4.as_str(),
        ],
        other => vec![other.as_str()],
    }
}


#[cfg(test)]
mod reconcile_tests;
