use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;
use stockmate_core::errors::Result;
use stockmate_core::records::{ListFilter, Reconciled, RecordStore, Stored};

use super::{reconcile, RecordRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;

/// [`RecordStore`] over one table. Reads use the pool, reconciles go
/// through the writer actor.
pub struct SqliteRecordStore<R> {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    _row: PhantomData<fn() -> R>,
}

impl<R: RecordRow> SqliteRecordStore<R> {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self {
            pool,
            writer,
            _row: PhantomData,
        }
    }
}

#[async_trait]
impl<R: RecordRow> RecordStore<R::Record> for SqliteRecordStore<R> {
    async fn reconcile(&self, candidate: R::Record) -> Result<Reconciled<R::Record>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| reconcile::<R>(conn, candidate))
            .await
    }

    fn list_by_symbol(&self, symbol: &str, filter: &ListFilter) -> Result<Vec<Stored<R::Record>>> {
        let mut conn = get_connection(&self.pool)?;
        R::list(&mut conn, symbol, filter)
            .into_core()?
            .into_iter()
            .map(R::into_stored)
            .collect()
    }
}
