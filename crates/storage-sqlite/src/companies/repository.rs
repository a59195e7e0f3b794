use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::{debug, info};
use stockmate_core::companies::{Company, CompanyRepositoryTrait};
use stockmate_core::records::{ListFilter, Reconciled, RecordStore, Stored};
use stockmate_core::Result;
use stockmate_market_data::CompanyProfile;

use super::model::CompanyDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::records::{row_plumbing, RecordRow, RowMeta, SqliteRecordStore};
use crate::schema::companies::dsl as companies_dsl;

impl RecordRow for CompanyDB {
    type Record = CompanyProfile;

    row_plumbing!(crate::schema::companies::table);

    fn find(conn: &mut SqliteConnection, record: &CompanyProfile) -> QueryResult<Option<Self>> {
        find_by_symbol(conn, &record.symbol)
    }

    fn list(
        conn: &mut SqliteConnection,
        symbol: &str,
        _filter: &ListFilter,
    ) -> QueryResult<Vec<Self>> {
        Ok(find_by_symbol(conn, symbol)?.into_iter().collect())
    }
}

fn find_by_symbol(conn: &mut SqliteConnection, symbol: &str) -> QueryResult<Option<CompanyDB>> {
    companies_dsl::companies
        .filter(companies_dsl::symbol.eq(symbol))
        .select(CompanyDB::as_select())
        .first(conn)
        .optional()
}

pub struct CompanyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    records: SqliteRecordStore<CompanyDB>,
}

impl CompanyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self {
            records: SqliteRecordStore::new(pool.clone(), writer.clone()),
            pool,
            writer,
        }
    }
}

#[async_trait]
impl RecordStore<CompanyProfile> for CompanyRepository {
    async fn reconcile(&self, candidate: CompanyProfile) -> Result<Reconciled<CompanyProfile>> {
        self.records.reconcile(candidate).await
    }

    fn list_by_symbol(
        &self,
        symbol: &str,
        filter: &ListFilter,
    ) -> Result<Vec<Stored<CompanyProfile>>> {
        self.records.list_by_symbol(symbol, filter)
    }
}

#[async_trait]
impl CompanyRepositoryTrait for CompanyRepository {
    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Company>> {
        let mut conn = get_connection(&self.pool)?;
        find_by_symbol(&mut conn, symbol)
            .into_core()?
            .map(CompanyDB::into_stored)
            .transpose()
    }

    fn list(&self) -> Result<Vec<Company>> {
        let mut conn = get_connection(&self.pool)?;
        companies_dsl::companies
            .order(companies_dsl::symbol.asc())
            .select(CompanyDB::as_select())
            .load::<CompanyDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(CompanyDB::into_stored)
            .collect()
    }

    async fn ensure_exists(&self, symbol: &str) -> Result<bool> {
        let symbol = symbol.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                if find_by_symbol(conn, &symbol).into_core()?.is_some() {
                    return Ok(false);
                }
                let now = Utc::now().naive_utc();
                CompanyDB::new(&CompanyProfile::placeholder(&symbol), RowMeta::fresh(now))
                    .insert(conn)
                    .into_core()?;
                debug!("Inserted placeholder company {}", symbol);
                Ok(true)
            })
            .await
    }

    async fn delete(&self, symbol: &str) -> Result<usize> {
        let symbol = symbol.to_string();
        let deleted = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(companies_dsl::companies.filter(companies_dsl::symbol.eq(symbol)))
                    .execute(conn)
                    .into_core()
            })
            .await?;
        info!("Deleted {} company row(s) and their children", deleted);
        Ok(deleted)
    }
}
