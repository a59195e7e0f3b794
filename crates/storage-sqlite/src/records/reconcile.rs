use chrono::{NaiveDateTime, Utc};
use diesel::connection::Connection;
use diesel::sqlite::SqliteConnection;
use log::debug;
use stockmate_core::errors::{DatabaseError, Error, Result};
use stockmate_core::records::{DomainRecord, Reconciled, UpsertOutcome};

use super::{RecordRow, RowMeta};
use crate::errors::{IntoCore, StorageError};

/// Result of looking up or inserting a candidate's natural key.
#[derive(Debug)]
pub(crate) enum Attempt<R> {
    /// A row already holds the key.
    Found(R),
    /// The candidate was written as a new row.
    Inserted(R),
    /// Another writer inserted the key between lookup and insert.
    Conflict,
}

/// Inserts or updates the row for `candidate`'s natural key.
///
/// Must run inside a write transaction. A conflicting insert is turned into
/// an update of the row that won.
pub(crate) fn reconcile<R: RecordRow>(
    conn: &mut SqliteConnection,
    candidate: R::Record,
) -> Result<Reconciled<R::Record>> {
    let now = Utc::now().naive_utc();
    let attempt = match R::find(conn, &candidate).into_core()? {
        Some(existing) => Attempt::Found(existing),
        None => try_insert::<R>(conn, &candidate, now)?,
    };
    apply::<R>(conn, attempt, candidate, now)
}

/// Inserts `candidate` under a savepoint so a unique violation leaves the
/// enclosing transaction usable.
pub(crate) fn try_insert<R: RecordRow>(
    conn: &mut SqliteConnection,
    candidate: &R::Record,
    now: NaiveDateTime,
) -> Result<Attempt<R>> {
    let row = R::from_record(candidate, RowMeta::fresh(now));
    match conn.transaction::<_, StorageError, _>(|c| Ok(row.insert(c)?)) {
        Ok(_) => Ok(Attempt::Inserted(row)),
        Err(e) if e.is_unique_violation() => {
            debug!(
                "{} {} lost an insert race",
                <R::Record as DomainRecord>::KIND,
                candidate.natural_key()
            );
            Ok(Attempt::Conflict)
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn apply<R: RecordRow>(
    conn: &mut SqliteConnection,
    attempt: Attempt<R>,
    candidate: R::Record,
    now: NaiveDateTime,
) -> Result<Reconciled<R::Record>> {
    let existing = match attempt {
        Attempt::Inserted(row) => {
            return Ok(Reconciled {
                outcome: UpsertOutcome::Inserted,
                entity: row.into_stored()?,
            })
        }
        Attempt::Found(row) => row,
        Attempt::Conflict => R::find(conn, &candidate).into_core()?.ok_or_else(|| {
            Error::Database(DatabaseError::Internal(format!(
                "row for {} vanished after a unique violation",
                candidate.natural_key()
            )))
        })?,
    };

    if existing.to_record()? == candidate {
        return Ok(Reconciled {
            outcome: UpsertOutcome::Unchanged,
            entity: existing.into_stored()?,
        });
    }

    let row = R::from_record(&candidate, existing.meta().touched(now));
    row.update(conn).into_core()?;
    Ok(Reconciled {
        outcome: UpsertOutcome::Updated,
        entity: row.into_stored()?,
    })
}
