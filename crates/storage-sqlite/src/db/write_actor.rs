use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use log::{debug, error};
use std::any::Any;
use stockmate_core::errors::{DatabaseError, Error, Result};
use tokio::sync::{mpsc, oneshot};

// A job runs against the writer's connection and returns a core Result,
// which is what repository callers expect.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type AnyBox = Box<dyn Any + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // The boxed Any erases each job's return type; `exec` downcasts it back.
    tx: mpsc::Sender<(Job<AnyBox>, oneshot::Sender<Result<AnyBox>>)>,
}

impl WriteHandle {
    /// Executes a job on the writer's dedicated connection inside an
    /// immediate transaction. Jobs run one at a time, in submission order.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as AnyBox)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone("the job channel is closed"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| writer_gone("the reply was dropped"))??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Database(DatabaseError::Internal("writer result type mismatch".into())))
    }
}

fn writer_gone(detail: &str) -> Error {
    Error::Database(DatabaseError::Internal(format!(
        "writer actor stopped: {}",
        detail
    )))
}

/// Spawns a background task that is the single writer to the database.
///
/// The actor owns one connection taken from the pool for its whole life and
/// processes jobs serially. Must be called from within a tokio runtime.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle> {
    let mut conn = pool.get().map_err(StorageError::from)?;
    let (tx, mut rx) = mpsc::channel::<(Job<AnyBox>, oneshot::Sender<Result<AnyBox>>)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<AnyBox> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e| {
                    debug!("Write job rolled back: {}", e);
                    e.into()
                });

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        error!("Writer actor exiting: all handles dropped");
    });

    Ok(WriteHandle { tx })
}
