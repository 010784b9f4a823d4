//! SQLite access for quote records.
//!
//! A `QuoteStore` wraps one connection to the database file. The server opens
//! a fresh store per request and drops it when the request ends, so there is no
//! pool and no connection outlives the request that opened it.
//!
//! Inserts run on the blocking thread pool under a deadline. When the deadline
//! fires first, the waiting side interrupts the running statement and the
//! insert's transaction is rolled back instead of committed, so a timed-out
//! insert never leaves a row behind.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, warn};
use rate_common::{QuoteError, Result};
use rusqlite::{Connection, TransactionBehavior, params};

use crate::model::record::QuoteRecord;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacoes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    valor TEXT,
    data TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";

/// Handle to the quote database.
pub struct QuoteStore {
    conn: Arc<Mutex<Connection>>,
}

impl QuoteStore {
    /// Open (creating if absent) the database file at `path`.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| QuoteError::StorageUnavailable(format!("{}: {}", path.display(), e)))?;
        debug!("Opened quote database {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// [`QuoteStore::connect`] on the blocking thread pool, for async callers.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        tokio::task::spawn_blocking(move || Self::connect(path))
            .await
            .map_err(|e| QuoteError::StorageUnavailable(e.to_string()))?
    }

    /// Create the `cotacoes` table unless it already exists.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.conn.lock()?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| QuoteError::Schema(e.to_string()))
    }

    /// Insert one quote and return its row id.
    ///
    /// Fails with `QuoteError::Persistence` if the insert errors or does not
    /// complete within `deadline`; in both cases nothing is written.
    ///
    /// If the deadline fires after the worker has already started committing,
    /// the commit is awaited and its result returned, so a successful call can
    /// overrun `deadline` by the length of one commit. An error always means no
    /// row was written.
    pub async fn insert_quote(&self, value: &str, deadline: Duration) -> Result<i64> {
        let interrupt = self.conn.lock()?.get_interrupt_handle();
        // Whoever flips this first decides the outcome: the worker commits, or
        // the waiter reports the timeout and the worker rolls back.
        let claimed = Arc::new(AtomicBool::new(false));

        let conn = Arc::clone(&self.conn);
        let worker_claimed = Arc::clone(&claimed);
        let value = value.to_string();
        let mut worker = tokio::task::spawn_blocking(move || -> Result<i64> {
            let mut conn = conn.lock()?;
            conn.busy_timeout(deadline).map_err(persistence)?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(persistence)?;
            tx.execute("INSERT INTO cotacoes (valor) VALUES (?1)", params![value])
                .map_err(persistence)?;
            let id = tx.last_insert_rowid();
            if worker_claimed.swap(true, Ordering::SeqCst) {
                return Err(QuoteError::Persistence(
                    "insert abandoned after deadline".to_string(),
                ));
            }
            tx.commit().map_err(persistence)?;
            Ok(id)
        });

        let outcome = tokio::time::timeout(deadline, &mut worker).await;
        match outcome {
            Ok(joined) => joined.map_err(|e| QuoteError::Persistence(e.to_string()))?,
            Err(_) if !claimed.swap(true, Ordering::SeqCst) => {
                interrupt.interrupt();
                warn!("Insert did not complete within {:?}", deadline);
                Err(QuoteError::Persistence(format!(
                    "insert did not complete within {:?}",
                    deadline
                )))
            }
            // The worker reached its commit before the deadline fired; its
            // outcome stands.
            Err(_) => worker
                .await
                .map_err(|e| QuoteError::Persistence(e.to_string()))?,
        }
    }

    /// Number of stored quotes.
    pub fn count(&self) -> Result<i64> {
        let conn = self.conn.lock()?;
        conn.query_row("SELECT COUNT(*) FROM cotacoes", [], |row| row.get(0))
            .map_err(persistence)
    }

    /// Most recent quotes, newest first.
    pub fn latest(&self, limit: u32) -> Result<Vec<QuoteRecord>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn
            .prepare("SELECT id, valor, data FROM cotacoes ORDER BY id DESC LIMIT ?1")
            .map_err(persistence)?;
        let rows = stmt
            .query_map(params![limit], QuoteRecord::from_row)
            .map_err(persistence)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(persistence)?);
        }
        Ok(records)
    }
}

fn persistence(err: rusqlite::Error) -> QuoteError {
    QuoteError::Persistence(err.to_string())
}
