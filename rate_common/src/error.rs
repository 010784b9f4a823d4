//! Error types shared between client and server.
//!
//! The `QuoteError` enum names every way the quote pipeline can fail: opening
//! the database, creating the schema, fetching from the upstream API, writing
//! a record, fetching from the quote server and writing the output file.
//! Causes are carried as text so this crate stays free of HTTP and database
//! dependencies.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The database file could not be opened.
    #[error("database connection error: {0}")]
    StorageUnavailable(String),

    /// The `cotacoes` table could not be created.
    #[error("schema setup failed: {0}")]
    Schema(String),

    /// The upstream exchange API call failed: request, network, deadline or decode.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Inserting a quote record failed or missed its deadline.
    #[error("error saving to database: {0}")]
    Persistence(String),

    /// The client could not obtain a bid from the quote server.
    #[error("error fetching quote from server: {0}")]
    ClientFetch(String),

    /// The client could not write its output file.
    #[error("error writing quote file: {0}")]
    FileWrite(#[source] io::Error),

    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
