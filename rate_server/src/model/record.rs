//! Persisted quote record.
use chrono::NaiveDateTime;
use rusqlite::Row;

/// One row of `cotacoes`: written once per successful request, never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    /// Auto-incremented row id.
    pub id: i64,
    /// Bid exactly as received from the provider.
    pub value: String,
    /// Insert time in UTC, filled in by SQLite's `CURRENT_TIMESTAMP`.
    pub created_at: NaiveDateTime,
}

impl QuoteRecord {
    /// Builds a record from a `SELECT id, valor, data` row.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(QuoteRecord {
            id: row.get(0)?,
            value: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}
