//! Domain models for the quote server.
//!
//! - `record` — a persisted row of the `cotacoes` table.
//! - `upstream` — the quote object returned by the exchange-rate provider.

pub mod record;
pub mod upstream;
