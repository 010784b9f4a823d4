//!
//! Common types and utilities shared by the rate server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `pair` — currency pairs understood by the upstream exchange API.
//! - `quote` — the JSON body exchanged between server and client.
//! - `net` — networking constants and reference deadlines.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod pair;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use pair::CurrencyPair;
pub use quote::BidResponse;
pub use result::Result;
