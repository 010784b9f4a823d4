//! Command-line arguments for the quote server.
//!
//! Every flag defaults to the reference deployment, so running the binary
//! without arguments serves USD-BRL on port 8080 backed by `./database.db`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rate_common::CurrencyPair;
use rate_common::net::{SERVER_PORT, UPSTREAM_BASE_URL, addr};
use rate_server::config::{DATABASE_FILE, ServerConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite file holding the `cotacoes` table.
    #[arg(long, default_value = DATABASE_FILE)]
    pub database: PathBuf,

    /// Base URL of the exchange-rate provider.
    #[arg(long, default_value = UPSTREAM_BASE_URL)]
    pub upstream_url: String,

    /// Currency pair to quote.
    #[arg(long, value_enum, default_value_t = CurrencyPair::UsdBrl)]
    pub pair: CurrencyPair,

    /// Deadline for the provider call, in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub fetch_timeout_ms: u64,

    /// Deadline for storing one quote, in milliseconds.
    #[arg(long, default_value_t = 10)]
    pub insert_timeout_ms: u64,
}

impl Args {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind_addr: addr(&self.host, self.port),
            database_path: self.database,
            upstream_base_url: self.upstream_url,
            pair: self.pair,
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            insert_timeout: Duration::from_millis(self.insert_timeout_ms),
        }
    }
}
