//! Runtime configuration of the quote server.
//!
//! Every field defaults to the reference deployment: port 8080, `database.db`
//! in the working directory, the public USD-BRL endpoint, a 200 ms upstream
//! deadline and a 10 ms insert deadline. Tests swap in mock endpoints,
//! temporary databases and other deadlines.
use std::path::PathBuf;
use std::time::Duration;

use rate_common::CurrencyPair;
use rate_common::net::{INSERT_TIMEOUT, SERVER_PORT, UPSTREAM_BASE_URL, UPSTREAM_TIMEOUT, addr};

/// SQLite file created next to the server by default.
pub const DATABASE_FILE: &str = "database.db";

/// Settings passed to [`crate::serve`] and shared by every request handler.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `0.0.0.0:8080`.
    pub bind_addr: String,
    /// Path of the SQLite database holding the `cotacoes` table.
    pub database_path: PathBuf,
    /// Scheme and host of the exchange-rate provider, without trailing path.
    pub upstream_base_url: String,
    /// Pair requested from the provider.
    pub pair: CurrencyPair,
    /// Deadline for one upstream call, body included.
    pub fetch_timeout: Duration,
    /// Deadline for inserting one record.
    pub insert_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: addr("0.0.0.0", SERVER_PORT),
            database_path: PathBuf::from(DATABASE_FILE),
            upstream_base_url: UPSTREAM_BASE_URL.to_string(),
            pair: CurrencyPair::default(),
            fetch_timeout: UPSTREAM_TIMEOUT,
            insert_timeout: INSERT_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Full URL of the latest quote for the configured pair.
    pub fn upstream_url(&self) -> String {
        format!(
            "{}/json/last/{}",
            self.upstream_base_url.trim_end_matches('/'),
            self.pair.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.database_path, PathBuf::from("database.db"));
        assert_eq!(config.fetch_timeout, Duration::from_millis(200));
        assert_eq!(config.insert_timeout, Duration::from_millis(10));
        assert_eq!(
            config.upstream_url(),
            "https://economia.awesomeapi.com.br/json/last/USD-BRL"
        );
    }

    #[test]
    fn upstream_url_ignores_trailing_slash() {
        let config = ServerConfig {
            upstream_base_url: "http://127.0.0.1:9000/".to_string(),
            pair: CurrencyPair::EurBrl,
            ..ServerConfig::default()
        };
        assert_eq!(config.upstream_url(), "http://127.0.0.1:9000/json/last/EUR-BRL");
    }
}
