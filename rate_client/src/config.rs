//! Runtime configuration of the quote client.
use std::path::PathBuf;
use std::time::Duration;

use rate_common::net::{CLIENT_TIMEOUT, SERVER_PORT, quote_url};

/// File written next to the client by default.
pub const OUTPUT_FILE: &str = "cotacao.txt";
/// Label preceding the bid in the output line.
pub const LABEL: &str = "Dólar";

/// Settings for one client run.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the server's quote route.
    pub server_url: String,
    /// File overwritten with the quote line.
    pub output_path: PathBuf,
    /// Text written before the bid.
    pub label: String,
    /// Deadline for the whole server exchange, body included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: quote_url("localhost", SERVER_PORT),
            output_path: PathBuf::from(OUTPUT_FILE),
            label: LABEL.to_string(),
            timeout: CLIENT_TIMEOUT,
        }
    }
}
