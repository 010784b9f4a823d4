//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. Without flags the client
//! asks `http://localhost:8080/cotacao` and writes `./cotacao.txt`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rate_client::config::{ClientConfig, LABEL, OUTPUT_FILE};
use rate_common::net::{SERVER_PORT, quote_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote server's route. Defaults to localhost:8080.
    #[arg(long)]
    pub server_url: Option<String>,

    /// File overwritten with the quote line.
    #[arg(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// Text written before the bid.
    #[arg(long, default_value = LABEL)]
    pub label: String,

    /// Deadline for the server call, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub timeout_ms: u64,
}

impl Args {
    pub fn into_config(self) -> ClientConfig {
        ClientConfig {
            server_url: self
                .server_url
                .unwrap_or_else(|| quote_url("localhost", SERVER_PORT)),
            output_path: self.output,
            label: self.label,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}
