//! Quote Client binary.
//!
//! Usage example (CLI):
//! ```bash
//! rate_client --server-url http://192.168.0.10:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Any failure is logged and ends the process with a non-zero status; the
//! output file is only touched after a successful fetch.
mod args;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();
    let config = Args::parse().into_config();

    match rate_client::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
