//! Quote server binary.
//!
//! Parses flags, initialises logging and runs [`rate_server::serve`]. Any error
//! it returns (a failed schema setup included) is logged and ends the process
//! with a non-zero status.
mod args;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    let config = Args::parse().into_config();

    match rate_server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Quote server failed: {}", e);
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
