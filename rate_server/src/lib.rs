//! Exchange-rate quote server.
//!
//! Serves `GET /cotacao`: each request fetches the current bid from the
//! upstream exchange-rate API, stores it in a local SQLite database and returns
//! it as `{"bid": "..."}`. The building blocks:
//!
//! - `store` — `QuoteStore`, the SQLite accessor (schema setup, deadline-bound inserts).
//! - `fetcher` — `QuoteFetcher`, the deadline-bound upstream client.
//! - `api` — the axum router and the per-request pipeline.
//! - `config` — `ServerConfig`, defaulting to the reference deployment.
//!
//! Library code returns errors; the binary decides when to exit.
#![warn(missing_docs)]
use log::{error, info};
use rate_common::Result;

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod store;

pub use api::{AppState, app_router};
pub use config::ServerConfig;

/// Ensure the schema, then serve until Ctrl+C.
///
/// A schema failure is returned before the listener is bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    store::QuoteStore::connect(&config.database_path)?.ensure_schema()?;
    info!("Quote table ready in {}", config.database_path.display());

    let state = AppState::new(config)?;
    let listener = tokio::net::TcpListener::bind(state.config.bind_addr.as_str()).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
