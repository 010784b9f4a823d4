//! HTTP surface of the quote server.
//!
//! `GET /cotacao` runs the whole pipeline for one request: open the database,
//! fetch the bid from the provider, store it, and answer `{"bid": "..."}`.
//! The first failing step ends the request with a 500.
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use rate_common::net::QUOTE_ROUTE;
use rate_common::{BidResponse, Result};

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::fetcher::QuoteFetcher;
use crate::store::QuoteStore;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings of the running server.
    pub config: Arc<ServerConfig>,
    /// Upstream client; its HTTP connection pool is shared by all requests.
    pub fetcher: QuoteFetcher,
}

impl AppState {
    /// Build the state, creating the upstream HTTP client.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let fetcher = QuoteFetcher::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }
}

/// Router serving `GET /cotacao`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_ROUTE, get(get_quote))
        .with_state(state)
}

/// Fetch, persist and return the current bid.
async fn get_quote(State(state): State<AppState>) -> ApiResult<Json<BidResponse>> {
    // Opened per request and closed when `store` drops, whatever the outcome.
    let store = QuoteStore::open(state.config.database_path.clone())
        .await
        .inspect_err(|e| error!("Error connecting to database: {}", e))?;

    let bid = state
        .fetcher
        .fetch_quote()
        .await
        .inspect_err(|e| error!("Error fetching quote: {}", e))?;

    let id = store
        .insert_quote(&bid, state.config.insert_timeout)
        .await
        .inspect_err(|e| error!("Error storing quote: {}", e))?;

    info!("Served quote #{} bid={}", id, bid);
    Ok(Json(BidResponse::new(bid)))
}
