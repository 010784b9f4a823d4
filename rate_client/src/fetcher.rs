//! Fetching the bid from the quote server.
use std::time::Duration;

use log::debug;
use rate_common::{BidResponse, QuoteError, Result};

/// GET `url` and return the `bid` of its `{"bid": "..."}` body.
///
/// The deadline covers connecting, the response headers and the body. Any
/// failure, a non-success status included, is `QuoteError::ClientFetch`.
pub async fn fetch_bid(url: &str, deadline: Duration) -> Result<String> {
    match tokio::time::timeout(deadline, request(url)).await {
        Ok(result) => result,
        Err(_) => Err(QuoteError::ClientFetch(format!(
            "{} did not respond within {:?}",
            url, deadline
        ))),
    }
}

async fn request(url: &str) -> Result<String> {
    debug!("GET {}", url);
    let response = reqwest::get(url)
        .await
        .map_err(|e| QuoteError::ClientFetch(e.to_string()))?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| QuoteError::ClientFetch(e.to_string()))?;

    if !status.is_success() {
        return Err(QuoteError::ClientFetch(format!(
            "server answered {}: {}",
            status,
            String::from_utf8_lossy(&body).trim()
        )));
    }

    let quote: BidResponse = serde_json::from_slice(&body)
        .map_err(|e| QuoteError::ClientFetch(format!("invalid server response: {}", e)))?;
    Ok(quote.bid)
}
