//! Client for the upstream exchange-rate API.
//!
//! Each call is one GET bounded by the configured deadline; there is no cache
//! and no retry. Every failure, whether building the request, reaching the
//! provider, hitting the deadline or decoding the body, becomes
//! `QuoteError::Fetch`.
use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use rate_common::{QuoteError, Result};
use serde_json::Value;

use crate::config::ServerConfig;
use crate::model::upstream::UpstreamQuote;

/// Fetches the latest bid for one currency pair.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    url: String,
    json_key: String,
    deadline: Duration,
}

impl QuoteFetcher {
    /// Client for the upstream URL, pair and deadline in `config`.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| QuoteError::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            url: config.upstream_url(),
            json_key: config.pair.json_key(),
            deadline: config.fetch_timeout,
        })
    }

    /// Fetch the current bid as the provider formats it.
    pub async fn fetch_quote(&self) -> Result<String> {
        match tokio::time::timeout(self.deadline, self.request()).await {
            Ok(result) => result,
            Err(_) => Err(QuoteError::Fetch(format!(
                "{} did not respond within {:?}",
                self.url, self.deadline
            ))),
        }
    }

    async fn request(&self) -> Result<String> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| QuoteError::Fetch(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Fetch(e.to_string()))?;
        parse_bid(&body, &self.json_key)
    }
}

/// Extract `<json_key>.bid` from a provider response, ignoring everything else.
pub fn parse_bid(body: &[u8], json_key: &str) -> Result<String> {
    let mut quotes: HashMap<String, Value> = serde_json::from_slice(body)
        .map_err(|e| QuoteError::Fetch(format!("invalid upstream JSON: {}", e)))?;
    let entry = quotes
        .remove(json_key)
        .ok_or_else(|| QuoteError::Fetch(format!("upstream response has no {} quote", json_key)))?;
    let quote: UpstreamQuote = serde_json::from_value(entry)
        .map_err(|e| QuoteError::Fetch(format!("invalid {} quote: {}", json_key, e)))?;

    debug!(
        "{} bid={} ask={} at {}",
        quote.name.as_deref().unwrap_or(json_key),
        quote.bid,
        quote.ask.as_deref().unwrap_or("-"),
        quote.create_date.as_deref().unwrap_or("-"),
    );
    Ok(quote.bid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MOCK_JSON: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.4512",
            "low": "5.4012",
            "varBid": "0.0123",
            "pctChange": "0.23",
            "bid": "5.4321",
            "ask": "5.4331",
            "timestamp": "1729170000",
            "create_date": "2024-10-17 10:00:00"
        }
    }"#;

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/last/USD-BRL"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn fetcher_for(mock_server: &MockServer) -> QuoteFetcher {
        let config = ServerConfig {
            upstream_base_url: mock_server.uri(),
            ..ServerConfig::default()
        };
        QuoteFetcher::new(&config).unwrap()
    }

    #[test]
    fn parse_bid_keeps_text_verbatim() {
        let bid = parse_bid(br#"{"USDBRL": {"bid": "5.43000"}}"#, "USDBRL").unwrap();
        assert_eq!(bid, "5.43000");
    }

    #[test]
    fn parse_bid_ignores_unrelated_keys() {
        let body = br#"{"meta": [1, 2, 3], "USDBRL": {"bid": "5.1", "extra": {"a": 1}}}"#;
        assert_eq!(parse_bid(body, "USDBRL").unwrap(), "5.1");
    }

    #[test]
    fn parse_bid_rejects_missing_pair_or_bid() {
        assert!(matches!(
            parse_bid(br#"{"EURBRL": {"bid": "6.0"}}"#, "USDBRL"),
            Err(QuoteError::Fetch(_))
        ));
        assert!(matches!(
            parse_bid(br#"{"USDBRL": {"ask": "5.4"}}"#, "USDBRL"),
            Err(QuoteError::Fetch(_))
        ));
        assert!(matches!(
            parse_bid(br#"{"USDBRL": {"bid": 5.4}}"#, "USDBRL"),
            Err(QuoteError::Fetch(_))
        ));
        assert!(matches!(parse_bid(b"not json", "USDBRL"), Err(QuoteError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_quote() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(MOCK_JSON)).await;
        let fetcher = fetcher_for(&mock_server);

        assert_eq!(fetcher.fetch_quote().await.unwrap(), "5.4321");
    }

    #[tokio::test]
    async fn test_fetch_quote_deadline() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(MOCK_JSON)
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let fetcher = fetcher_for(&mock_server);

        let err = fetcher.fetch_quote().await.unwrap_err();
        assert!(matches!(err, QuoteError::Fetch(_)));
        assert!(err.to_string().contains("did not respond within 200ms"));
    }

    #[tokio::test]
    async fn test_fetch_quote_upstream_error_status() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(503).set_body_string("unavailable")).await;
        let fetcher = fetcher_for(&mock_server);

        assert!(matches!(
            fetcher.fetch_quote().await,
            Err(QuoteError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_quote_unreachable() {
        let config = ServerConfig {
            upstream_base_url: "http://127.0.0.1:1".to_string(),
            ..ServerConfig::default()
        };
        let fetcher = QuoteFetcher::new(&config).unwrap();

        assert!(matches!(
            fetcher.fetch_quote().await,
            Err(QuoteError::Fetch(_))
        ));
    }
}
