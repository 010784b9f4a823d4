//! Quote Client: fetches the current bid from the quote server and writes it
//! to a local file as `Dólar: <bid>`.
//!
//! - `config` — `ClientConfig`, defaulting to `http://localhost:8080/cotacao`,
//!   `cotacao.txt` and a 300 ms deadline.
//! - `fetcher` — deadline-bound GET of the server's `{"bid": "..."}` body.
//! - `output` — formatting and writing the output line.
//!
//! The file is written only after a complete, successful fetch, so a failed
//! run leaves any previous file as it was.
#![warn(missing_docs)]
pub mod config;
pub mod fetcher;
pub mod output;

use log::info;
use rate_common::Result;

pub use config::ClientConfig;

/// Fetch the bid and overwrite the output file. Returns the written line.
pub async fn run(config: &ClientConfig) -> Result<String> {
    let bid = fetcher::fetch_bid(&config.server_url, config.timeout).await?;
    let line = output::format_line(&config.label, &bid);
    output::write_quote(&config.output_path, &line)?;
    info!("Quote saved to {}: {}", config.output_path.display(), line);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_common::QuoteError;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn config_for(mock_server: &MockServer, output_path: std::path::PathBuf) -> ClientConfig {
        ClientConfig {
            server_url: format!("{}/cotacao", mock_server.uri()),
            output_path,
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn writes_exactly_one_line_over_previous_content() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"bid": "5.43"}"#),
        )
        .await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        fs::write(&output, "Dólar: 5.4321000000 from an older run\n").unwrap();

        let line = run(&config_for(&mock_server, output.clone())).await.unwrap();

        assert_eq!(line, "Dólar: 5.43");
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.43");
    }

    #[tokio::test]
    async fn slow_server_leaves_no_file() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid": "5.43"}"#)
                .set_delay(Duration::from_millis(600)),
        )
        .await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");

        let result = run(&config_for(&mock_server, output.clone())).await;

        assert!(matches!(result, Err(QuoteError::ClientFetch(_))));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn server_error_leaves_previous_file_untouched() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(500).set_body_string("database connection error"),
        )
        .await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        fs::write(&output, "Dólar: 5.10").unwrap();

        let result = run(&config_for(&mock_server, output.clone())).await;

        assert!(matches!(result, Err(QuoteError::ClientFetch(_))));
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.10");
    }

    #[tokio::test]
    async fn unwritable_output_is_a_file_write_error() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"bid": "5.43"}"#),
        )
        .await;
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing").join("cotacao.txt");

        let result = run(&config_for(&mock_server, output)).await;

        assert!(matches!(result, Err(QuoteError::FileWrite(_))));
    }
}
