//! HTTP mapping of pipeline failures.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rate_common::QuoteError;
use thiserror::Error;

/// Failure of a request handler; always answered with 500 and a plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Any failure of the quote pipeline.
    #[error("{0}")]
    Quote(#[from] QuoteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            // The file path and driver message stay in the server log.
            ApiError::Quote(QuoteError::StorageUnavailable(_)) => {
                "database connection error".to_string()
            }
            ApiError::Quote(e) => e.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Result of a request handler.
pub type ApiResult<T> = Result<T, ApiError>;
