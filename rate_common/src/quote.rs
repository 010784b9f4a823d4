//! JSON body served by the quote server and read by the client.
use serde::{Deserialize, Serialize};

/// Response body of `GET /cotacao`: `{"bid": "<string>"}`.
///
/// The bid is kept as the upstream's text so its precision survives untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    /// Quoted purchase rate.
    pub bid: String,
}

impl BidResponse {
    /// Wraps a bid value.
    pub fn new(bid: impl Into<String>) -> Self {
        BidResponse { bid: bid.into() }
    }
}
