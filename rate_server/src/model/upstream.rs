//! Quote object returned by the exchange-rate provider.
//!
//! The provider wraps it under the pair's key:
//! `{"USDBRL": {"code": "USD", "codein": "BRL", "bid": "5.4321", ...}}`.
//! Only `bid` is required. `name`, `ask` and `create_date` are decoded for the
//! debug log; serde skips every other field.
use serde::Deserialize;

/// Latest quote for one currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamQuote {
    /// Human-readable pair name, e.g. `Dólar Americano/Real Brasileiro`.
    pub name: Option<String>,
    /// Purchase rate, kept as text.
    pub bid: String,
    /// Selling rate.
    pub ask: Option<String>,
    /// Provider-side quote time, as the provider formats it.
    pub create_date: Option<String>,
}
