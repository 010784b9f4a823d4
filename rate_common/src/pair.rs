//! Currency pairs understood by the upstream exchange API.
//!
//! A pair has two spellings on the wire: the path segment of the request
//! (`USD-BRL`) and the key wrapping the quote in the response body (`USDBRL`).

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Set of supported currency pairs, all quoted in Brazilian reais.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum CurrencyPair {
    /// US dollar.
    #[default]
    #[strum(serialize = "USD-BRL")]
    #[value(name = "usd-brl")]
    UsdBrl,
    /// Euro.
    #[strum(serialize = "EUR-BRL")]
    #[value(name = "eur-brl")]
    EurBrl,
    /// Pound sterling.
    #[strum(serialize = "GBP-BRL")]
    #[value(name = "gbp-brl")]
    GbpBrl,
    /// Japanese yen.
    #[strum(serialize = "JPY-BRL")]
    #[value(name = "jpy-brl")]
    JpyBrl,
    /// Argentine peso.
    #[strum(serialize = "ARS-BRL")]
    #[value(name = "ars-brl")]
    ArsBrl,
    /// Bitcoin.
    #[strum(serialize = "BTC-BRL")]
    #[value(name = "btc-brl")]
    BtcBrl,
    /// Ether.
    #[strum(serialize = "ETH-BRL")]
    #[value(name = "eth-brl")]
    EthBrl,
}

impl CurrencyPair {
    /// Path segment used in the upstream request, e.g. `USD-BRL`.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Key wrapping the quote in the upstream response, e.g. `USDBRL`.
    pub fn json_key(&self) -> String {
        self.code().replace('-', "")
    }
}
