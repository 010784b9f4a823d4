//! Shared networking constants and helpers used by client and server.
use std::time::Duration;

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the latest bid.
pub const QUOTE_ROUTE: &str = "/cotacao";
/// Base URL of the upstream exchange-rate provider.
pub const UPSTREAM_BASE_URL: &str = "https://economia.awesomeapi.com.br";

/// Deadline for the server's call to the upstream API.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);
/// Deadline for inserting one quote record.
pub const INSERT_TIMEOUT: Duration = Duration::from_millis(10);
/// Deadline for the client's call to the quote server.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// URL of the quote route on a server reachable at `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_ROUTE)
}
