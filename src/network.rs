//! Network constants for the Vietstock SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.vietstock.vn";

/// Path of the TradingView-style history endpoint.
pub const HISTORY_PATH: &str = "/tvnew/history";

// The endpoint only answers requests that carry the stockchart web app's
// fingerprint. These values are part of the wire contract and must stay in
// sync with what the service expects.

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// `Accept` sent with every request.
pub const ACCEPT: &str = "application/json";

/// `Origin` sent with every request.
pub const ORIGIN: &str = "https://stockchart.vietstock.vn";

/// `Referer` sent with every request.
pub const REFERER: &str = "https://stockchart.vietstock.vn/";
