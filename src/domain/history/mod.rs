//! History domain — OHLCV bar queries.

pub mod client;

pub use client::History;

use crate::shared::Resolution;
use serde::{Deserialize, Serialize};

/// Number of bars the service is asked to count back from `to`. The
/// endpoint requires the parameter but the window is really defined by
/// `from`/`to`.
pub const COUNTBACK: u32 = 2;

/// Query parameters of one history request.
///
/// Serializes to exactly the five fields the endpoint documents, in both the
/// request query string and the `params` echo of [`HistoryResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchParams {
    pub symbol: String,
    pub resolution: Resolution,
    pub from: i64,
    pub to: i64,
    pub countback: u32,
}

impl FetchParams {
    pub fn new(symbol: impl Into<String>, resolution: Resolution, from: i64, to: i64) -> Self {
        Self {
            symbol: symbol.into(),
            resolution,
            from,
            to,
            countback: COUNTBACK,
        }
    }
}

/// One history payload.
///
/// The service owns the payload schema; the SDK passes it through verbatim
/// and only adds the `params` echo, so serializing this type yields the raw
/// response object with one extra `params` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Raw service payload, untouched.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    /// Echo of the request that produced this payload.
    pub params: FetchParams,
}

impl HistoryResponse {
    /// Convenience accessor into the raw payload.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}
