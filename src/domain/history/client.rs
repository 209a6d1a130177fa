//! History sub-client — OHLCV queries.

use crate::client::VietstockClient;
use crate::domain::history::{FetchParams, HistoryResponse};
use crate::error::SdkError;
use crate::shared::Resolution;

/// Sub-client for history operations.
pub struct History<'a> {
    pub(crate) client: &'a VietstockClient,
}

impl<'a> History<'a> {
    /// Fetch OHLCV bars for `ticker` between `from` and `to` (Unix seconds).
    ///
    /// Transient failures are retried per the client's retry config; every
    /// failure reason surfaces as a distinct [`SdkError`] variant.
    pub async fn get(
        &self,
        from: i64,
        to: i64,
        ticker: &str,
        resolution: Resolution,
    ) -> Result<HistoryResponse, SdkError> {
        let params = FetchParams::new(ticker, resolution, from, to);
        Ok(self.client.http.get_history(&params).await?)
    }

    /// Sentinel-style variant of [`get`](Self::get): logs the failure and
    /// returns `None` instead of an error.
    pub async fn get_or_none(
        &self,
        from: i64,
        to: i64,
        ticker: &str,
        resolution: Resolution,
    ) -> Option<HistoryResponse> {
        match self.get(from, to, ticker, resolution).await {
            Ok(resp) => Some(resp),
            Err(e) => {
                tracing::warn!(ticker, %resolution, "history request failed: {e}");
                None
            }
        }
    }
}
