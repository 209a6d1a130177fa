//! High-level client — `VietstockClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::history::client::History;
use crate::error::SdkError;
use crate::http::retry::RetryConfig;
use crate::http::VietstockHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistoryClient;

/// The primary entry point for the Vietstock SDK.
///
/// Holds no mutable state: cloning is cheap and clones share the underlying
/// connection pool.
#[derive(Clone)]
pub struct VietstockClient {
    pub(crate) http: VietstockHttp,
}

impl VietstockClient {
    pub fn builder() -> VietstockClientBuilder {
        VietstockClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct VietstockClientBuilder {
    base_url: String,
    timeout: Duration,
    retries: u32,
    backoff_factor: f64,
}

impl Default for VietstockClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(5),
            retries: 3,
            backoff_factor: 0.3,
        }
    }
}

impl VietstockClientBuilder {
    /// Override the API base URL (mainly for tests against a local server).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-attempt wait ceiling. Default 5 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Maximum retry attempts after the initial request. Default 3.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Base backoff in seconds; the n-th retry waits
    /// `backoff_factor * 2^(n-1)`. Default 0.3.
    pub fn backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    pub fn build(self) -> Result<VietstockClient, SdkError> {
        let retry = RetryConfig {
            max_retries: self.retries,
            backoff_factor: self.backoff_factor,
            ..RetryConfig::idempotent()
        };
        Ok(VietstockClient {
            http: VietstockHttp::new(&self.base_url, self.timeout, retry)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = VietstockClientBuilder::default();
        assert_eq!(builder.base_url, "https://api.vietstock.vn");
        assert_eq!(builder.timeout, Duration::from_secs(5));
        assert_eq!(builder.retries, 3);
        assert_eq!(builder.backoff_factor, 0.3);
        assert!(builder.build().is_ok());
    }
}
