//! Low-level HTTP client — `VietstockHttp`.
//!
//! One method per API endpoint. Owns the pooled `reqwest::Client` with the
//! per-attempt timeout and the fixed header set, and runs every request
//! through the retry loop. Internal to the SDK — `VietstockClient` wraps this.

use crate::domain::history::{FetchParams, HistoryResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, RETRY_AFTER, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Vietstock REST API.
#[derive(Clone)]
pub struct VietstockHttp {
    base_url: String,
    client: Client,
    /// Config applied when a request runs under `RetryPolicy::Idempotent`.
    retry: RetryConfig,
}

impl VietstockHttp {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryConfig) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(network::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(network::ACCEPT));
        headers.insert(ORIGIN, HeaderValue::from_static(network::ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static(network::REFERER));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_history(&self, params: &FetchParams) -> Result<HistoryResponse, HttpError> {
        let url = format!(
            "{}{}?symbol={}&resolution={}&from={}&to={}&countback={}",
            self.base_url,
            network::HISTORY_PATH,
            urlencoding::encode(&params.symbol),
            params.resolution.as_str(),
            params.from,
            params.to,
            params.countback,
        );
        let fields: serde_json::Map<String, serde_json::Value> =
            self.get(&url, RetryPolicy::Idempotent).await?;
        Ok(HistoryResponse {
            fields,
            params: params.clone(),
        })
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => return self.do_request(url).await,
            RetryPolicy::Idempotent => self.retry.clone(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let mut retry_after = None;
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            retry_after = retry_after_ms.map(Duration::from_millis);
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if !should_retry {
                        return Err(e);
                    }

                    if attempt < config.max_retries {
                        let delay =
                            retry_after.unwrap_or_else(|| config.delay_for_attempt(attempt));
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(HttpError::Reqwest(e)),
        };

        let status = resp.status();
        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
