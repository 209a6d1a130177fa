//! # Vietstock SDK
//!
//! A Rust SDK for the Vietstock TradingView-style history API: OHLCV bar
//! queries with automatic retry/backoff, plus timestamp conversion helpers.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared types and pure helpers: [`shared::Resolution`],
//!    [`shared::Unit`], the [`shared::time`] conversions, error types.
//! 2. **HTTP API** — [`http::VietstockHttp`] with per-request retry policies.
//! 3. **High-Level Client** — [`client::VietstockClient`] with nested
//!    sub-clients.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vietstock_sdk::prelude::*;
//!
//! let client = VietstockClient::builder().build()?;
//!
//! let from = time_to_timestamp("2021-06-01 00:00:00", Unit::Seconds)?;
//! let to = add_days_to_timestamp(from, 30, Unit::Seconds);
//! let bars = client.history().get(from, to, "VND", Resolution::Day).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: bar resolution, timestamp units, time conversions.
pub mod shared;

/// Domain modules (vertical slices): endpoint types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants: base URL, endpoint path, fixed header values.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `VietstockClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Resolution, Unit};

    // Time conversions
    pub use crate::shared::time::{
        add_days_to_timestamp, current_date_timestamp, current_timestamp, datetime_to_timestamp,
        time_to_timestamp, timestamp_to_str,
    };

    // Domain types — history
    pub use crate::domain::history::{FetchParams, HistoryResponse, COUNTBACK};

    // Errors
    pub use crate::error::{HttpError, SdkError, TimeError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{HistoryClient, VietstockClient, VietstockClientBuilder};
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
