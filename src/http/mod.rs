//! HTTP client layer — `VietstockHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::VietstockHttp;
pub use retry::{RetryConfig, RetryPolicy};
