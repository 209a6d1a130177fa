//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries.
    #[default]
    None,
    /// Retry on transport failures and retryable statuses, with exponential
    /// backoff. Default for GET endpoints, the only kind this API has.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Base backoff in seconds: the n-th retry (1-indexed) waits
    /// `backoff_factor * 2^(n-1)`.
    pub backoff_factor: f64,
    /// Ceiling on the delay between retries.
    pub max_delay: Duration,
    /// Whether to add jitter to the delay. Off by default so the schedule
    /// follows the documented formula exactly.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 0.3,
            max_delay: Duration::from_secs(10),
            jitter: false,
            retryable_statuses: vec![500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The default config for idempotent (GET) requests.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 500, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.backoff_factor * 2f64.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_secs_f64());

        let final_secs = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_secs_f64(final_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn test_retry_config_idempotent_statuses() {
        let config = RetryConfig::idempotent();
        for status in [429, 500, 502, 503, 504] {
            assert!(config.retryable_statuses.contains(&status));
        }
        assert!(!config.retryable_statuses.contains(&404));
    }

    #[test]
    fn test_retry_config_defaults() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff_factor, 0.3);
        assert!(!config.jitter);
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for_attempt(0).as_millis(), 300);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 600);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 1200);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = RetryConfig {
            backoff_factor: 1.0,
            max_delay: Duration::from_secs(2),
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_attempt(5).as_millis(), 2000);
    }

    #[test]
    fn test_jittered_delay_stays_near_base() {
        let config = RetryConfig {
            jitter: true,
            ..RetryConfig::default()
        };
        for _ in 0..32 {
            let d = config.delay_for_attempt(1).as_secs_f64();
            assert!((0.45..=0.75).contains(&d));
        }
    }
}
