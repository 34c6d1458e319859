use std::time::Duration;

use reqwest::{RequestBuilder, Response};

use crate::core::JqError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ retry)`, capped at `max`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    /// Delay before retry number `retry` (0 for the first retry).
    #[must_use]
    pub fn delay(&self, retry: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let exp = i32::try_from(retry).unwrap_or(i32::MAX);
                let secs = base.as_secs_f64() * factor.powi(exp);
                if !secs.is_finite() || secs >= max.as_secs_f64() {
                    *max
                } else {
                    Duration::from_secs_f64(secs)
                }
            }
        }
    }
}

/// Configuration for the transport-level retry applied to every request.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 2,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
            },
            retry_on_status: vec![429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

/// Retry policy for the id-token exchange when the refresh token is rejected.
///
/// Only [`JqError::TokenExchange`] is retried; every other error propagates at once.
#[derive(Clone, Debug)]
pub struct AuthRetryConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay between attempts.
    pub backoff: Backoff,
}

impl Default for AuthRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_secs(5),
                factor: 2.0,
                max: Duration::from_secs(300),
            },
        }
    }
}

impl super::JqClient {
    /// Sends `req`, retrying on the configured statuses and transport failures.
    ///
    /// The final response is returned as-is, whatever its status; callers decide what
    /// a non-2xx means.
    pub(crate) async fn send_with_retry(&self, req: RequestBuilder) -> Result<Response, JqError> {
        let cfg = &self.retry;
        let mut retry = 0u32;

        loop {
            let attempt = req
                .try_clone()
                .ok_or_else(|| JqError::Data("request body is not cloneable".into()))?;

            match attempt.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if cfg.enabled && retry < cfg.max_retries && cfg.retry_on_status.contains(&code)
                    {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(status = code, retry, url = %resp.url(), "retrying after status");
                        tokio::time::sleep(cfg.backoff.delay(retry)).await;
                        retry += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let transient = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if cfg.enabled && retry < cfg.max_retries && transient {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(error = %e, retry, "retrying after transport error");
                        tokio::time::sleep(cfg.backoff.delay(retry)).await;
                        retry += 1;
                        continue;
                    }
                    return Err(JqError::Http(e));
                }
            }
        }
    }
}
