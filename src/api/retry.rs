// src/api/retry.rs
//! Fixed-delay retry of rate-limited (HTTP 429) requests.

use super::client::ApiResponse;
use crate::constants::RATE_LIMIT_RETRY_DELAY;
use crate::error::AppError;
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;

/// How to react to HTTP 429.
///
/// The default retries forever with a fixed pause: an export is a one-shot
/// batch job, so a long rate limit just makes the run longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub delay: Duration,
    /// `None` retries without limit.
    pub max_retries: Option<u32>,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            delay: RATE_LIMIT_RETRY_DELAY,
            max_retries: None,
        }
    }
}

/// Issues `send` until the response is not a 429.
///
/// Network errors and non-429 statuses are handed back untouched; only the
/// rate limit is retried.
pub async fn send_with_retry<F, Fut>(
    policy: &RateLimitPolicy,
    endpoint: &str,
    mut send: F,
) -> Result<ApiResponse<String>, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ApiResponse<String>, AppError>>,
{
    let mut attempts = 0u32;
    loop {
        let response = send().await?;
        attempts += 1;
        if response.status != StatusCode::TOO_MANY_REQUESTS {
            return Ok(response);
        }

        if let Some(max) = policy.max_retries {
            if attempts > max {
                return Err(AppError::RateLimitExhausted {
                    endpoint: endpoint.to_string(),
                    attempts,
                });
            }
        }

        log::warn!(
            "Rate limited on {} (attempt {}), retrying in {:?}",
            endpoint,
            attempts,
            policy.delay
        );
        tokio::time::sleep(policy.delay).await;
    }
}
