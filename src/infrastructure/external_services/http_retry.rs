use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 1.5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = self.backoff_factor.powi(attempt.saturating_sub(1) as i32);
        self.base_delay.mul_f64(factor)
    }
}

/// Whether a failed request is worth sending again.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// 429 and 5xx are transient. Anything else in 4xx is the caller's fault.
pub fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

pub async fn send_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut request: F) -> Result<T, E>
where
    E: Retryable + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempts = 0;

    loop {
        attempts += 1;

        match request().await {
            Ok(response) => return Ok(response),
            Err(e) => {
                if !e.is_retryable() || attempts > policy.max_retries {
                    return Err(e);
                }

                let backoff_time = policy.backoff(attempts);
                tracing::warn!(
                    "Request attempt {} failed ({}), retrying in {:?}",
                    attempts,
                    e,
                    backoff_time
                );
                tokio::time::sleep(backoff_time).await;
            }
        }
    }
}
