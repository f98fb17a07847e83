//! Retry Policy

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::timer::sleep;
use crate::error::ApiError;

/// Bounded retry with exponential backoff for transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each later one
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            initial_backoff: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after failed attempt number `attempt` (0-based),
    /// or None when the error should be surfaced.
    pub fn backoff(&self, attempt: u32, err: &ApiError) -> Option<Duration> {
        if attempt >= self.max_retries || !err.is_transient() {
            return None;
        }
        Some(self.initial_backoff.saturating_mul(2u32.saturating_pow(attempt)))
    }
}

/// Run `attempt` until it succeeds or `policy` gives up.
///
/// Only `idempotent` requests are replayed; anything else gets exactly one attempt.
pub async fn retry<T, F, Fut>(policy: RetryPolicy, idempotent: bool, mut attempt: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut tries = 0;
    loop {
        let err = match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let delay = if idempotent { policy.backoff(tries, &err) } else { None };
        let Some(delay) = delay else {
            return Err(err);
        };
        warn!(%err, attempt = tries, delay_ms = delay.as_millis() as u64, "[API] Transient failure, retrying");
        sleep(delay).await;
        tries += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn quick() -> RetryPolicy {
        RetryPolicy {
            max_retries: 1,
            initial_backoff: Duration::from_millis(1),
        }
    }

    /// Counts attempts; fails with `err` for the first `failures` of them
    async fn flaky(calls: &Cell<u32>, failures: u32, err: ApiError) -> Result<u32, ApiError> {
        calls.set(calls.get() + 1);
        if calls.get() <= failures {
            Err(err)
        } else {
            Ok(calls.get())
        }
    }

    #[tokio::test]
    async fn test_idempotent_transient_retried_once() {
        let calls = Cell::new(0);
        let err = ApiError::Status { status: 503, message: "busy".into() };
        let result = retry(quick(), true, || flaky(&calls, 1, err.clone())).await;
        assert_eq!(result, Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_gives_up_after_one_retry() {
        let calls = Cell::new(0);
        let err = ApiError::Transport("reset".into());
        let result = retry(quick(), true, || flaky(&calls, 5, err.clone())).await;
        assert_eq!(result, Err(err));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_non_idempotent_single_attempt() {
        let calls = Cell::new(0);
        let err = ApiError::Timeout(10);
        let result = retry(quick(), false, || flaky(&calls, 1, err.clone())).await;
        assert_eq!(result, Err(err));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_client_error_single_attempt() {
        let calls = Cell::new(0);
        let err = ApiError::Status { status: 404, message: "Not Found".into() };
        let result = retry(quick(), true, || flaky(&calls, 1, err.clone())).await;
        assert_eq!(result, Err(err));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_single_retry_on_transient() {
        let policy = RetryPolicy::default();
        let err = ApiError::Transport("reset".into());
        assert_eq!(policy.backoff(0, &err), Some(Duration::from_millis(300)));
        assert_eq!(policy.backoff(1, &err), None);
    }

    #[test]
    fn test_no_retry_on_client_error() {
        let policy = RetryPolicy::default();
        let err = ApiError::Status { status: 404, message: "Not Found".into() };
        assert_eq!(policy.backoff(0, &err), None);
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
        };
        let err = ApiError::Timeout(10);
        assert_eq!(policy.backoff(1, &err), Some(Duration::from_millis(200)));
        assert_eq!(policy.backoff(2, &err), Some(Duration::from_millis(400)));
        let none = RetryPolicy { max_retries: 0, ..RetryPolicy::default() };
        assert_eq!(none.backoff(0, &err), None);
    }
}
