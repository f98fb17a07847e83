//! Async Timers
//!
//! Browser timers on wasm32, tokio elsewhere.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

use crate::error::ApiError;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Race `fut` against `limit`
pub async fn with_timeout<F: Future>(fut: F, limit: Duration) -> Result<F::Output, ApiError> {
    let fut = pin!(fut);
    let timer = pin!(sleep(limit));
    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout(limit.as_millis() as u64)),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fast_future_wins() {
        let result = with_timeout(async { 5 }, Duration::from_secs(1)).await;
        assert_eq!(result, Ok(5));
    }

    #[tokio::test]
    async fn test_slow_future_times_out() {
        let slow = sleep(Duration::from_millis(200));
        let result = with_timeout(slow, Duration::from_millis(10)).await;
        assert_eq!(result, Err(ApiError::Timeout(10)));
    }
}
