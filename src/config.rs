//! Board Configuration
//!
//! Compile-time settings. `KANBAN_API_BASE_URL` and `KANBAN_LOG_LEVEL` may be
//! set in the build environment to override the defaults.

use std::time::Duration;

use crate::api::RetryPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Tasks shown per column per page
pub const TASKS_PER_PAGE: usize = 3;

/// Per-request time limit
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Task API connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Endpoint root without trailing slash, e.g. `http://localhost:4000`
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Defaults, with the base URL taken from the build environment when set
    pub fn from_env() -> Self {
        Self::new(option_env!("KANBAN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Maximum log level for the browser console
pub fn log_level() -> tracing::Level {
    match option_env!("KANBAN_LOG_LEVEL").unwrap_or("info") {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        assert_eq!(ApiConfig::new("http://api.local:4000/").base_url, "http://api.local:4000");
        assert_eq!(ApiConfig::new(" http://x// ").base_url, "http://x");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
        assert_eq!(config.retry.max_retries, 1);
    }
}
