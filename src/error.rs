//! Error Types

use thiserror::Error;

/// Failure of a call against the task API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Worth retrying: the request may succeed if sent again unchanged
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) | ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => {
                *status == 408 || *status == 429 || (500..600).contains(status)
            }
            ApiError::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}

/// A column identifier outside the fixed board columns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown column '{0}'")]
pub struct UnknownColumn(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: String::new(),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Transport("connection refused".into()).is_transient());
        assert!(ApiError::Timeout(10_000).is_transient());
        assert!(status(503).is_transient());
        assert!(status(429).is_transient());
        assert!(status(408).is_transient());
        assert!(!status(404).is_transient());
        assert!(!status(400).is_transient());
        assert!(!ApiError::Decode("expected value".into()).is_transient());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::Status { status: 404, message: "Not Found".into() }.to_string(),
            "server responded with 404: Not Found"
        );
        assert_eq!(UnknownColumn("archive".into()).to_string(), "unknown column 'archive'");
    }
}
