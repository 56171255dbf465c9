//! Errors surfaced by the one-call client.

use reqwest::StatusCode;

/// Terminal failure of a single one-call request. Nothing is retried.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwmError {
    /// HTTP 401: the API key was rejected.
    #[error("Unauthorized")]
    Unauthorized,
    /// HTTP 404.
    #[error("Not Found")]
    NotFound,
    /// HTTP 429: the key's call quota is exhausted.
    #[error("Too Many Requests")]
    RateLimited,
    /// The request did not complete within the configured timeout.
    #[error("Request timeout")]
    Timeout,
    /// Any other status, a transport failure or an undecodable body.
    #[error("Unknown Error")]
    Unknown,
}

impl OwmError {
    pub fn message(&self) -> &'static str {
        match self {
            OwmError::Unauthorized => "Unauthorized",
            OwmError::NotFound => "Not Found",
            OwmError::RateLimited => "Too Many Requests",
            OwmError::Timeout => "Request timeout",
            OwmError::Unknown => "Unknown Error",
        }
    }

    /// Maps a non-200 status to its error kind.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => OwmError::Unauthorized,
            StatusCode::NOT_FOUND => OwmError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => OwmError::RateLimited,
            _ => OwmError::Unknown,
        }
    }
}

impl From<reqwest::Error> for OwmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OwmError::Timeout
        } else {
            OwmError::Unknown
        }
    }
}
