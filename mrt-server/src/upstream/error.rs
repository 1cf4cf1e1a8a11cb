//! Upstream fetch error types.

/// Errors from fetching an upstream payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream error {status}: {message}")]
    Status { status: u16, message: String },
}

impl FetchError {
    /// Whether the request was abandoned because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_timeout())
    }
}
