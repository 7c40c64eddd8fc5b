use thiserror::Error;

/// Errors from [`crate::source::CafeSource::nearby`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CafeSourceError {
    /// The query failed validation before any request was made.
    #[error("invalid cafe query: {reason}")]
    InvalidQuery {
        /// Which constraint the query violated.
        reason: &'static str,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status code.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description from the client.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error description from the client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse cafe response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
}
