//! Route feed error types.

/// Errors from the route feed producers.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check ROUTE_FEED_API_KEY")]
    Unauthorized,

    /// API returned an error status code
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or data file
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read demo data from disk
    #[error("failed to read demo data: {message}")]
    Io { message: String },
}
