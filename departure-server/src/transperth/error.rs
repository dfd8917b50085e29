//! Upstream source error types.

/// Errors from the departure source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("upstream error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the JSON live-times response.
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A CSS selector in the extraction contract failed to compile.
    #[error("invalid selector {selector:?}")]
    Selector { selector: String },

    /// The proxy endpoint URL could not be built.
    #[error("invalid proxy endpoint: {message}")]
    ProxyEndpoint { message: String },

    /// Every configured line feed failed.
    #[error("no departure feed could be reached")]
    Unavailable,

    /// Mock fixture data could not be loaded.
    #[error("mock data error: {message}")]
    Mock { message: String },
}
