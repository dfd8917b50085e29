//! Paid proxy fallback.
//!
//! When the provider blocks direct requests, the fetch is retried once
//! through a scraping proxy that renders the page server-side. The proxy
//! takes the target URL and the account key as query parameters.

use reqwest::Url;

use super::error::SourceError;

/// Default endpoint of the scraping proxy service.
const DEFAULT_ENDPOINT: &str = "https://api.scraperapi.com/";

/// Proxy account configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Proxy endpoint.
    pub endpoint: String,
    /// Account API key.
    pub api_key: String,
}

impl ProxyConfig {
    /// Create a config for the default endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Rewrite `target` to go through the proxy.
    pub fn proxied_url(&self, target: &str) -> Result<Url, SourceError> {
        Url::parse_with_params(
            &self.endpoint,
            &[("api_key", self.api_key.as_str()), ("url", target)],
        )
        .map_err(|e| SourceError::ProxyEndpoint {
            message: e.to_string(),
        })
    }
}
