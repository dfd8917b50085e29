//! Live-times HTTP client.
//!
//! Fetches every configured line feed concurrently and parses each response
//! according to the configured strategy. A single failed feed contributes
//! nothing; the fetch only fails when every feed does.

use futures::future::join_all;

use crate::domain::RawDeparture;

use super::convert::convert_live_times;
use super::error::SourceError;
use super::proxy::ProxyConfig;
use super::scrape::{FieldContract, FieldSelectors, scrape_departures};
use super::types::LiveTimesResponse;

/// Browser User-Agent sent with every request. The provider rejects
/// obviously non-browser clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How to interpret a line feed's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// The feed is the internal JSON live-times API.
    Api,
    /// The feed is the public live-times page; extract by markup heuristics.
    #[default]
    Scrape,
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fetch strategy: {0}")]
pub struct UnknownStrategy(String);

impl std::str::FromStr for FetchStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "api" => Ok(FetchStrategy::Api),
            "scrape" | "html" => Ok(FetchStrategy::Scrape),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// One upstream feed: a line name and the URL serving its live times.
#[derive(Debug, Clone)]
pub struct LineFeed {
    /// Line name, carried into every record fetched from this feed.
    pub name: String,
    /// URL of the feed.
    pub url: String,
}

impl LineFeed {
    /// Create a feed.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Configuration for the live-times client.
#[derive(Debug, Clone)]
pub struct TransperthConfig {
    /// Feeds to fetch, one per line serving the station.
    pub feeds: Vec<LineFeed>,
    /// How feed responses are parsed.
    pub strategy: FetchStrategy,
    /// Extraction contract for the scrape strategy.
    pub contract: FieldContract,
    /// Optional proxy fallback for blocked direct fetches.
    pub proxy: Option<ProxyConfig>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TransperthConfig {
    /// Create a config for the given feeds with the default strategy.
    pub fn new(feeds: Vec<LineFeed>) -> Self {
        Self {
            feeds,
            strategy: FetchStrategy::default(),
            contract: FieldContract::default(),
            proxy: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the fetch strategy.
    pub fn with_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable the proxy fallback.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the provider's live train times.
pub struct TransperthClient {
    http: reqwest::Client,
    feeds: Vec<LineFeed>,
    strategy: FetchStrategy,
    selectors: FieldSelectors,
    proxy: Option<ProxyConfig>,
}

impl TransperthClient {
    /// Create a client from the given configuration.
    pub fn new(config: TransperthConfig) -> Result<Self, SourceError> {
        let selectors = FieldSelectors::compile(&config.contract)?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feeds: config.feeds,
            strategy: config.strategy,
            selectors,
            proxy: config.proxy,
        })
    }

    /// Fetch all configured feeds concurrently and merge their records.
    ///
    /// Records keep feed order: all of the first feed's departures, then the
    /// second's, and so on. The board builder's stable sort interleaves them
    /// by countdown.
    pub async fn fetch_departures(&self) -> Result<Vec<RawDeparture>, SourceError> {
        let results = join_all(self.feeds.iter().map(|feed| self.fetch_feed(feed))).await;

        let mut raws = Vec::new();
        let mut failures = 0usize;
        for (feed, result) in self.feeds.iter().zip(results) {
            match result {
                Ok(mut records) => {
                    tracing::debug!(line = %feed.name, count = records.len(), "fetched live times");
                    raws.append(&mut records);
                }
                Err(error) => {
                    tracing::warn!(line = %feed.name, %error, "line feed failed");
                    failures += 1;
                }
            }
        }

        if !self.feeds.is_empty() && failures == self.feeds.len() {
            return Err(SourceError::Unavailable);
        }

        Ok(raws)
    }

    /// Fetch one feed, falling back to the proxy once if configured.
    async fn fetch_feed(&self, feed: &LineFeed) -> Result<Vec<RawDeparture>, SourceError> {
        match self.fetch_body(&feed.url).await {
            Ok(body) => self.parse_body(&body, feed),
            Err(error) => {
                let Some(proxy) = &self.proxy else {
                    return Err(error);
                };

                tracing::warn!(line = %feed.name, %error, "direct fetch failed, retrying through proxy");
                let url = proxy.proxied_url(&feed.url)?;
                let body = self.fetch_body(url.as_str()).await?;
                self.parse_body(&body, feed)
            }
        }
    }

    async fn fetch_body(&self, url: &str) -> Result<String, SourceError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        Ok(response.text().await?)
    }

    fn parse_body(&self, body: &str, feed: &LineFeed) -> Result<Vec<RawDeparture>, SourceError> {
        match self.strategy {
            FetchStrategy::Api => {
                let response: LiveTimesResponse =
                    serde_json::from_str(body).map_err(|e| SourceError::Json {
                        message: e.to_string(),
                    })?;
                Ok(convert_live_times(&response, &feed.name))
            }
            FetchStrategy::Scrape => Ok(scrape_departures(body, &self.selectors, &feed.name)),
        }
    }
}
