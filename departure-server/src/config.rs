//! Server configuration.
//!
//! Everything configurable is assembled here and passed down explicitly;
//! only `main` reads the process environment.

use crate::board::DEFAULT_LIMIT;
use crate::domain::{Direction, DirectionRules};
use crate::transperth::{FetchStrategy, LineFeed, ProxyConfig, TransperthConfig};

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Station the board is for (display only).
    pub station: String,
    /// Upstream feeds, one per line serving the station.
    pub feeds: Vec<LineFeed>,
    /// How feed responses are parsed.
    pub strategy: FetchStrategy,
    /// Token marking hub-bound destinations.
    pub hub_token: String,
    /// Explicit platform direction assignments, when the station's
    /// platforms are known to be directional.
    pub platforms: Vec<(String, Direction)>,
    /// Maximum departures per direction in a response.
    pub limit: usize,
    /// Port to listen on.
    pub port: u16,
    /// Optional proxy fallback key.
    pub proxy_key: Option<String>,
}

impl ServerConfig {
    /// Configuration for the original Queens Park deployment: both lines
    /// serving the station, classified by the "Perth" destination token.
    pub fn queens_park() -> Self {
        Self {
            station: "Queens Park Stn".to_string(),
            feeds: vec![
                LineFeed::new(
                    "Armadale",
                    "https://www.transperth.wa.gov.au/Timetables/Live-Train-Times\
                     ?line=Armadale%20Line&station=Queens%20Park%20Stn",
                ),
                LineFeed::new(
                    "Thornlie-Cockburn",
                    "https://www.transperth.wa.gov.au/Timetables/Live-Train-Times\
                     ?line=Thornlie-Cockburn%20Line&station=Queens%20Park%20Stn",
                ),
            ],
            strategy: FetchStrategy::Scrape,
            hub_token: "Perth".to_string(),
            platforms: Vec::new(),
            limit: DEFAULT_LIMIT,
            port: 5000,
            proxy_key: None,
        }
    }

    /// Direction rules from the hub token and platform assignments.
    pub fn direction_rules(&self) -> DirectionRules {
        let mut rules = DirectionRules::new(&self.hub_token);
        for (platform, direction) in &self.platforms {
            rules = rules.with_platform(platform.as_str(), *direction);
        }
        rules
    }

    /// Upstream client configuration.
    pub fn transperth(&self) -> TransperthConfig {
        let mut config = TransperthConfig::new(self.feeds.clone()).with_strategy(self.strategy);
        if let Some(key) = &self.proxy_key {
            config = config.with_proxy(ProxyConfig::new(key.as_str()));
        }
        config
    }
}
