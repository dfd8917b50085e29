//! Direction classification.

use std::collections::HashMap;

/// Which way a departure is heading relative to the hub terminus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the central terminus (Perth-bound).
    TowardHub,
    /// Away from the central terminus (south-bound).
    AwayFromHub,
}

/// Rules for classifying a departure's direction.
///
/// An explicit platform assignment wins when the record's platform is known;
/// otherwise a case-insensitive hub-token match against the destination
/// decides: token present means toward the hub.
///
/// # Examples
///
/// ```
/// use departure_server::domain::{Direction, DirectionRules};
///
/// let rules = DirectionRules::new("Perth").with_platform("2", Direction::AwayFromHub);
///
/// assert_eq!(rules.classify("?", "Perth"), Direction::TowardHub);
/// assert_eq!(rules.classify("?", "Armadale"), Direction::AwayFromHub);
/// // Platform assignment beats the destination text.
/// assert_eq!(rules.classify("2", "East Perth"), Direction::AwayFromHub);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectionRules {
    hub_token: String,
    platforms: HashMap<String, Direction>,
}

impl DirectionRules {
    /// Create rules with the given hub token (e.g. "Perth").
    pub fn new(hub_token: impl Into<String>) -> Self {
        Self {
            hub_token: hub_token.into().trim().to_lowercase(),
            platforms: HashMap::new(),
        }
    }

    /// Assign a fixed direction to a platform.
    pub fn with_platform(mut self, platform: impl Into<String>, direction: Direction) -> Self {
        self.platforms.insert(platform.into(), direction);
        self
    }

    /// Classify a departure by platform, falling back to the destination.
    ///
    /// An empty hub token never matches, so without platform assignments
    /// everything classifies away from the hub.
    pub fn classify(&self, platform: &str, destination: &str) -> Direction {
        if let Some(direction) = self.platforms.get(platform) {
            return *direction;
        }

        if !self.hub_token.is_empty() && destination.to_lowercase().contains(&self.hub_token) {
            Direction::TowardHub
        } else {
            Direction::AwayFromHub
        }
    }
}
