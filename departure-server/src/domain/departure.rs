//! Departure records.

use serde::Serialize;

/// Placeholder platform used when the source does not report one.
pub const UNKNOWN_PLATFORM: &str = "?";

/// Default service pattern code when the source omits one.
pub const DEFAULT_PATTERN: &str = "W";

/// Default stopping pattern description when the source omits one.
pub const DEFAULT_STOPS: &str = "All Stations";

/// A departure as reported by the upstream source, before normalization.
///
/// `destination` and `time_display` must be non-empty for the record to be
/// usable; the board builder drops and counts records that fail this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeparture {
    /// Platform identifier, or [`UNKNOWN_PLATFORM`].
    pub platform: String,
    /// Terminal or via point, free text.
    pub destination: String,
    /// Time string exactly as shown by the source ("5 min", "Now", "10:45").
    pub time_display: String,
    /// Service pattern code.
    pub pattern: String,
    /// Stopping pattern description.
    pub stops: String,
    /// Line the record was fetched from.
    pub line: String,
}

impl RawDeparture {
    /// Create a record with the given destination and time display, using
    /// the documented defaults for everything else.
    pub fn new(destination: impl Into<String>, time_display: impl Into<String>) -> Self {
        Self {
            platform: UNKNOWN_PLATFORM.to_string(),
            destination: destination.into(),
            time_display: time_display.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            stops: DEFAULT_STOPS.to_string(),
            line: String::new(),
        }
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Set the service pattern code.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the stopping pattern description.
    pub fn with_stops(mut self, stops: impl Into<String>) -> Self {
        self.stops = stops.into();
        self
    }

    /// Set the line name.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }
}

/// A normalized departure, ready for display.
///
/// Carries every raw field verbatim plus the computed countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    /// Platform identifier, or [`UNKNOWN_PLATFORM`].
    pub platform: String,
    /// Terminal or via point.
    pub destination: String,
    /// Time string as shown by the source.
    pub time_display: String,
    /// Whole minutes until departure.
    pub minutes: u32,
    /// Service pattern code.
    pub pattern: String,
    /// Stopping pattern description.
    pub stops: String,
    /// Line the record was fetched from.
    pub line: String,
}

impl Departure {
    /// Pair a raw record with its normalized countdown.
    pub fn from_raw(raw: &RawDeparture, minutes: u32) -> Self {
        Self {
            platform: raw.platform.clone(),
            destination: raw.destination.clone(),
            time_display: raw.time_display.clone(),
            minutes,
            pattern: raw.pattern.clone(),
            stops: raw.stops.clone(),
            line: raw.line.clone(),
        }
    }
}
