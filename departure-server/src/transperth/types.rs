//! Live-times API response DTOs.
//!
//! These types map to the provider's internal JSON live train times
//! responses. Fields are `Option` because the API omits fields rather than
//! sending nulls.

use serde::Deserialize;

/// Response from the live train times endpoint for one line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTimesResponse {
    /// Display name of the station the board is for.
    pub station_name: Option<String>,

    /// Trips currently on the board, soonest first.
    pub trips: Option<Vec<TripDto>>,
}

/// One scheduled trip on the live board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Platform number/letter, when the station reports one.
    pub platform: Option<String>,

    /// Terminal or via point.
    pub destination: Option<String>,

    /// Time exactly as displayed ("5 min", "Now", "10:45").
    pub display_time: Option<String>,

    /// Service pattern code (e.g. "A", "K", "W").
    pub service_pattern: Option<String>,

    /// Stopping pattern description.
    pub stopping_pattern: Option<String>,

    /// Whether the trip has been cancelled.
    pub cancelled: Option<bool>,
}
