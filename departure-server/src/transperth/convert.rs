//! Conversion from live-times DTOs to raw departure records.

use crate::domain::{DEFAULT_PATTERN, DEFAULT_STOPS, RawDeparture, UNKNOWN_PLATFORM};

use super::types::{LiveTimesResponse, TripDto};

/// Convert a live-times response into raw records for one line.
///
/// Cancelled trips are skipped with a debug log. Missing optional fields get
/// the documented defaults; a missing destination or display time becomes an
/// empty string, left for the board builder to drop and count.
pub fn convert_live_times(response: &LiveTimesResponse, line: &str) -> Vec<RawDeparture> {
    let trips = response.trips.as_deref().unwrap_or(&[]);
    let mut raws = Vec::with_capacity(trips.len());

    for trip in trips {
        if trip.cancelled.unwrap_or(false) {
            tracing::debug!(destination = ?trip.destination, line, "skipping cancelled trip");
            continue;
        }
        raws.push(convert_trip(trip, line));
    }

    raws
}

fn convert_trip(trip: &TripDto, line: &str) -> RawDeparture {
    RawDeparture {
        platform: field(&trip.platform, UNKNOWN_PLATFORM),
        destination: field(&trip.destination, ""),
        time_display: field(&trip.display_time, ""),
        pattern: field(&trip.service_pattern, DEFAULT_PATTERN),
        stops: field(&trip.stopping_pattern, DEFAULT_STOPS),
        line: line.to_string(),
    }
}

/// A trimmed field value, or `default` when absent or blank.
fn field(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_PATTERN, DEFAULT_STOPS, UNKNOWN_PLATFORM};

    fn trip(destination: &str, display_time: &str) -> TripDto {
        TripDto {
            platform: None,
            destination: Some(destination.to_string()),
            display_time: Some(display_time.to_string()),
            service_pattern: None,
            stopping_pattern: None,
            cancelled: None,
        }
    }

    #[test]
    fn applies_defaults_for_missing_fields() {
        let response = LiveTimesResponse {
            station_name: None,
            trips: Some(vec![trip("Perth", "5 min")]),
        };

        let raws = convert_live_times(&response, "Armadale");
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].platform, UNKNOWN_PLATFORM);
        assert_eq!(raws[0].pattern, DEFAULT_PATTERN);
        assert_eq!(raws[0].stops, DEFAULT_STOPS);
        assert_eq!(raws[0].line, "Armadale");
    }

    #[test]
    fn preserves_reported_fields() {
        let mut t = trip("Perth", "Now");
        t.platform = Some("1".into());
        t.service_pattern = Some("K".into());
        t.stopping_pattern = Some("Limited Stops".into());

        let response = LiveTimesResponse {
            station_name: None,
            trips: Some(vec![t]),
        };

        let raws = convert_live_times(&response, "Armadale");
        assert_eq!(raws[0].platform, "1");
        assert_eq!(raws[0].pattern, "K");
        assert_eq!(raws[0].stops, "Limited Stops");
        assert_eq!(raws[0].destination, "Perth");
        assert_eq!(raws[0].time_display, "Now");
    }

    #[test]
    fn skips_cancelled_trips() {
        let mut cancelled = trip("Perth", "5 min");
        cancelled.cancelled = Some(true);

        let response = LiveTimesResponse {
            station_name: None,
            trips: Some(vec![cancelled, trip("Armadale", "7 min")]),
        };

        let raws = convert_live_times(&response, "Armadale");
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].destination, "Armadale");
    }

    #[test]
    fn blank_fields_become_empty_for_the_board_to_drop() {
        let mut t = trip("  ", "5 min");
        t.platform = Some("".into());

        let response = LiveTimesResponse {
            station_name: None,
            trips: Some(vec![t]),
        };

        let raws = convert_live_times(&response, "Armadale");
        assert_eq!(raws[0].destination, "");
        assert_eq!(raws[0].platform, UNKNOWN_PLATFORM);
    }

    #[test]
    fn missing_trips_is_an_empty_board() {
        let response = LiveTimesResponse {
            station_name: None,
            trips: None,
        };
        assert!(convert_live_times(&response, "Armadale").is_empty());
    }
}
