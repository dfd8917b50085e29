//! Departure board assembly.
//!
//! Pure transformation from raw upstream records to the two directional,
//! imminence-sorted lists served by the API. Malformed records are dropped
//! and counted by reason, never propagated as errors.

use chrono::NaiveDateTime;

use crate::domain::{Departure, Direction, DirectionRules, RawDeparture, minutes_until};

/// Default maximum number of departures per direction.
pub const DEFAULT_LIMIT: usize = 10;

/// Why a raw record was excluded from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// `destination` was empty.
    EmptyDestination,
    /// `time_display` was empty.
    EmptyTimeDisplay,
    /// `time_display` matched no recognized format.
    UnparseableTime,
}

/// Counts of dropped records by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropStats {
    /// Records with an empty destination.
    pub empty_destination: usize,
    /// Records with an empty time display.
    pub empty_time_display: usize,
    /// Records whose time display matched no recognized format.
    pub unparseable_time: usize,
}

impl DropStats {
    fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::EmptyDestination => self.empty_destination += 1,
            DropReason::EmptyTimeDisplay => self.empty_time_display += 1,
            DropReason::UnparseableTime => self.unparseable_time += 1,
        }
    }

    /// Total number of dropped records.
    pub fn total(&self) -> usize {
        self.empty_destination + self.empty_time_display + self.unparseable_time
    }
}

/// An assembled departure board.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Departures toward the hub, soonest first.
    pub toward_hub: Vec<Departure>,
    /// Departures away from the hub, soonest first.
    pub away_from_hub: Vec<Departure>,
    /// Records excluded during assembly, by reason.
    pub dropped: DropStats,
}

/// Build the board from raw records.
///
/// Each usable record is normalized via [`minutes_until`], classified with
/// `rules`, and partitioned. Both sides are sorted ascending by minutes with
/// a stable sort (ties keep input order) and truncated to `limit` entries.
///
/// Records with an empty destination, an empty time display, or an
/// unparseable time display are dropped and counted in [`Board::dropped`].
pub fn classify_and_rank(
    raws: &[RawDeparture],
    now: NaiveDateTime,
    rules: &DirectionRules,
    limit: usize,
) -> Board {
    let mut board = Board::default();

    for raw in raws {
        let missing = if raw.destination.trim().is_empty() {
            Some(DropReason::EmptyDestination)
        } else if raw.time_display.trim().is_empty() {
            Some(DropReason::EmptyTimeDisplay)
        } else {
            None
        };
        if let Some(reason) = missing {
            tracing::debug!(
                ?reason,
                destination = %raw.destination,
                line = %raw.line,
                "dropping departure record"
            );
            board.dropped.record(reason);
            continue;
        }

        let minutes = match minutes_until(&raw.time_display, now) {
            Ok(minutes) => minutes,
            Err(error) => {
                tracing::debug!(
                    %error,
                    time_display = %raw.time_display,
                    destination = %raw.destination,
                    "dropping departure record"
                );
                board.dropped.record(DropReason::UnparseableTime);
                continue;
            }
        };

        let departure = Departure::from_raw(raw, minutes);
        match rules.classify(&raw.platform, &raw.destination) {
            Direction::TowardHub => board.toward_hub.push(departure),
            Direction::AwayFromHub => board.away_from_hub.push(departure),
        }
    }

    rank(&mut board.toward_hub, limit);
    rank(&mut board.away_from_hub, limit);
    board
}

/// Sort ascending by minutes (stable) and truncate to `limit`.
fn rank(departures: &mut Vec<Departure>, limit: usize) {
    departures.sort_by_key(|d| d.minutes);
    departures.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn rules() -> DirectionRules {
        DirectionRules::new("Perth")
    }

    #[test]
    fn end_to_end_scenario() {
        let raws = vec![
            RawDeparture::new("Perth", "Now").with_platform("1"),
            RawDeparture::new("Armadale", "12:05"),
        ];

        let board = classify_and_rank(&raws, at(12, 0), &rules(), DEFAULT_LIMIT);

        assert_eq!(board.toward_hub.len(), 1);
        assert_eq!(board.toward_hub[0].destination, "Perth");
        assert_eq!(board.toward_hub[0].minutes, 0);

        assert_eq!(board.away_from_hub.len(), 1);
        assert_eq!(board.away_from_hub[0].destination, "Armadale");
        assert_eq!(board.away_from_hub[0].minutes, 5);

        assert_eq!(board.dropped.total(), 0);
    }

    #[test]
    fn truncation_never_reorders() {
        // 15 hub-bound records with shuffled countdowns, including ties.
        let countdowns = [9, 3, 7, 3, 12, 1, 7, 20, 0, 5, 3, 15, 8, 2, 11];
        let raws: Vec<RawDeparture> = countdowns
            .iter()
            .enumerate()
            .map(|(i, m)| {
                RawDeparture::new("Perth", format!("{m} min")).with_line(format!("record-{i}"))
            })
            .collect();

        let limited = classify_and_rank(&raws, at(12, 0), &rules(), 10);
        let full = classify_and_rank(&raws, at(12, 0), &rules(), usize::MAX);

        assert_eq!(limited.toward_hub.len(), 10);
        assert_eq!(full.toward_hub.len(), 15);
        assert_eq!(limited.toward_hub, full.toward_hub[..10]);

        let minutes: Vec<u32> = full.toward_hub.iter().map(|d| d.minutes).collect();
        assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ties_keep_input_order() {
        let raws = vec![
            RawDeparture::new("Perth", "5 min").with_line("first"),
            RawDeparture::new("Perth Underground", "5 min").with_line("second"),
            RawDeparture::new("Perth", "5 min").with_line("third"),
        ];

        let board = classify_and_rank(&raws, at(12, 0), &rules(), DEFAULT_LIMIT);
        let lines: Vec<&str> = board.toward_hub.iter().map(|d| d.line.as_str()).collect();
        assert_eq!(lines, ["first", "second", "third"]);
    }

    #[test]
    fn empty_destination_is_excluded() {
        let raws = vec![
            RawDeparture::new("", "5 min"),
            RawDeparture::new("   ", "Now"),
            RawDeparture::new("Perth", "5 min"),
        ];

        let board = classify_and_rank(&raws, at(12, 0), &rules(), DEFAULT_LIMIT);

        assert_eq!(board.toward_hub.len(), 1);
        assert!(board.away_from_hub.is_empty());
        assert_eq!(board.dropped.empty_destination, 2);
        assert_eq!(board.dropped.total(), 2);
    }

    #[test]
    fn unusable_records_are_counted_by_reason() {
        let raws = vec![
            RawDeparture::new("Perth", ""),
            RawDeparture::new("Armadale", "cancelled"),
            RawDeparture::new("", "5 min"),
            RawDeparture::new("Perth", "3 min"),
        ];

        let board = classify_and_rank(&raws, at(12, 0), &rules(), DEFAULT_LIMIT);

        assert_eq!(board.dropped.empty_time_display, 1);
        assert_eq!(board.dropped.unparseable_time, 1);
        assert_eq!(board.dropped.empty_destination, 1);
        assert_eq!(board.dropped.total(), 3);
        assert_eq!(board.toward_hub.len(), 1);
    }

    #[test]
    fn platform_assignments_partition() {
        let rules = DirectionRules::new("Perth")
            .with_platform("1", Direction::TowardHub)
            .with_platform("2", Direction::AwayFromHub);

        let raws = vec![
            // Platform says away even though the destination mentions Perth.
            RawDeparture::new("East Perth", "2 min").with_platform("2"),
            RawDeparture::new("Armadale", "4 min").with_platform("1"),
        ];

        let board = classify_and_rank(&raws, at(12, 0), &rules, DEFAULT_LIMIT);

        assert_eq!(board.toward_hub.len(), 1);
        assert_eq!(board.toward_hub[0].destination, "Armadale");
        assert_eq!(board.away_from_hub.len(), 1);
        assert_eq!(board.away_from_hub[0].destination, "East Perth");
    }

    #[test]
    fn idempotent_for_identical_input() {
        let raws = vec![
            RawDeparture::new("Perth", "10:45"),
            RawDeparture::new("Armadale", "3 min"),
            RawDeparture::new("", "1 min"),
        ];
        let now = at(10, 40);

        let first = classify_and_rank(&raws, now, &rules(), DEFAULT_LIMIT);
        let second = classify_and_rank(&raws, now, &rules(), DEFAULT_LIMIT);

        assert_eq!(first.toward_hub, second.toward_hub);
        assert_eq!(first.away_from_hub, second.away_from_hub);
        assert_eq!(first.dropped, second.dropped);
    }

    #[test]
    fn empty_input_yields_empty_board() {
        let board = classify_and_rank(&[], at(12, 0), &rules(), DEFAULT_LIMIT);
        assert!(board.toward_hub.is_empty());
        assert!(board.away_from_hub.is_empty());
        assert_eq!(board.dropped.total(), 0);
    }

    #[test]
    fn zero_limit_truncates_everything() {
        let raws = vec![RawDeparture::new("Perth", "1 min")];
        let board = classify_and_rank(&raws, at(12, 0), &rules(), 0);
        assert!(board.toward_hub.is_empty());
        // The record was usable, just truncated.
        assert_eq!(board.dropped.total(), 0);
    }
}
