//! Departure countdown parsing.
//!
//! The provider displays departure times in several shapes: a countdown
//! ("5 min", "12min"), an imminence marker ("Now", "Due"), or a wall-clock
//! time ("10:45"). This module normalizes all of them into whole minutes
//! from a reference instant, handling clock times that have already passed
//! today by rolling over to tomorrow.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Error returned when a time display string matches no recognized format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized time display: {reason}")]
pub struct CountdownError {
    reason: &'static str,
}

impl CountdownError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Convert a raw time display string into whole minutes from `now`.
///
/// Formats are tried in this order, first match wins:
///
/// 1. Strings containing "now" or "due" (case-insensitive) mean the train
///    is at the platform: `0`.
/// 2. A wall-clock time `H:MM` or `HH:MM` is interpreted as today; if it
///    has already passed it means tomorrow. The result is the difference
///    to `now` in whole minutes, rounded down, never negative.
/// 3. A bare run of decimal digits is already a countdown ("5 min" is 5).
///
/// The clock check runs before digit extraction, so "10:45" is a departure
/// at quarter to eleven, never a 10-minute countdown.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use departure_server::domain::minutes_until;
///
/// let now = NaiveDate::from_ymd_opt(2025, 8, 4)
///     .unwrap()
///     .and_hms_opt(10, 40, 0)
///     .unwrap();
///
/// assert_eq!(minutes_until("Now", now), Ok(0));
/// assert_eq!(minutes_until("5 min", now), Ok(5));
/// assert_eq!(minutes_until("10:45", now), Ok(5));
/// assert!(minutes_until("cancelled", now).is_err());
/// ```
pub fn minutes_until(display: &str, now: NaiveDateTime) -> Result<u32, CountdownError> {
    let text = display.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(CountdownError::new("empty string"));
    }

    if text.contains("now") || text.contains("due") {
        return Ok(0);
    }

    if let Some((hour, minute)) = find_clock_time(text.as_bytes()) {
        return Ok(clock_minutes_from(hour, minute, now));
    }

    if let Some(run) = find_digit_run(&text) {
        return run
            .parse::<u32>()
            .map_err(|_| CountdownError::new("countdown out of range"));
    }

    Err(CountdownError::new(
        "no countdown, clock time, or due marker",
    ))
}

/// Find the first valid `H:MM` / `HH:MM` wall-clock time in `bytes`.
///
/// A colon only counts when preceded by one or two digits and followed by
/// two digits, and the resulting hour/minute are in range. Out-of-range
/// pairs like "25:99" are not clock times and the scan continues.
fn find_clock_time(bytes: &[u8]) -> Option<(u32, u32)> {
    for (i, &b) in bytes.iter().enumerate() {
        if b != b':' {
            continue;
        }

        let Some(minute) = two_digits_at(bytes, i + 1) else {
            continue;
        };

        let hour = if i >= 2 && bytes[i - 2].is_ascii_digit() && bytes[i - 1].is_ascii_digit() {
            digit(bytes[i - 2]) * 10 + digit(bytes[i - 1])
        } else if i >= 1 && bytes[i - 1].is_ascii_digit() {
            digit(bytes[i - 1])
        } else {
            continue;
        };

        if hour <= 23 && minute <= 59 {
            return Some((hour, minute));
        }
    }
    None
}

/// Minutes from `now` until the next occurrence of `hour:minute`.
///
/// Comparison happens at whole-minute precision, so a departure in the
/// current minute is 0 rather than 23h59m away.
fn clock_minutes_from(hour: u32, minute: u32, now: NaiveDateTime) -> u32 {
    let now = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    // hour/minute are validated by find_clock_time, so and_hms_opt is Some
    let mut departure = now.date().and_hms_opt(hour, minute, 0).unwrap_or(now);
    if departure < now {
        departure += Duration::days(1);
    }

    departure.signed_duration_since(now).num_minutes().max(0) as u32
}

/// The first contiguous run of ASCII digits in `text`, if any.
fn find_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Parse two ASCII digit bytes starting at `at` into a u32.
fn two_digits_at(bytes: &[u8], at: usize) -> Option<u32> {
    let hi = *bytes.get(at)?;
    let lo = *bytes.get(at + 1)?;
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some(digit(hi) * 10 + digit(lo))
    } else {
        None
    }
}

fn digit(b: u8) -> u32 {
    (b - b'0') as u32
}
