//! Domain types for the departures board.
//!
//! The countdown parser and direction rules are pure and side-effect free;
//! everything that touches the network or the clock lives elsewhere and
//! passes `now` in explicitly.

mod countdown;
mod departure;
mod direction;

pub use countdown::{CountdownError, minutes_until};
pub use departure::{DEFAULT_PATTERN, DEFAULT_STOPS, Departure, RawDeparture, UNKNOWN_PLATFORM};
pub use direction::{Direction, DirectionRules};
