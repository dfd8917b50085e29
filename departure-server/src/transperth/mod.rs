//! Transperth live train times collaborator.
//!
//! Supplies the raw departure records the board is built from. Three ways
//! to acquire them, all producing the same [`crate::domain::RawDeparture`]
//! shape:
//!
//! - the internal JSON live-times API ([`FetchStrategy::Api`]),
//! - heuristic scraping of the public live-times page
//!   ([`FetchStrategy::Scrape`]), optionally retried once through a paid
//!   rendering proxy when the direct fetch is blocked,
//! - JSON fixtures on disk ([`MockSource`]), for development and tests.

mod client;
mod convert;
mod error;
mod mock;
mod proxy;
mod scrape;
mod source;
mod types;

pub use client::{FetchStrategy, LineFeed, TransperthClient, TransperthConfig, UnknownStrategy};
pub use convert::convert_live_times;
pub use error::SourceError;
pub use mock::MockSource;
pub use proxy::ProxyConfig;
pub use scrape::{FieldContract, FieldSelectors, scrape_departures};
pub use source::DepartureSource;
pub use types::{LiveTimesResponse, TripDto};
