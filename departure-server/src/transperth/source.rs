//! Departure source dispatch.

use crate::domain::RawDeparture;

use super::client::TransperthClient;
use super::error::SourceError;
use super::mock::MockSource;

/// Where departure records come from.
///
/// The web layer only sees this enum, so handlers are oblivious to whether
/// records are scraped, fetched from the JSON API, or read from fixtures.
pub enum DepartureSource {
    /// Live fetch from the provider.
    Live(TransperthClient),
    /// Fixture-backed source for development and tests.
    Mock(MockSource),
}

impl DepartureSource {
    /// Fetch the current raw departure records.
    pub async fn fetch(&self) -> Result<Vec<RawDeparture>, SourceError> {
        match self {
            DepartureSource::Live(client) => client.fetch_departures().await,
            DepartureSource::Mock(mock) => Ok(mock.fetch_departures()),
        }
    }
}
