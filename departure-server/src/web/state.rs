//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::DirectionRules;
use crate::transperth::DepartureSource;

/// Shared application state.
///
/// Contains everything handlers need; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Where departure records come from.
    pub source: Arc<DepartureSource>,

    /// Direction classification rules.
    pub rules: Arc<DirectionRules>,

    /// Maximum departures per direction in a response.
    pub limit: usize,

    /// Station display name.
    pub station: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        source: DepartureSource,
        rules: DirectionRules,
        limit: usize,
        station: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            rules: Arc::new(rules),
            limit,
            station: station.into(),
        }
    }
}
