//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::Departure;

/// Successful departures payload.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// Always `true` for this shape.
    pub success: bool,

    /// Hub-bound departures, soonest first.
    pub perth: Vec<Departure>,

    /// Outbound departures, soonest first.
    pub south: Vec<Departure>,

    /// When the response was computed (RFC 3339).
    pub last_updated: String,
}

/// Failure payload, paired with a non-2xx status.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    /// Always `false` for this shape.
    pub success: bool,

    /// Human-readable cause.
    pub error: String,
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed "healthy" marker.
    pub status: &'static str,

    /// When the check ran (RFC 3339).
    pub timestamp: String,
}
