//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::board::classify_and_rank;
use crate::transperth::SourceError;

use super::dto::{DeparturesResponse, FailureResponse, HealthResponse};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/departures", get(departures))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Landing page describing the API.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        station: state.station.to_string(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
    })
}

/// Live departures split by direction.
async fn departures(State(state): State<AppState>) -> Result<Json<DeparturesResponse>, AppError> {
    let raws = state.source.fetch().await?;

    let now = Local::now().naive_local();
    let board = classify_and_rank(&raws, now, &state.rules, state.limit);

    if board.dropped.total() > 0 {
        tracing::info!(
            dropped = board.dropped.total(),
            empty_destination = board.dropped.empty_destination,
            empty_time_display = board.dropped.empty_time_display,
            unparseable_time = board.dropped.unparseable_time,
            "excluded unusable departure records"
        );
    }

    Ok(Json(DeparturesResponse {
        success: true,
        perth: board.toward_hub,
        south: board.away_from_hub,
        last_updated: Local::now().to_rfc3339(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The upstream source could not be reached at all.
    Upstream { message: String },
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(FailureResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}
