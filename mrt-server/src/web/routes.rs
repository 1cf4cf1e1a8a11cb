//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::stations::StationError;
use crate::upstream::Fetcher;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<F: Fetcher + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations::<F>))
        .route("/stations/:id", get(station_schedules::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations.
async fn list_stations<F: Fetcher>(
    State(state): State<AppState<F>>,
) -> Result<Json<ApiResponse<Vec<StationResult>>>, AppError> {
    let stations = state.stations.list_stations().await?;
    let results = stations.into_iter().map(StationResult::from).collect();

    Ok(Json(ApiResponse::success("Success get all stations", results)))
}

/// Upcoming departures from one station.
async fn station_schedules<F: Fetcher>(
    State(state): State<AppState<F>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ScheduleResult>>>, AppError> {
    let departures = state.stations.schedules_for_station(&id).await?;
    let results = departures.into_iter().map(ScheduleResult::from).collect();

    Ok(Json(ApiResponse::success(
        "Successfully get schedules by station",
        results,
    )))
}

/// Application error type.
///
/// Every failure, whatever its cause, is reported as 400 Bad Request with
/// the error text in the envelope's `message`.
#[derive(Debug)]
pub struct AppError {
    message: String,
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(message = %self.message, "request failed");

        let body = Json(ApiResponse::<()>::failure(self.message));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
