//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network_summary))
        .route("/stations", get(search_stations))
        .route("/route", get(find_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Counts of stations, lines and connections.
async fn network_summary(State(state): State<AppState>) -> Json<NetworkSummary> {
    let snapshot = state.current().await;
    Json(NetworkSummary::from_network(snapshot.network()))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = state.config.station_search_limit(req.limit);
    let snapshot = state.current().await;

    let stations = snapshot
        .network()
        .stations_matching(&req.q)
        .take(limit)
        .map(|(_, s)| StationResult::from_station(s))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Find the quickest route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = required("from", &req.from)?;
    let to = required("to", &req.to)?;

    let snapshot = state.current().await;
    let route = snapshot.finder().find(from, to)?;

    Ok(Json(RouteResponse::from_route(&route)))
}

/// Reject a blank query parameter.
fn required<'a>(param: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: format!("Missing {param} station"),
        });
    }
    Ok(value)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound { .. } | RouteError::Unreachable { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            RouteError::EmptyNetwork => AppError::Unavailable {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(status = status.as_u16(), %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
