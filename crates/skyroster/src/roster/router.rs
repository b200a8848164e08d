use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::{RepositoryError, RosterRepository};
use super::service::{RosterGenerationRequest, RosterService, RosterServiceError};

/// Router builder exposing HTTP endpoints for roster generation, retrieval,
/// and JSON export.
pub fn roster_router<R>(service: Arc<RosterService<R>>) -> Router
where
    R: RosterRepository + 'static,
{
    Router::new()
        .route("/api/v1/rosters", post(generate_handler::<R>))
        .route("/api/v1/rosters/:flight_number", get(fetch_handler::<R>))
        .route(
            "/api/v1/rosters/:flight_number/export",
            get(export_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    axum::Json(request): axum::Json<RosterGenerationRequest>,
) -> Response
where
    R: RosterRepository + 'static,
{
    match service.generate(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(
            error @ (RosterServiceError::UnknownAircraft(_)
            | RosterServiceError::Manifest(_)
            | RosterServiceError::Configuration(_)),
        ) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Path(flight_number): Path<String>,
) -> Response
where
    R: RosterRepository + 'static,
{
    match service.get(&flight_number) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(RosterServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("no roster stored for flight {flight_number}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Path(flight_number): Path<String>,
) -> Response
where
    R: RosterRepository + 'static,
{
    let record = match service.get(&flight_number) {
        Ok(record) => record,
        Err(RosterServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("no roster stored for flight {flight_number}"),
            });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    match serde_json::to_string_pretty(&record) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{flight_number}_roster.json\""),
                ),
            ],
            body,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
