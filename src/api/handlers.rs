//! HTTP request handlers for the Staffing Metrics Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{aggregate, breakdown, filter_records};
use crate::models::{MetricKind, Selection};

use super::request::MetricsRequest;
use super::response::{ApiError, BreakdownSet, DimensionsResponse, MetricsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(metrics_handler))
        .route("/dimensions", get(dimensions_handler))
        .with_state(state)
}

/// Handler for POST /metrics endpoint.
///
/// Accepts a filter selection and returns the matching records with their
/// aggregate metrics and per-shift breakdowns. An unmatched selection is a
/// 200 with empty results, not an error.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing metrics request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let selection: Selection = request.into();
    let matched = filter_records(state.dataset().records(), &selection);
    let metrics = aggregate(&matched);
    let breakdowns = BreakdownSet {
        needed: breakdown(&matched, MetricKind::Needed),
        expected: breakdown(&matched, MetricKind::Expected),
        gap: breakdown(&matched, MetricKind::Gap),
        punches: breakdown(&matched, MetricKind::Punches),
    };

    info!(
        correlation_id = %correlation_id,
        location = %selection.location,
        department = %selection.department,
        week = %selection.week,
        matched_records = matched.len(),
        gap_total = metrics.gap_total,
        "Metrics computed"
    );

    let response = MetricsResponse {
        records: matched.into_iter().cloned().collect(),
        selection,
        metrics,
        breakdowns,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /dimensions endpoint.
///
/// Returns the distinct locations, departments, weeks and dates of the
/// loaded dataset, for populating filter widgets.
async fn dimensions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset();
    let response = DimensionsResponse {
        locations: dataset.locations(),
        departments: dataset.departments(),
        weeks: dataset.weeks(),
        dates: dataset.dates(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
