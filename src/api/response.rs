//! Response types for the Staffing Metrics Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregation::ShiftBreakdown;
use crate::error::EngineError;
use crate::models::{AggregateMetrics, Selection, ShiftRecord};

/// Response body for the `/metrics` endpoint.
///
/// A selection that matched nothing is still a 200 response with empty
/// records and zero metrics; the client renders that as its "no data"
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// The selection the metrics were computed for, echoed back.
    pub selection: Selection,
    /// The matched shift records.
    pub records: Vec<ShiftRecord>,
    /// Aggregate totals over the matched records.
    pub metrics: AggregateMetrics,
    /// Per-day, per-shift values for each metric.
    pub breakdowns: BreakdownSet,
}

/// Day-by-day shift breakdowns for every metric, keyed by date then shift
/// number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakdownSet {
    /// Needed headcount per (date, shift).
    pub needed: ShiftBreakdown,
    /// Expected headcount per (date, shift).
    pub expected: ShiftBreakdown,
    /// Gap per (date, shift), derived per record.
    pub gap: ShiftBreakdown,
    /// Punches per (date, shift).
    pub punches: ShiftBreakdown,
}

/// Response body for the `/dimensions` endpoint.
///
/// The distinct values a dashboard offers in its filter widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionsResponse {
    /// Distinct locations, sorted.
    pub locations: Vec<String>,
    /// Distinct departments, sorted.
    pub departments: Vec<String>,
    /// Distinct week labels, sorted.
    pub weeks: Vec<String>,
    /// Distinct shift dates, sorted.
    pub dates: Vec<NaiveDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // All engine errors are dataset-level faults; selections that match
        // nothing never reach this path.
        match error {
            EngineError::DatasetNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset error",
                    format!("Dataset file not found: {}", path),
                ),
            },
            EngineError::DatasetParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRecord { message, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    "Dataset contains an invalid record",
                    message,
                ),
            },
        }
    }
}
