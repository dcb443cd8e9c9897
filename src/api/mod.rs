//! HTTP API module for the Staffing Metrics Engine.
//!
//! This module provides the REST API endpoints a dashboard client uses to
//! fetch filtered staffing metrics and the filter dimensions to offer in
//! its widgets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::MetricsRequest;
pub use response::{ApiError, BreakdownSet, DimensionsResponse, MetricsResponse};
pub use state::AppState;
