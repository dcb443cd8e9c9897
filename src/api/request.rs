//! Request types for the Staffing Metrics Engine API.
//!
//! This module defines the JSON request structure for the `/metrics`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Selection;

/// Request body for the `/metrics` endpoint.
///
/// Mirrors the dashboard sidebar: one location, department and week, plus
/// any number of dates and shift numbers. Duplicate dates or shifts are
/// harmless; they collapse into the selection's sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// The selected site.
    pub location: String,
    /// The selected department.
    pub department: String,
    /// The selected ISO week label.
    pub week: String,
    /// The selected dates within the week.
    pub dates: Vec<NaiveDate>,
    /// The selected shift numbers.
    pub shifts: Vec<u8>,
}

impl From<MetricsRequest> for Selection {
    fn from(req: MetricsRequest) -> Self {
        Selection {
            location: req.location,
            department: req.department,
            week: req.week,
            dates: req.dates.into_iter().collect(),
            shifts: req.shifts.into_iter().collect(),
        }
    }
}
