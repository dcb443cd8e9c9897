//! Worker category enum.
//!
//! This module defines the closed set of worker categories that scheduled
//! headcount and attendance assumptions are broken down by.

use serde::{Deserialize, Serialize};

/// A worker category that scheduled headcount is bucketed into.
///
/// The set is closed: every shift record reports its headcount and
/// attendance assumptions against these categories and no others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkerCategory {
    /// Full-time employees.
    #[serde(rename = "FTE")]
    Fte,
    /// Agency temporary workers.
    #[serde(rename = "TEMP")]
    Temp,
    /// Employees still inside their onboarding window.
    #[serde(rename = "NEW_HIRES")]
    NewHires,
    /// Day labor booked through the flex pool.
    #[serde(rename = "FLEX")]
    Flex,
    /// Day labor borrowed from warehouse/general-services crews.
    #[serde(rename = "WW_GS")]
    WwGs,
    /// Voluntary or mandatory overtime coverage.
    #[serde(rename = "OVERTIME")]
    Overtime,
    /// Approved paid time off (scheduled but not expected to work).
    #[serde(rename = "PTO")]
    Pto,
}

impl WorkerCategory {
    /// Returns every category in a fixed display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::WorkerCategory;
    ///
    /// assert_eq!(WorkerCategory::ALL.len(), 7);
    /// assert_eq!(WorkerCategory::ALL[0], WorkerCategory::Fte);
    /// ```
    pub const ALL: [WorkerCategory; 7] = [
        WorkerCategory::Fte,
        WorkerCategory::Temp,
        WorkerCategory::NewHires,
        WorkerCategory::Flex,
        WorkerCategory::WwGs,
        WorkerCategory::Overtime,
        WorkerCategory::Pto,
    ];
}
