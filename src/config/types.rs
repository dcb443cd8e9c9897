//! Dataset file types.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from YAML dataset files before being turned into domain
//! models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ShiftRecord, WorkerCategory};

/// One week's worth of shift records, as stored in a `records/*.yaml` file.
///
/// The week label lives once at the top of the file rather than being
/// repeated on every record.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekFile {
    /// The ISO week label every record in this file belongs to.
    pub week: String,
    /// The shift records for the week.
    pub records: Vec<RecordEntry>,
}

/// A single shift record as stored on disk, without its week label.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEntry {
    /// The site this shift belongs to.
    pub location: String,
    /// The department within the site.
    pub department: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The shift number within the day.
    pub shift: u8,
    /// Target headcount for the shift.
    pub needed: u32,
    /// Forecasted headcount for the shift.
    pub expected: u32,
    /// Recorded clock-in punches for the shift.
    pub punches: u32,
    /// Scheduled headcount per worker category.
    #[serde(default)]
    pub headcount: BTreeMap<WorkerCategory, u32>,
    /// Attendance assumption per worker category, percent in [0, 100].
    #[serde(default)]
    pub attendance: BTreeMap<WorkerCategory, Decimal>,
}

impl RecordEntry {
    /// Attaches the file-level week label to produce a domain record.
    pub fn into_record(self, week: &str) -> ShiftRecord {
        ShiftRecord {
            location: self.location,
            department: self.department,
            week: week.to_string(),
            date: self.date,
            shift: self.shift,
            needed: self.needed,
            expected: self.expected,
            punches: self.punches,
            headcount: self.headcount,
            attendance: self.attendance,
        }
    }
}
