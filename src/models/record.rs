//! Shift record model.
//!
//! This module defines the ShiftRecord struct, the immutable unit of
//! reference data that all filtering and aggregation operates over.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WorkerCategory;

/// One shift's staffing data for a (location, department, week, date, shift)
/// key.
///
/// Records are loaded wholesale at startup and never mutated. The staffing
/// gap is deliberately not a field: it is always recomputed as
/// `expected - needed` so a stale stored value can never disagree with the
/// totals it is displayed next to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The site this shift belongs to (e.g. "AZ Goodyear").
    pub location: String,
    /// The department within the site (e.g. "Kitchen").
    pub department: String,
    /// The ISO week label this shift is reported under (e.g. "2026-W08").
    pub week: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The shift number within the day (1st, 2nd, 3rd shift).
    pub shift: u8,
    /// Target headcount required to meet operational demand.
    pub needed: u32,
    /// Forecasted actual headcount for the shift.
    pub expected: u32,
    /// Count of actual clock-in events recorded for the shift.
    pub punches: u32,
    /// Scheduled headcount per worker category.
    #[serde(default)]
    pub headcount: BTreeMap<WorkerCategory, u32>,
    /// Attendance assumption per worker category, as a percentage in
    /// [0, 100].
    #[serde(default)]
    pub attendance: BTreeMap<WorkerCategory, Decimal>,
}

impl ShiftRecord {
    /// Returns the staffing gap for this shift.
    ///
    /// Negative means understaffed.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::ShiftRecord;
    /// use chrono::NaiveDate;
    /// use std::collections::BTreeMap;
    ///
    /// let record = ShiftRecord {
    ///     location: "AZ Goodyear".to_string(),
    ///     department: "Kitchen".to_string(),
    ///     week: "2026-W08".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
    ///     shift: 1,
    ///     needed: 35,
    ///     expected: 26,
    ///     punches: 28,
    ///     headcount: BTreeMap::new(),
    ///     attendance: BTreeMap::new(),
    /// };
    /// assert_eq!(record.gap(), -9);
    /// ```
    pub fn gap(&self) -> i64 {
        i64::from(self.expected) - i64::from(self.needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn kitchen_shift_1() -> ShiftRecord {
        let headcount = BTreeMap::from([
            (WorkerCategory::Fte, 22),
            (WorkerCategory::Temp, 12),
            (WorkerCategory::Flex, 2),
            (WorkerCategory::Overtime, 3),
            (WorkerCategory::Pto, 2),
        ]);
        let attendance = BTreeMap::from([
            (WorkerCategory::Fte, Decimal::from_str("85").unwrap()),
            (WorkerCategory::Temp, Decimal::from_str("75").unwrap()),
            (WorkerCategory::Flex, Decimal::from_str("50").unwrap()),
            (WorkerCategory::Overtime, Decimal::from_str("70").unwrap()),
            (WorkerCategory::Pto, Decimal::from_str("50").unwrap()),
        ]);
        ShiftRecord {
            location: "AZ Goodyear".to_string(),
            department: "Kitchen".to_string(),
            week: "2026-W08".to_string(),
            date: make_date("2026-02-12"),
            shift: 1,
            needed: 35,
            expected: 26,
            punches: 28,
            headcount,
            attendance,
        }
    }

    #[test]
    fn test_gap_is_expected_minus_needed() {
        let record = kitchen_shift_1();
        assert_eq!(record.gap(), -9);
    }

    #[test]
    fn test_gap_positive_when_overstaffed() {
        let mut record = kitchen_shift_1();
        record.expected = 40;
        assert_eq!(record.gap(), 5);
    }

    #[test]
    fn test_gap_zero_when_balanced() {
        let mut record = kitchen_shift_1();
        record.expected = record.needed;
        assert_eq!(record.gap(), 0);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = kitchen_shift_1();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_deserialization_defaults_empty_maps() {
        let json = r#"{
            "location": "IL Aurora",
            "department": "Shipping",
            "week": "2026-W08",
            "date": "2026-02-13",
            "shift": 2,
            "needed": 10,
            "expected": 9,
            "punches": 8
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert!(record.headcount.is_empty());
        assert!(record.attendance.is_empty());
        assert_eq!(record.gap(), -1);
    }
}
