//! Aggregate metrics and metric selection.
//!
//! This module defines the derived metric totals displayed in the
//! dashboard's overview pills, and the MetricKind enum a caller uses to
//! pick which metric a shift breakdown reports.

use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Rolled-up staffing totals over a set of matched shift records.
///
/// These values are always derived fresh from the matched records and
/// discarded after rendering; nothing stores them. `gap_total` in
/// particular is never read from the data: it is recomputed here as
/// `expected_total - needed_total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Sum of needed headcount across matched shifts.
    pub needed_total: u32,
    /// Sum of expected headcount across matched shifts.
    pub expected_total: u32,
    /// Expected minus needed; negative means understaffed.
    pub gap_total: i64,
    /// Sum of clock-in punches across matched shifts.
    pub punches_total: u32,
}

/// Identifies one of the per-shift metrics for a breakdown view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Needed headcount.
    Needed,
    /// Expected headcount.
    Expected,
    /// Gap (expected minus needed), derived per record.
    Gap,
    /// Clock-in punches.
    Punches,
}

impl MetricKind {
    /// Returns this metric's value for a single record.
    pub fn value_of(self, record: &ShiftRecord) -> i64 {
        match self {
            MetricKind::Needed => i64::from(record.needed),
            MetricKind::Expected => i64::from(record.expected),
            MetricKind::Gap => record.gap(),
            MetricKind::Punches => i64::from(record.punches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn make_record(needed: u32, expected: u32, punches: u32) -> ShiftRecord {
        ShiftRecord {
            location: "AZ Goodyear".to_string(),
            department: "Kitchen".to_string(),
            week: "2026-W08".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            shift: 1,
            needed,
            expected,
            punches,
            headcount: BTreeMap::new(),
            attendance: BTreeMap::new(),
        }
    }

    #[test]
    fn test_default_metrics_are_all_zero() {
        let metrics = AggregateMetrics::default();
        assert_eq!(metrics.needed_total, 0);
        assert_eq!(metrics.expected_total, 0);
        assert_eq!(metrics.gap_total, 0);
        assert_eq!(metrics.punches_total, 0);
    }

    #[test]
    fn test_metric_kind_reads_record_fields() {
        let record = make_record(35, 26, 28);
        assert_eq!(MetricKind::Needed.value_of(&record), 35);
        assert_eq!(MetricKind::Expected.value_of(&record), 26);
        assert_eq!(MetricKind::Gap.value_of(&record), -9);
        assert_eq!(MetricKind::Punches.value_of(&record), 28);
    }

    #[test]
    fn test_metric_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&MetricKind::Needed).unwrap(),
            "\"needed\""
        );
        assert_eq!(serde_json::to_string(&MetricKind::Gap).unwrap(), "\"gap\"");
    }

    #[test]
    fn test_metrics_serialization_round_trip() {
        let metrics = AggregateMetrics {
            needed_total: 68,
            expected_total: 51,
            gap_total: -17,
            punches_total: 54,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let deserialized: AggregateMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics, deserialized);
    }
}
