//! Metric roll-up.
//!
//! This module computes the aggregate totals shown in the dashboard's
//! overview pills from a set of matched shift records.

use crate::models::{AggregateMetrics, ShiftRecord};

/// Rolls up needed, expected, gap and punches totals over matched records.
///
/// `gap_total` is always recomputed as `expected_total - needed_total`.
/// The source dashboards sometimes carried a stored gap alongside the
/// other fields and it drifted out of sync; here the gap has no storage to
/// drift in.
///
/// An empty input yields all-zero metrics, which is the valid "no data"
/// state for an unmatched selection.
///
/// # Examples
///
/// ```
/// use staffing_engine::aggregation::aggregate;
/// use staffing_engine::models::AggregateMetrics;
///
/// assert_eq!(aggregate(&[]), AggregateMetrics::default());
/// ```
pub fn aggregate(records: &[&ShiftRecord]) -> AggregateMetrics {
    let needed_total = records.iter().map(|r| r.needed).sum();
    let expected_total = records.iter().map(|r| r.expected).sum();
    let punches_total = records.iter().map(|r| r.punches).sum();

    AggregateMetrics {
        needed_total,
        expected_total,
        gap_total: i64::from(expected_total) - i64::from(needed_total),
        punches_total,
    }
}
