//! Day-by-day shift breakdown.
//!
//! This module groups matched records into the per-day shift badges shown
//! under the overview pills: one value per (date, shift number) cell for a
//! chosen metric.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{MetricKind, ShiftRecord};

/// A chosen metric's values grouped by date, then by shift number.
///
/// `BTreeMap` keeps both levels sorted, so iteration order matches the
/// day-then-shift order the presentation layer renders in.
pub type ShiftBreakdown = BTreeMap<NaiveDate, BTreeMap<u8, i64>>;

/// Groups matched records by date and shift number, reporting one metric
/// per cell.
///
/// Gap cells are derived per record (`expected - needed`), consistent with
/// the aggregate totals. If the input holds more than one record for the
/// same (date, shift) cell -- which a well-formed dataset should not --
/// their values are summed rather than one silently winning.
///
/// An empty input yields an empty map, the "no data" display state.
///
/// # Examples
///
/// ```
/// use staffing_engine::aggregation::breakdown;
/// use staffing_engine::models::MetricKind;
///
/// assert!(breakdown(&[], MetricKind::Expected).is_empty());
/// ```
pub fn breakdown(records: &[&ShiftRecord], metric: MetricKind) -> ShiftBreakdown {
    let mut grouped: ShiftBreakdown = BTreeMap::new();
    for record in records {
        *grouped
            .entry(record.date)
            .or_default()
            .entry(record.shift)
            .or_insert(0) += metric.value_of(record);
    }
    grouped
}
