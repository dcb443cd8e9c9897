//! Attendance-weighted expected headcount.
//!
//! This module computes the forecast behind the "Expected HC" number: the
//! scheduled headcount per worker category, discounted by that category's
//! attendance assumption.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::WorkerCategory;

/// Computes expected headcount by weighting scheduled headcount with
/// per-category attendance rates.
///
/// For each scheduled category the contribution is
/// `trunc(headcount * rate / 100)`: the fractional worker is dropped, not
/// rounded, and the truncated per-category values are then summed. This is
/// the one rounding rule in the engine and it is applied uniformly to
/// every category. (The original dashboards mixed truncation with
/// hardcoded totals that matched no formula; those stored totals are not
/// reproduced here.)
///
/// A scheduled category with no attendance entry counts at 100%.
///
/// # Examples
///
/// ```
/// use staffing_engine::aggregation::attendance_weighted_expected;
/// use staffing_engine::models::WorkerCategory;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let headcount = BTreeMap::from([(WorkerCategory::Fte, 22)]);
/// let attendance = BTreeMap::from([(WorkerCategory::Fte, Decimal::from(85))]);
///
/// // 22 * 0.85 = 18.7, truncated to 18
/// assert_eq!(attendance_weighted_expected(&headcount, &attendance), 18);
/// ```
pub fn attendance_weighted_expected(
    headcount: &BTreeMap<WorkerCategory, u32>,
    attendance: &BTreeMap<WorkerCategory, Decimal>,
) -> u32 {
    headcount
        .iter()
        .map(|(category, &scheduled)| {
            let rate = attendance
                .get(category)
                .copied()
                .unwrap_or(Decimal::ONE_HUNDRED);
            let weighted = Decimal::from(scheduled) * rate / Decimal::ONE_HUNDRED;
            // Counts are non-negative, so truncation toward zero is a floor.
            weighted.trunc().to_u32().unwrap_or(0)
        })
        .sum()
}
