//! Record filtering.
//!
//! This module provides the single entry point for subsetting the loaded
//! dataset by a caller's filter selection.

use crate::models::{Selection, ShiftRecord};

/// Returns every record matching the selection, in dataset order.
///
/// Location, department and week are matched by exact equality; the
/// record's date and shift number must be members of the selection's date
/// and shift sets. A selection matching nothing returns an empty vec --
/// never an error -- and the caller renders that as a "no data" state.
/// An empty date or shift set therefore matches nothing by construction.
///
/// The function borrows; it never clones records or mutates the selection,
/// so calling it twice with the same inputs returns the same subset.
///
/// # Examples
///
/// ```
/// use staffing_engine::aggregation::filter_records;
/// use staffing_engine::models::{Selection, ShiftRecord};
/// use chrono::NaiveDate;
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let records = vec![ShiftRecord {
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
/// }];
///
/// let selection = Selection {
///     location: "AZ Goodyear".to_string(),
///     department: "Kitchen".to_string(),
///     week: "2026-W08".to_string(),
///     dates: BTreeSet::from([NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()]),
///     shifts: BTreeSet::from([1, 2, 3]),
/// };
///
/// assert_eq!(filter_records(&records, &selection).len(), 1);
/// ```
pub fn filter_records<'a>(records: &'a [ShiftRecord], selection: &Selection) -> Vec<&'a ShiftRecord> {
    records
        .iter()
        .filter(|r| {
            selection.matches(&r.location, &r.department, &r.week, r.date, r.shift)
        })
        .collect()
}
