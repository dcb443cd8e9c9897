//! Filter selection model.
//!
//! This module defines the Selection value object that callers thread
//! through filter and aggregate calls in place of the ambient session
//! state the dashboard previously relied on.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The filters a caller has picked in the dashboard sidebar.
///
/// Location, department and week match records by exact equality; dates
/// and shift numbers match by set membership. A `Selection` is a plain
/// value object: it is never mutated by the engine, and an empty date or
/// shift set simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected site.
    pub location: String,
    /// The selected department.
    pub department: String,
    /// The selected ISO week label.
    pub week: String,
    /// The selected dates within the week.
    pub dates: BTreeSet<NaiveDate>,
    /// The selected shift numbers.
    pub shifts: BTreeSet<u8>,
}

impl Selection {
    /// Returns true if the given record key matches this selection.
    pub fn matches(
        &self,
        location: &str,
        department: &str,
        week: &str,
        date: NaiveDate,
        shift: u8,
    ) -> bool {
        self.location == location
            && self.department == department
            && self.week == week
            && self.dates.contains(&date)
            && self.shifts.contains(&shift)
    }
}
