//! Aggregation logic for the Staffing Metrics Engine.
//!
//! This module contains the pure functions behind every number on the
//! dashboard: filtering shift records against a selection, rolling up
//! needed/expected/gap/punches totals, weighting scheduled headcount by
//! attendance assumptions, and grouping per-shift values into day-by-day
//! breakdowns.

mod aggregate;
mod attendance;
mod breakdown;
mod filter;

pub use aggregate::aggregate;
pub use attendance::attendance_weighted_expected;
pub use breakdown::{ShiftBreakdown, breakdown};
pub use filter::filter_records;
