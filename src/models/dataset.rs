//! Loaded dataset handle.
//!
//! This module defines the StaffingDataset type, the explicit immutable
//! handle that replaces the dashboard's old framework-managed session
//! globals: it is constructed once at load time and passed (or shared via
//! `Arc`) to anything that needs the data.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Metadata describing a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Human-readable name of the dataset (e.g. "demo").
    pub name: String,
    /// The reporting period the dataset covers (e.g. "2026-W06..2026-W08").
    pub reporting_period: String,
}

/// The full collection of shift records for a reporting period.
///
/// Read-only after construction. The distinct-value accessors exist for
/// the presentation layer's filter widgets, which need the available
/// locations, departments, weeks and dates to offer as options.
#[derive(Debug, Clone)]
pub struct StaffingDataset {
    metadata: DatasetMetadata,
    records: Vec<ShiftRecord>,
}

impl StaffingDataset {
    /// Creates a dataset from its metadata and records.
    pub fn new(metadata: DatasetMetadata, records: Vec<ShiftRecord>) -> Self {
        Self { metadata, records }
    }

    /// Returns the dataset metadata.
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    /// Returns all shift records.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Returns the distinct locations in the dataset, sorted.
    pub fn locations(&self) -> Vec<String> {
        self.distinct(|r| r.location.clone())
    }

    /// Returns the distinct departments in the dataset, sorted.
    pub fn departments(&self) -> Vec<String> {
        self.distinct(|r| r.department.clone())
    }

    /// Returns the distinct week labels in the dataset, sorted.
    pub fn weeks(&self) -> Vec<String> {
        self.distinct(|r| r.week.clone())
    }

    /// Returns the distinct shift dates in the dataset, sorted.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn distinct<F>(&self, key: F) -> Vec<String>
    where
        F: Fn(&ShiftRecord) -> String,
    {
        self.records
            .iter()
            .map(key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
