//! Dataset loading functionality.
//!
//! This module provides the [`DatasetLoader`] type for loading a staffing
//! dataset from a directory of YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::warn;

use crate::aggregation::attendance_weighted_expected;
use crate::error::{EngineError, EngineResult};
use crate::models::{DatasetMetadata, ShiftRecord, StaffingDataset};

use super::types::WeekFile;

/// Loads a staffing dataset from a directory of YAML files.
///
/// # Directory Structure
///
/// The dataset directory should have the following structure:
/// ```text
/// data/demo/
/// ├── dataset.yaml       # Dataset metadata
/// └── records/
///     └── 2026-W08.yaml  # Shift records for one week
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::DatasetLoader;
///
/// let dataset = DatasetLoader::load("./data/demo").unwrap();
/// println!("Loaded {} records", dataset.records().len());
/// ```
#[derive(Debug)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads a dataset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the dataset directory (e.g., "./data/demo")
    ///
    /// # Returns
    ///
    /// Returns a [`StaffingDataset`] on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any record carries an attendance rate outside [0, 100]
    ///
    /// A record whose stored `expected` disagrees with the
    /// attendance-weighted value derived from its own schedule is accepted
    /// (the stored forecast is the value of record) but logged at WARN,
    /// since the upstream data was known to be inconsistent there.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<StaffingDataset> {
        let path = path.as_ref();

        // Load dataset.yaml
        let metadata_path = path.join("dataset.yaml");
        let metadata = Self::load_yaml::<DatasetMetadata>(&metadata_path)?;

        // Load all week files from the records directory
        let records_dir = path.join("records");
        let records = Self::load_records(&records_dir)?;

        for record in &records {
            Self::validate(record)?;
        }

        Ok(StaffingDataset::new(metadata, records))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::DatasetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all week files from the records directory.
    fn load_records(records_dir: &Path) -> EngineResult<Vec<ShiftRecord>> {
        let records_dir_str = records_dir.display().to_string();

        if !records_dir.exists() {
            return Err(EngineError::DatasetNotFound {
                path: records_dir_str,
            });
        }

        let entries = fs::read_dir(records_dir).map_err(|_| EngineError::DatasetNotFound {
            path: records_dir_str.clone(),
        })?;

        let mut records = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::DatasetNotFound {
                path: records_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let week_file = Self::load_yaml::<WeekFile>(&path)?;
                let week = week_file.week;
                records.extend(
                    week_file
                        .records
                        .into_iter()
                        .map(|entry| entry.into_record(&week)),
                );
            }
        }

        if records.is_empty() {
            return Err(EngineError::DatasetNotFound {
                path: format!("{} (no record files found)", records_dir_str),
            });
        }

        Ok(records)
    }

    /// Validates a single record, warning on forecast inconsistencies.
    fn validate(record: &ShiftRecord) -> EngineResult<()> {
        for (category, rate) in &record.attendance {
            if *rate < Decimal::ZERO || *rate > Decimal::ONE_HUNDRED {
                return Err(EngineError::InvalidRecord {
                    location: record.location.clone(),
                    department: record.department.clone(),
                    date: record.date.to_string(),
                    shift: record.shift,
                    message: format!(
                        "attendance rate {} for {:?} is outside [0, 100]",
                        rate, category
                    ),
                });
            }
        }

        if !record.headcount.is_empty() {
            let derived = attendance_weighted_expected(&record.headcount, &record.attendance);
            if derived != record.expected {
                warn!(
                    location = %record.location,
                    department = %record.department,
                    date = %record.date,
                    shift = record.shift,
                    stored_expected = record.expected,
                    derived_expected = derived,
                    "Stored expected headcount disagrees with attendance-weighted schedule"
                );
            }
        }

        Ok(())
    }
}
