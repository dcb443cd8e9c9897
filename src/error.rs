//! Error types for the Staffing Metrics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading and serving
//! staffing data.
//!
//! Note that a filter selection matching zero records is *not* an error
//! anywhere in this crate: it yields empty results that the caller renders
//! as a "no data" state.

use thiserror::Error;

/// The main error type for the Staffing Metrics Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::DatasetNotFound {
///     path: "/missing/dataset.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset file not found: /missing/dataset.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record contained invalid data (e.g. an attendance rate
    /// outside the 0-100 range).
    #[error("Invalid shift record for {location}/{department} {date} shift {shift}: {message}")]
    InvalidRecord {
        /// The record's location.
        location: String,
        /// The record's department.
        department: String,
        /// The record's date, formatted as YYYY-MM-DD.
        date: String,
        /// The record's shift number.
        shift: u8,
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_not_found_displays_path() {
        let error = EngineError::DatasetNotFound {
            path: "/missing/dataset.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Dataset file not found: /missing/dataset.yaml"
        );
    }

    #[test]
    fn test_dataset_parse_error_displays_path_and_message() {
        let error = EngineError::DatasetParseError {
            path: "/data/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse dataset file '/data/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_record_displays_key_and_message() {
        let error = EngineError::InvalidRecord {
            location: "AZ Goodyear".to_string(),
            department: "Kitchen".to_string(),
            date: "2026-02-12".to_string(),
            shift: 1,
            message: "attendance rate 120 exceeds 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift record for AZ Goodyear/Kitchen 2026-02-12 shift 1: \
             attendance rate 120 exceeds 100"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_dataset_not_found() -> EngineResult<()> {
            Err(EngineError::DatasetNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_dataset_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
