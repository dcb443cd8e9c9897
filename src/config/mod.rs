//! Dataset loading for the Staffing Metrics Engine.
//!
//! This module provides the types and loader for reading a staffing
//! dataset from a directory of YAML files.

mod loader;
mod types;

pub use loader::DatasetLoader;
pub use types::{RecordEntry, WeekFile};
