//! Core data models for the Staffing Metrics Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category;
mod dataset;
mod metrics;
mod record;
mod selection;

pub use category::WorkerCategory;
pub use dataset::{DatasetMetadata, StaffingDataset};
pub use metrics::{AggregateMetrics, MetricKind};
pub use record::ShiftRecord;
pub use selection::Selection;
