//! Application state for the Staffing Metrics Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::StaffingDataset;

/// Shared application state.
///
/// Contains the loaded dataset, shared read-only across all request
/// handlers. The dataset is never mutated after load, so no
/// synchronization beyond the `Arc` is needed.
#[derive(Clone)]
pub struct AppState {
    /// The loaded staffing dataset.
    dataset: Arc<StaffingDataset>,
}

impl AppState {
    /// Creates a new application state with the given dataset.
    pub fn new(dataset: StaffingDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Returns a reference to the dataset.
    pub fn dataset(&self) -> &StaffingDataset {
        &self.dataset
    }
}
