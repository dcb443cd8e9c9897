//! Staffing Metrics Engine
//!
//! This crate provides the data layer behind a multi-location workforce
//! dashboard: filtering shift-level staffing records and computing headcount
//! metrics (needed, expected, gap, punches) for a presentation layer to render.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
