//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed country set and its series code table (`Country`, `SERIES_TABLE`)
//! - provider rows and joined observations (`SeriesRow`, `MergedObservation`)
//! - chart outputs (`ChartSpec`, `Quadratic`, etc.)

pub mod types;

pub use types::*;
