//! Curve building.
//!
//! Responsibilities:
//!
//! - coerce merged rows to numbers and drop what doesn't parse (`clean`)
//! - fit the degree-2 trend and assemble the chart (`builder`)

use thiserror::Error;

pub mod builder;
pub mod clean;

pub use builder::*;
pub use clean::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("not enough data to fit a trend: {found} usable rows, need at least {required}")]
    InsufficientData { found: usize, required: usize },

    #[error("trend fit did not produce finite coefficients")]
    DegenerateFit,
}
