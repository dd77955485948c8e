//! Input/output helpers.
//!
//! - chart JSON read/write (`chart`)
//! - observation exports (CSV) (`export`)

pub mod chart;
pub mod export;

pub use chart::*;
pub use export::*;
