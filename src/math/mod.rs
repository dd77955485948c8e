//! Mathematical utilities: least squares and polynomial helpers.

pub mod ols;
pub mod poly;

pub use ols::*;
pub use poly::*;
