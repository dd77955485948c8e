//! Formatted terminal output.
//!
//! We keep formatting code in one place so the fitting code stays clean and
//! output changes stay localized.

pub mod format;

pub use format::*;
