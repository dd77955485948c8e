//! `phillips-curve` library crate.
//!
//! The binary (`phillips`) is a thin wrapper around this library so that:
//!
//! - the fetch → merge → fit pipeline is testable without the network
//! - the dashboard and the one-shot CLI share the same chart builder

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
