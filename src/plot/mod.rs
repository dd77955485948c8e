//! Text rendering of charts for non-interactive output.

pub mod ascii;

pub use ascii::render_ascii_chart;
