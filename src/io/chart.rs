//! Read/write chart JSON files.
//!
//! A chart file is the portable form of one rendered Phillips curve: the full
//! `ChartSpec` (scatter, sampled trend, coefficients) plus a generation
//! timestamp, enough for `phillips plot` to redraw it without the network.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{ChartFile, ChartSpec};
use crate::error::AppError;

/// Write a chart JSON file.
pub fn write_chart_json(path: &Path, chart: &ChartSpec) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create chart JSON '{}': {e}", path.display())))?;

    let doc = ChartFile {
        tool: "phillips".to_string(),
        generated_at: Utc::now(),
        chart: chart.clone(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(2, format!("Failed to write chart JSON: {e}")))?;

    Ok(())
}

/// Read a chart JSON file.
pub fn read_chart_json(path: &Path) -> Result<ChartFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open chart JSON '{}': {e}", path.display())))?;
    let doc: ChartFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid chart JSON: {e}")))?;
    Ok(doc)
}
