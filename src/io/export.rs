//! Export a chart's observations to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ChartSpec;
use crate::error::AppError;

/// Write one row per scatter point with its fitted trend value and residual.
pub fn write_observations_csv(path: &Path, chart: &ChartSpec) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_observations(&mut file, chart)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display())))
}

fn write_observations<W: Write>(out: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    writeln!(out, "period,unemployment_rate,inflation_rate,trend,residual")?;
    for p in &chart.scatter {
        let fitted = chart.coefficients.eval(p.x);
        writeln!(
            out,
            "{},{:.4},{:.4},{:.4},{:.4}",
            p.label,
            p.x,
            p.y,
            fitted,
            p.y - fitted
        )?;
    }
    Ok(())
}
