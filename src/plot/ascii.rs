//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - trend line: `-`

use crate::domain::ChartSpec;

/// Render a chart's scatter and trend into a `width × height` character grid.
pub fn render_ascii_chart(chart: &ChartSpec, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = chart.x_range().map(widen).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = chart.y_range().map(widen).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the trend first so points overlay it.
    let trend = chart.trend_xy();
    draw_curve(&mut grid, &trend, (x_min, x_max), (y_min, y_max));

    for p in &chart.scatter {
        let x = map_x(p.x, x_min, x_max, width);
        let y = map_y(p.y, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: unemployment=[{x_min:.2}, {x_max:.2}]% | inflation=[{y_min:.2}, {y_max:.2}]%\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Give a zero-width range some room so mapping stays defined.
fn widen((min, max): (f64, f64)) -> (f64, f64) {
    if max > min { (min, max) } else { (min - 0.5, max + 0.5) }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quadratic, ScatterPoint, TrendPoint};

    #[test]
    fn plot_golden_snapshot_small() {
        let chart = ChartSpec {
            title: "Phillips Curve for Test".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            trend_name: "Tendency".to_string(),
            scatter: vec![
                ScatterPoint { x: 0.0, y: 0.0, label: "2000".to_string() },
                ScatterPoint { x: 10.0, y: 10.0, label: "2001".to_string() },
            ],
            trend: vec![TrendPoint { x: 0.0, y: 5.0 }, TrendPoint { x: 10.0, y: 5.0 }],
            coefficients: Quadratic { a: 0.0, b: 0.0, c: 5.0 },
        };

        let txt = render_ascii_chart(&chart, 10, 5);
        let expected = concat!(
            "Plot: unemployment=[0.00, 10.00]% | inflation=[-0.50, 10.50]%\n",
            "         o\n",
            "          \n",
            "----------\n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }
}
