//! Plotters-powered scatter + line chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Dark blue for observed points.
pub const SCATTER_COLOR: RGBColor = RGBColor(0, 0, 139);
/// Deep pink for the trend line.
pub const TREND_COLOR: RGBColor = RGBColor(255, 20, 147);
/// Gold for the textbook curve.
pub const THEORY_COLOR: RGBColor = RGBColor(255, 215, 0);

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call.
pub struct PhillipsPlot<'a> {
    /// Line series (trend, or the textbook curve).
    pub line: &'a [(f64, f64)],
    /// Scatter series.
    pub points: &'a [(f64, f64)],
    pub line_color: RGBColor,
    pub point_color: RGBColor,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl<'a> Widget for PhillipsPlot<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.1}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            chart.draw_series(LineSeries::new(self.line.iter().copied(), &self.line_color))?;

            // `Circle` radii are mis-scaled by the ratatui backend; single
            // pixels read as clean dots in a terminal.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), self.point_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Bounds covering every point of every series, padded by 5% on y.
///
/// Degenerate ranges are widened by ±0.5 so the chart can still be built.
pub fn bounds<'s>(series: impl IntoIterator<Item = &'s [(f64, f64)]>) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for s in series {
        for &(x, y) in s {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !(x_min.is_finite() && x_max.is_finite()) {
        (x_min, x_max) = (0.0, 1.0);
    } else if x_max <= x_min {
        (x_min, x_max) = (x_min - 0.5, x_max + 0.5);
    }

    if !(y_min.is_finite() && y_max.is_finite()) {
        (y_min, y_max) = (0.0, 1.0);
    } else if y_max <= y_min {
        (y_min, y_max) = (y_min - 0.5, y_max + 0.5);
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    ([x_min, x_max], [y_min - pad, y_max + pad])
}
