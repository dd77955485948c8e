//! Phillips curve chart assembly.
//!
//! Given a merged unemployment/inflation table:
//! - clean it (see [`clean`])
//! - fit `inflation ≈ a·u² + b·u + c` by least squares
//! - sample the fit at [`TREND_SAMPLES`] evenly spaced unemployment values
//!   spanning the observed range
//! - package scatter + trend into a [`ChartSpec`]

use tracing::debug;

use crate::domain::{ChartSpec, Indicator, MergedObservation, Observation, Quadratic, ScatterPoint, TrendPoint};
use crate::fit::{CurveError, clean};
use crate::math::{linspace, polyfit};

/// Number of points the trend line is sampled at.
pub const TREND_SAMPLES: usize = 100;

/// Fewest cleaned rows a degree-2 fit is attempted on.
pub const MIN_FIT_POINTS: usize = 3;

pub const TREND_NAME: &str = "Tendency";

/// Build the chart for one country from its merged table.
pub fn build(observations: &[MergedObservation], country: &str) -> Result<ChartSpec, CurveError> {
    let cleaned = clean(observations);
    debug!(
        country,
        rows = observations.len(),
        kept = cleaned.len(),
        "cleaned observations"
    );
    build_from_clean(&cleaned, country)
}

/// Build the chart from rows that are already numeric.
pub fn build_from_clean(cleaned: &[Observation], country: &str) -> Result<ChartSpec, CurveError> {
    let coefficients = fit_trend(cleaned)?;
    debug!(
        country,
        a = coefficients.a,
        b = coefficients.b,
        c = coefficients.c,
        "fitted trend"
    );

    let (x_min, x_max) = unemployment_range(cleaned).ok_or(CurveError::InsufficientData {
        found: 0,
        required: MIN_FIT_POINTS,
    })?;

    let trend = linspace(x_min, x_max, TREND_SAMPLES)
        .into_iter()
        .map(|x| TrendPoint {
            x,
            y: coefficients.eval(x),
        })
        .collect();

    let scatter = cleaned
        .iter()
        .map(|obs| ScatterPoint {
            x: obs.unemployment_rate,
            y: obs.inflation_rate,
            label: obs.period.clone(),
        })
        .collect();

    Ok(ChartSpec {
        title: format!("Phillips Curve for {country}"),
        x_label: Indicator::Unemployment.axis_label().to_string(),
        y_label: Indicator::Inflation.axis_label().to_string(),
        trend_name: TREND_NAME.to_string(),
        scatter,
        trend,
        coefficients,
    })
}

/// Degree-2 least-squares fit of inflation on unemployment.
pub fn fit_trend(cleaned: &[Observation]) -> Result<Quadratic, CurveError> {
    if cleaned.len() < MIN_FIT_POINTS {
        return Err(CurveError::InsufficientData {
            found: cleaned.len(),
            required: MIN_FIT_POINTS,
        });
    }

    let xs: Vec<f64> = cleaned.iter().map(|o| o.unemployment_rate).collect();
    let ys: Vec<f64> = cleaned.iter().map(|o| o.inflation_rate).collect();

    match polyfit(&xs, &ys, 2).as_deref() {
        Some(&[a, b, c]) => Ok(Quadratic { a, b, c }),
        _ => Err(CurveError::DegenerateFit),
    }
}

fn unemployment_range(cleaned: &[Observation]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for obs in cleaned {
        lo = lo.min(obs.unemployment_rate);
        hi = hi.max(obs.unemployment_rate);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> Vec<MergedObservation> {
        vec![
            MergedObservation::new("2018", 5.0, 3.0),
            MergedObservation::new("2019", 6.0, 2.5),
            MergedObservation::new("2020", 7.0, 2.0),
            MergedObservation::new("2021", 8.0, 1.8),
        ]
    }

    #[test]
    fn builds_france_chart() {
        let chart = build(&france(), "France").unwrap();
        assert_eq!(chart.title, "Phillips Curve for France");
        assert_eq!(chart.x_label, "Unemployment Rate (%)");
        assert_eq!(chart.y_label, "Inflation Rate (%)");
        assert_eq!(chart.trend_name, "Tendency");
        assert_eq!(chart.scatter.len(), 4);
        assert_eq!(chart.trend.len(), TREND_SAMPLES);
        assert_eq!(chart.trend[0].x, 5.0);
        assert_eq!(chart.trend[TREND_SAMPLES - 1].x, 8.0);
        assert_eq!(chart.scatter[2].label, "2020");
        assert_eq!((chart.scatter[2].x, chart.scatter[2].y), (7.0, 2.0));
    }

    #[test]
    fn trend_follows_the_fitted_polynomial() {
        let chart = build(&france(), "France").unwrap();
        for p in &chart.trend {
            assert!((p.y - chart.coefficients.eval(p.x)).abs() < 1e-12);
        }
        // Least-squares residuals sum to zero when an intercept is fitted.
        let resid: f64 = chart
            .scatter
            .iter()
            .map(|p| p.y - chart.coefficients.eval(p.x))
            .sum();
        assert!(resid.abs() < 1e-9, "residual sum {resid}");
    }

    #[test]
    fn recovers_known_quadratic() {
        let rows: Vec<MergedObservation> = (0..10)
            .map(|i| {
                let x = 1.0 + i as f64;
                MergedObservation::new(format!("{}", 2000 + i), x, 2.0 * x * x - 3.0 * x + 1.0)
            })
            .collect();
        let chart = build(&rows, "Japan").unwrap();
        let q = chart.coefficients;
        assert!((q.a - 2.0).abs() < 1e-6, "a = {}", q.a);
        assert!((q.b + 3.0).abs() < 1e-6, "b = {}", q.b);
        assert!((q.c - 1.0).abs() < 1e-6, "c = {}", q.c);
    }

    #[test]
    fn too_few_clean_rows_is_an_error() {
        let rows = vec![
            MergedObservation::new("2018", 5.0, 3.0),
            MergedObservation::new("2019", "NA", 2.5),
            MergedObservation::new("2020", 7.0, 2.0),
        ];
        assert_eq!(
            build(&rows, "Argentina").unwrap_err(),
            CurveError::InsufficientData { found: 2, required: 3 }
        );
        assert_eq!(
            build(&[], "Argentina").unwrap_err(),
            CurveError::InsufficientData { found: 0, required: 3 }
        );
    }

    #[test]
    fn dropped_rows_do_not_reach_the_scatter() {
        let mut rows = france();
        rows.push(MergedObservation::new("2022", "", 5.2));
        let chart = build(&rows, "France").unwrap();
        assert_eq!(chart.scatter.len(), 4);
        assert!(chart.scatter.iter().all(|p| p.label != "2022"));
    }

    #[test]
    fn identical_unemployment_values_still_produce_a_flat_range() {
        let rows = vec![
            MergedObservation::new("2018", 4.0, 1.0),
            MergedObservation::new("2019", 4.0, 2.0),
            MergedObservation::new("2020", 4.0, 3.0),
        ];
        let chart = build(&rows, "Japan").unwrap();
        assert_eq!(chart.trend.len(), TREND_SAMPLES);
        assert!(chart.trend.iter().all(|p| p.x == 4.0));
        assert!(chart.trend.iter().all(|p| p.y.is_finite()));
    }
}
