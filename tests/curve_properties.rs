//! Property tests for the curve builder.
//!
//! Uses proptest to verify:
//! 1. Trend sampling: 100 points, non-decreasing x, spanning exactly the observed range
//! 2. Least squares: residuals of the fitted trend sum to zero
//! 3. Too few usable rows always yields `InsufficientData`
//! 4. Cleaning is idempotent and never invents rows

use phillips_curve::domain::{MergedObservation, RawValue};
use phillips_curve::fit::{CurveError, MIN_FIT_POINTS, TREND_SAMPLES, build, clean};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_rate() -> impl Strategy<Value = f64> {
    (0.0..30.0_f64).prop_map(|r| (r * 100.0).round() / 100.0)
}

fn arb_inflation() -> impl Strategy<Value = f64> {
    (-5.0..50.0_f64).prop_map(|r| (r * 100.0).round() / 100.0)
}

fn arb_rows(min: usize, max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((arb_rate(), arb_inflation()), min..max)
}

fn arb_raw() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        arb_rate().prop_map(RawValue::Number),
        arb_rate().prop_map(|v| RawValue::Text(format!("{v}"))),
        Just(RawValue::Text("NA".into())),
        Just(RawValue::Missing),
    ]
}

fn merged(rows: &[(f64, f64)]) -> Vec<MergedObservation> {
    rows.iter()
        .enumerate()
        .map(|(i, &(u, p))| MergedObservation::new(format!("{}", 1990 + i), u, p))
        .collect()
}

// ── 1-2. Trend invariants ────────────────────────────────────────────

proptest! {
    #[test]
    fn trend_spans_observed_unemployment(rows in arb_rows(MIN_FIT_POINTS, 40)) {
        let chart = build(&merged(&rows), "France").unwrap();

        prop_assert_eq!(chart.trend.len(), TREND_SAMPLES);
        prop_assert_eq!(chart.scatter.len(), rows.len());

        let min = rows.iter().map(|r| r.0).fold(f64::INFINITY, f64::min);
        let max = rows.iter().map(|r| r.0).fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(chart.trend[0].x, min);
        prop_assert_eq!(chart.trend[TREND_SAMPLES - 1].x, max);
        prop_assert!(chart.trend.windows(2).all(|w| w[0].x <= w[1].x));
        prop_assert!(chart.trend.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn residuals_sum_to_zero(rows in arb_rows(MIN_FIT_POINTS, 40)) {
        let chart = build(&merged(&rows), "France").unwrap();
        let q = chart.coefficients;

        let sum: f64 = chart.scatter.iter().map(|p| p.y - q.eval(p.x)).sum();
        let scale = chart.scatter.iter().map(|p| p.y.abs()).fold(1.0, f64::max);
        prop_assert!(sum.abs() <= 1e-6 * scale * rows.len() as f64, "residual sum {}", sum);
    }
}

// ── 3. Insufficient data ─────────────────────────────────────────────

proptest! {
    #[test]
    fn too_few_rows_is_rejected(rows in arb_rows(0, MIN_FIT_POINTS)) {
        let err = build(&merged(&rows), "Japan").unwrap_err();
        prop_assert_eq!(
            err,
            CurveError::InsufficientData { found: rows.len(), required: MIN_FIT_POINTS }
        );
    }
}

// ── 4. Cleaning ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cleaning_is_idempotent(values in prop::collection::vec((arb_raw(), arb_raw()), 0..30)) {
        let rows: Vec<MergedObservation> = values
            .into_iter()
            .enumerate()
            .map(|(i, (u, p))| MergedObservation::new(format!("{i}"), u, p))
            .collect();

        let once = clean(&rows);
        prop_assert!(once.len() <= rows.len());

        let again: Vec<MergedObservation> = once.iter().cloned().map(Into::into).collect();
        prop_assert_eq!(clean(&again), once);
    }
}
