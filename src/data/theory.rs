//! Synthetic "textbook" Phillips curve shown on the explanations page.
//!
//! Inflation falls linearly with unemployment, plus unit Gaussian noise:
//! `y = 15 - 1.5·x + ε` on 50 evenly spaced points of `x ∈ [2, 10]`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::math::linspace;

pub const THEORY_SEED: u64 = 42;
const THEORY_POINTS: usize = 50;
const X_MIN: f64 = 2.0;
const X_MAX: f64 = 10.0;
const INTERCEPT: f64 = 15.0;
const SLOPE: f64 = -1.5;

#[derive(Debug, Clone)]
pub struct TheoryCurve {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

pub fn theory_curve(seed: u64) -> TheoryCurve {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = linspace(X_MIN, X_MAX, THEORY_POINTS)
        .into_iter()
        .map(|x| {
            let eps: f64 = StandardNormal.sample(&mut rng);
            (x, INTERCEPT + SLOPE * x + eps)
        })
        .collect();

    TheoryCurve {
        title: "Phillips Curve in Theory".to_string(),
        x_label: "Unemployment Rate (%)".to_string(),
        y_label: "Inflation Rate (%)".to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theory_curve_is_deterministic_and_downward_sloping() {
        let a = theory_curve(THEORY_SEED);
        let b = theory_curve(THEORY_SEED);
        assert_eq!(a.points, b.points);
        assert_eq!(a.points.len(), 50);
        assert_eq!(a.points[0].0, 2.0);
        assert_eq!(a.points[49].0, 10.0);

        // Noise is small next to the 12-point drop across the range.
        let first: f64 = a.points[..10].iter().map(|p| p.1).sum::<f64>() / 10.0;
        let last: f64 = a.points[40..].iter().map(|p| p.1).sum::<f64>() / 10.0;
        assert!(first > last + 5.0, "expected a falling curve, got {first} -> {last}");
    }
}
