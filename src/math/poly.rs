//! Polynomial least-squares fitting and evaluation.
//!
//! Coefficients are ordered highest power first: `[a, b, c]` means
//! `a·x² + b·x + c`.
//!
//! The Vandermonde columns are scaled to unit norm before the SVD solve and the
//! coefficients unscaled afterwards. Rates in percent squared quickly dwarf the
//! constant column otherwise.

use nalgebra::{DMatrix, DVector};

use crate::math::solve_least_squares;

/// Least-squares polynomial of the given degree through `(xs, ys)`.
///
/// Returns `None` when the inputs are mismatched or empty, or when no finite
/// solution exists.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Option<Vec<f64>> {
    if xs.len() != ys.len() || xs.is_empty() {
        return None;
    }
    let n = xs.len();
    let p = degree + 1;

    let mut design = DMatrix::<f64>::zeros(n, p);
    for (i, &x) in xs.iter().enumerate() {
        for j in 0..p {
            design[(i, j)] = x.powi((degree - j) as i32);
        }
    }

    let mut scale = vec![1.0; p];
    for (j, s) in scale.iter_mut().enumerate() {
        let norm = design.column(j).norm();
        if norm.is_finite() && norm > 0.0 {
            *s = norm;
        }
    }
    for i in 0..n {
        for (j, &s) in scale.iter().enumerate() {
            design[(i, j)] /= s;
        }
    }

    let y = DVector::from_column_slice(ys);
    let beta = solve_least_squares(&design, &y)?;

    Some(beta.iter().zip(&scale).map(|(b, s)| b / s).collect())
}

/// Evaluate a polynomial (highest power first) with Horner's scheme.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// `n` evenly spaced values from `start` to `end`, both included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}
