//! Least squares solver.
//!
//! We solve small, tall problems of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - SVD handles tall design matrices (more rows than columns) directly.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Singular values under the tolerance are dropped, which yields the
//!   minimum-norm solution for rank-deficient inputs (e.g. repeated x values).

use nalgebra::{DMatrix, DVector};

/// Relative cut-off below which singular values count as zero.
const SINGULAR_EPS: f64 = 1e-12;

/// Minimum-norm least squares solution via SVD.
///
/// `None` when the solution has non-finite entries.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);
    let eps = SINGULAR_EPS * svd.singular_values.max();

    svd.solve(y, eps)
        .ok()
        .filter(|beta| beta.iter().all(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn rank_deficient_system_still_solves() {
        // Identical columns: infinitely many solutions, SVD picks the minimum-norm one.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 1.0).abs() < 1e-9);
        assert!((beta[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_observations_yield_none() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, f64::INFINITY, 8.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
