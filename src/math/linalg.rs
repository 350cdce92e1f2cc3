//! Linear algebra backend abstraction for kernel regression.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the two factorizations
//! the smoothers need: the Cholesky factor of a bandwidth matrix and a QR-based
//! least squares solve of a weighted design, both delegated to nalgebra.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) instead of the normal
//!   equations, so the conditioning of `X'WX` never enters the solve.
//! * No SVD fallback: a rank-deficient design is reported, not regularized.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Matrices cross the boundary as row-major slices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Display + Send + Sync + 'static {
    /// Lower Cholesky factor `L` of a symmetric `n x n` matrix (row-major).
    ///
    /// Returns `None` when the matrix is not positive-definite.
    fn cholesky_lower(a: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Least squares coefficients minimizing `||y - X beta||` via economy QR.
    ///
    /// `x` is `rows x cols`, row-major. Returns `None` when `X` is
    /// numerically rank-deficient.
    fn qr_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn cholesky_lower(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky_lower(a, n)
    }
    #[inline]
    fn qr_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        let rel_tol = f64::EPSILON * 100.0 * rows.max(cols) as f64;
        nalgebra_backend::qr_least_squares(x, y, rows, cols, rel_tol)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn cholesky_lower(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky_lower(a, n)
    }
    #[inline]
    fn qr_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        let rel_tol = f32::EPSILON * 100.0 * rows.max(cols) as f32;
        nalgebra_backend::qr_least_squares(x, y, rows, cols, rel_tol)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{Cholesky, DMatrix, DVector, RealField};

    /// Lower Cholesky factor of a row-major symmetric matrix.
    pub fn cholesky_lower<T: RealField + Copy>(a: &[T], n: usize) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let l = Cholesky::new(matrix)?.l();

        let mut out = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                out.push(l[(i, j)]);
            }
        }
        Some(out)
    }

    /// Economy-QR least squares with a relative rank tolerance on `diag(R)`.
    pub fn qr_least_squares<T: RealField + Copy>(
        x: &[T],
        y: &[T],
        rows: usize,
        cols: usize,
        rel_tol: T,
    ) -> Option<Vec<T>> {
        if rows < cols || cols == 0 {
            return None;
        }

        let matrix = DMatrix::from_row_slice(rows, cols, x);
        let rhs = DVector::from_column_slice(y);

        let qr = matrix.qr();
        let r = qr.r();

        // Rank check on the diagonal of R
        let mut max_diag = T::zero();
        for k in 0..cols {
            let d = r[(k, k)].abs();
            if d > max_diag {
                max_diag = d;
            }
        }
        if max_diag <= T::zero() {
            return None;
        }
        let threshold = max_diag * rel_tol;
        for k in 0..cols {
            if r[(k, k)].abs() <= threshold {
                return None;
            }
        }

        let qty = qr.q().transpose() * rhs;
        let beta = r.solve_upper_triangular(&qty)?;
        Some(beta.as_slice().to_vec())
    }
}
