//! Multivariate normal density via a Cholesky factor.
//!
//! ## Purpose
//!
//! This module evaluates the Gaussian density `N(x; mu, H)` that weights
//! training points in local linear smoothing. The covariance `H` is the
//! bandwidth matrix.
//!
//! ## Design notes
//!
//! * **Factor once**: `H = L L'` is computed once per fit; every density is
//!   then a forward substitution `z = L^-1 (x - mu)`, O(d^2) per point, with
//!   no explicit inverse.
//! * **Log space**: The density is assembled as
//!   `exp(-|z|^2 / 2 - (d/2) ln(2 pi) - sum(ln L_ii))`.
//!
//! ## Invariants
//!
//! * `L` is lower-triangular with a strictly positive diagonal.
//!
//! ## Non-goals
//!
//! * This module does not check the symmetry of `H` (see `BandwidthMatrix`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::kernel::LN_2PI;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;

// ============================================================================
// Multivariate Normal
// ============================================================================

/// Multivariate normal kernel with a fixed covariance.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateNormal<T> {
    dims: usize,
    /// Lower Cholesky factor, row-major.
    chol: Vec<T>,
    /// `(d/2) ln(2 pi) + sum(ln L_ii)`.
    log_norm: T,
}

impl<T: FloatLinalg> MultivariateNormal<T> {
    /// Factor the `dims x dims` covariance `cov` (row-major).
    pub fn new(cov: &[T], dims: usize) -> Result<Self, KrsError> {
        if dims == 0 || cov.len() != dims * dims {
            return Err(KrsError::DimensionMismatch {
                what: "bandwidth matrix",
                expected: dims * dims,
                got: cov.len(),
            });
        }

        let chol = T::cholesky_lower(cov, dims).ok_or(KrsError::NotPositiveDefinite)?;

        let mut log_det_half = T::zero();
        for i in 0..dims {
            let d = chol[i * dims + i];
            if d <= T::zero() || !d.is_finite() {
                return Err(KrsError::NotPositiveDefinite);
            }
            log_det_half = log_det_half + d.ln();
        }
        let half_d = T::from(dims).unwrap() / T::from(2.0).unwrap();
        let log_norm = half_d * T::from(LN_2PI).unwrap() + log_det_half;

        Ok(Self {
            dims,
            chol,
            log_norm,
        })
    }

    /// Dimension of the distribution.
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Squared Mahalanobis distance `|L^-1 (x - mean)|^2`.
    ///
    /// `z` is scratch space of length `dims`.
    #[inline]
    pub fn mahalanobis_sq(&self, x: &[T], mean: &[T], z: &mut [T]) -> T {
        let d = self.dims;
        let mut sum_sq = T::zero();
        for row in 0..d {
            let l_row = &self.chol[row * d..row * d + d];
            let mut acc = T::zero();
            for col in 0..row {
                acc = acc + z[col] * l_row[col];
            }
            let zr = (x[row] - mean[row] - acc) / l_row[row];
            z[row] = zr;
            sum_sq = sum_sq + zr * zr;
        }
        sum_sq
    }

    /// Log-density of `x` for a distribution centred at `mean`.
    #[inline]
    pub fn log_density(&self, x: &[T], mean: &[T], z: &mut [T]) -> T {
        T::from(-0.5).unwrap() * self.mahalanobis_sq(x, mean, z) - self.log_norm
    }

    /// Density of a single point.
    pub fn density(&self, x: &[T], mean: &[T]) -> T {
        let mut z = vec![T::zero(); self.dims];
        self.log_density(x, mean, &mut z).exp()
    }

    /// Densities of every row of `points` (row-major, `dims` wide) into `out`.
    pub fn densities_into(&self, points: &[T], mean: &[T], out: &mut Vec<T>) {
        out.clear();
        let mut z = vec![T::zero(); self.dims];
        for row in points.chunks_exact(self.dims) {
            out.push(self.log_density(row, mean, &mut z).exp());
        }
    }
}
