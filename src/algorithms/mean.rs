//! Nadaraya-Watson kernel mean smoother.
//!
//! ## Purpose
//!
//! This module implements the kernel mean smoother on a scalar covariate:
//! the fitted value at a query point is the Gaussian-weighted average of the
//! training responses,
//!
//! ```text
//! fitted[i] = sum_j K(x_j; x0[i], bw) * y_j / sum_j K(x_j; x0[i], bw)
//! ```
//!
//! ## Design notes
//!
//! * **Direct sums**: O(n0 * n) with no neighborhood truncation.
//! * **Shifted ratio**: Exponents are taken relative to the nearest training
//!   point, so a query far from all data still gets a finite fit.
//! * **Guarded ratio**: An empty neighbourhood (leave-one-out with `n = 1`)
//!   or a non-finite ratio is an error, not a NaN.
//!
//! ## Invariants
//!
//! * With a single training point every fit equals that point's response.
//! * Fitted values lie within `[min(y), max(y)]`.
//!
//! ## Non-goals
//!
//! * This module does not choose the bandwidth (see cross-validation).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::smoother::Smoother;
use crate::math::kernel::GaussianKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::ScalarSample;
use crate::primitives::validator::Validator;

// ============================================================================
// Kernel Mean Smoother
// ============================================================================

/// Gaussian kernel mean (Nadaraya-Watson) smoother.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernelMeanSmoother;

impl KernelMeanSmoother {
    /// Create the smoother.
    pub fn new() -> Self {
        Self
    }

    /// Smooth `(x, y)` at each of the query points `x0` with `bandwidth`.
    pub fn smooth_points<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        x0: &[T],
        bandwidth: T,
    ) -> Result<Vec<T>, KrsError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_finite(x0, "x0")?;
        Validator::validate_bandwidth(bandwidth)?;

        Self::smooth_unchecked(x, y, x0, bandwidth)
    }

    /// Leave-one-out fit: the value at `x_i` is smoothed from all points except `i`.
    pub fn smooth_leave_one_out<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        bandwidth: T,
    ) -> Result<Vec<T>, KrsError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_bandwidth(bandwidth)?;

        let kernel = GaussianKernel::new(bandwidth);
        let mut fitted = Vec::with_capacity(x.len());
        for (i, &xi) in x.iter().enumerate() {
            let others = x
                .iter()
                .zip(y.iter())
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .map(|(_, (&xj, &yj))| (xj, yj));
            let value = kernel
                .weighted_mean_of(others, xi)
                .ok_or(KrsError::ZeroWeightSum { index: i })?;
            fitted.push(value);
        }
        Ok(fitted)
    }

    /// Smooth `values` observed at `x` onto `x0` without validating inputs.
    pub(crate) fn smooth_unchecked<T: FloatLinalg>(
        x: &[T],
        values: &[T],
        x0: &[T],
        bandwidth: T,
    ) -> Result<Vec<T>, KrsError> {
        let kernel = GaussianKernel::new(bandwidth);
        x0.iter()
            .enumerate()
            .map(|(i, &center)| {
                kernel
                    .weighted_mean(x, values, center)
                    .ok_or(KrsError::ZeroWeightSum { index: i })
            })
            .collect()
    }
}

impl<T: FloatLinalg> Smoother<T> for KernelMeanSmoother {
    type Param = T;
    type Sample = ScalarSample<T>;

    fn name(&self) -> &'static str {
        "kernel mean"
    }

    fn validate_param(&self, param: &T) -> Result<(), KrsError> {
        Validator::validate_bandwidth(*param)
    }

    fn smooth(
        &self,
        train: &ScalarSample<T>,
        query: &Vec<T>,
        param: &T,
    ) -> Result<Vec<T>, KrsError> {
        Self::smooth_points(&train.x, &train.y, query, *param)
    }
}
