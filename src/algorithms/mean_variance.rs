//! Mean-variance (heteroscedastic) kernel smoother.
//!
//! ## Purpose
//!
//! This module extends the kernel mean smoother with a locally adapted
//! bandwidth `bw * w_i`, where `w_i` is the normalized inverse of the
//! smoothed absolute residual. Quiet regions get a wider kernel and noisy
//! regions a narrower one.
//!
//! ## Design notes
//!
//! * **Three passes**, all with the same base bandwidth `bw`:
//!   1. `mu_i` = kernel mean of `y` at every training `x_i`;
//!   2. `scale` = kernel mean of `|y_i - mu_i|` at every query point;
//!      `w_i = (1 / scale_i) / mean(1 / scale)`;
//!   3. `fitted_i` = kernel mean of `y` at query `i` with bandwidth `bw * w_i`.
//! * **Residual mode**: Pass 1 uses every training point including `x_i`
//!   itself by default. [`ResidualMode::LeaveOneOut`] drops `x_i` from its own
//!   fit to remove the optimistic bias of in-sample residuals.
//!
//! ## Invariants
//!
//! * The local weights `w` average exactly one over the query set.
//! * A zero local scale is an error, never an infinite weight.
//!
//! ## Non-goals
//!
//! * This module does not iterate the variance estimate to convergence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::mean::KernelMeanSmoother;
use crate::algorithms::smoother::Smoother;
use crate::math::kernel::GaussianKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::ScalarSample;
use crate::primitives::validator::Validator;

// ============================================================================
// Configuration
// ============================================================================

/// How the first-pass residuals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidualMode {
    /// Each training point contributes to its own fitted mean.
    #[default]
    InSample,

    /// Each training point is excluded from its own fitted mean.
    LeaveOneOut,
}

// ============================================================================
// Output
// ============================================================================

/// Detailed output of a mean-variance fit.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanVarianceFit<T> {
    /// Final fitted values, one per query point.
    pub fitted: Vec<T>,

    /// Smoothed absolute residual at each query point.
    pub scale: Vec<T>,

    /// Normalized inverse-scale weights (mean one).
    pub weights: Vec<T>,
}

// ============================================================================
// Mean-Variance Smoother
// ============================================================================

/// Kernel mean smoother with residual-adapted local bandwidths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanVarianceSmoother {
    residual_mode: ResidualMode,
}

impl MeanVarianceSmoother {
    /// Create a smoother using in-sample residuals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a smoother with an explicit residual mode.
    pub fn with_residual_mode(residual_mode: ResidualMode) -> Self {
        Self { residual_mode }
    }

    /// The configured residual mode.
    pub fn residual_mode(&self) -> ResidualMode {
        self.residual_mode
    }

    /// Fitted values at `x0`.
    pub fn smooth_points<T: FloatLinalg>(
        &self,
        x: &[T],
        y: &[T],
        x0: &[T],
        bandwidth: T,
    ) -> Result<Vec<T>, KrsError> {
        self.fit_detailed(x, y, x0, bandwidth).map(|fit| fit.fitted)
    }

    /// Fitted values together with the local scales and weights.
    pub fn fit_detailed<T: FloatLinalg>(
        &self,
        x: &[T],
        y: &[T],
        x0: &[T],
        bandwidth: T,
    ) -> Result<MeanVarianceFit<T>, KrsError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_finite(x0, "x0")?;
        Validator::validate_bandwidth(bandwidth)?;

        if x0.is_empty() {
            return Ok(MeanVarianceFit {
                fitted: Vec::new(),
                scale: Vec::new(),
                weights: Vec::new(),
            });
        }

        // Pass 1: fitted mean at every training point
        let mu = match self.residual_mode {
            ResidualMode::InSample => KernelMeanSmoother::smooth_unchecked(x, y, x, bandwidth)?,
            ResidualMode::LeaveOneOut => {
                KernelMeanSmoother::smooth_leave_one_out(x, y, bandwidth)?
            }
        };

        // Pass 2: smoothed absolute residuals and normalized inverse scales
        let abs_resid: Vec<T> = y
            .iter()
            .zip(mu.iter())
            .map(|(&yi, &mi)| (yi - mi).abs())
            .collect();
        let scale = KernelMeanSmoother::smooth_unchecked(x, &abs_resid, x0, bandwidth)?;

        let mut weights = Vec::with_capacity(scale.len());
        for (i, &s) in scale.iter().enumerate() {
            let inv = s.recip();
            if s <= T::zero() || !inv.is_finite() {
                return Err(KrsError::ZeroScale { index: i });
            }
            weights.push(inv);
        }
        let mean_inv = weights.iter().fold(T::zero(), |acc, &w| acc + w)
            / T::from(weights.len()).unwrap();
        for w in weights.iter_mut() {
            *w = *w / mean_inv;
        }

        // Pass 3: refit with the locally scaled bandwidth
        let mut fitted = Vec::with_capacity(x0.len());
        for (i, (&center, &w)) in x0.iter().zip(weights.iter()).enumerate() {
            let kernel = GaussianKernel::new(bandwidth * w);
            let value = kernel
                .weighted_mean(x, y, center)
                .ok_or(KrsError::ZeroWeightSum { index: i })?;
            fitted.push(value);
        }

        Ok(MeanVarianceFit {
            fitted,
            scale,
            weights,
        })
    }
}

impl<T: FloatLinalg> Smoother<T> for MeanVarianceSmoother {
    type Param = T;
    type Sample = ScalarSample<T>;

    fn name(&self) -> &'static str {
        "mean-variance"
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
        self.smooth_points(&train.x, &train.y, query, *param)
    }
}
