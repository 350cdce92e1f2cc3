//! High-level API for kernel regression smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Two fluent builders
//! configure a smoother and its bandwidth (fixed or cross-validated) and
//! build a reusable model:
//!
//! * [`KernelRegressionBuilder`] for the scalar kernel mean and
//!   mean-variance smoothers.
//! * [`LocalLinearBuilder`] for the multivariate local linear smoother.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting the same parameter twice is reported at `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `KernelRegression::new()` or `LocalLinearRegression::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.cross_validate()`, etc.).
//! 3. Call `.build()` and then `.fit()` or `.predict()` on the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{CvSettings, ExecutorConfig, ExecutorOutput, KrsExecutor};
use crate::primitives::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::local_linear::{BandwidthMatrix, LocalLinearSmoother};
pub use crate::algorithms::mean::KernelMeanSmoother;
pub use crate::algorithms::mean_variance::{MeanVarianceFit, MeanVarianceSmoother, ResidualMode};
pub use crate::algorithms::smoother::Smoother;
pub use crate::engine::output::{KrsResult, LocalLinearResult};
pub use crate::evaluation::cv::{CVConfig, CVKind, CvOutcome, KFold, LOOCV};
pub use crate::evaluation::folds::FoldAssignment;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::{ErrorKind, KrsError};
pub use crate::primitives::sample::{DesignQuery, DesignSample, Sample, ScalarSample};

// ============================================================================
// Smoothing Method
// ============================================================================

/// Scalar kernel smoother variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingMethod {
    /// Nadaraya-Watson kernel mean.
    #[default]
    Mean,

    /// Kernel mean with residual-adapted local bandwidths.
    MeanVariance,
}

// ============================================================================
// Kernel Regression Builder
// ============================================================================

/// Fluent builder for the scalar kernel smoothers.
#[derive(Debug, Clone)]
pub struct KernelRegressionBuilder<T> {
    /// Gaussian kernel standard deviation.
    pub bandwidth: Option<T>,

    /// Smoother variant.
    pub method: Option<SmoothingMethod>,

    /// First-pass residual mode (mean-variance only).
    pub residual_mode: Option<ResidualMode>,

    /// Cross-validation settings.
    pub(crate) cv: Option<CvSettings<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for KernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> KernelRegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            method: None,
            residual_mode: None,
            cv: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel bandwidth (Gaussian standard deviation).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Choose between the kernel mean and mean-variance smoothers.
    pub fn method(mut self, method: SmoothingMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set how the mean-variance smoother computes its first-pass residuals.
    pub fn residual_mode(mut self, mode: ResidualMode) -> Self {
        if self.residual_mode.is_some() {
            self.duplicate_param = Some("residual_mode");
        }
        self.residual_mode = Some(mode);
        self
    }

    /// Select the bandwidth by cross-validation over a candidate grid.
    pub fn cross_validate(mut self, config: CVConfig<'_, T>) -> Self {
        if self.cv.is_some() {
            self.duplicate_param = Some("cross_validate");
        }
        self.cv = Some(CvSettings::from_config(&config));
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<KernelRegressionModel<T>, KrsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate bandwidth or candidate grid
        if let Some(bw) = self.bandwidth {
            Validator::validate_bandwidth(bw)?;
        }
        match &self.cv {
            Some(cv) => {
                Validator::validate_grid(&cv.grid)?;
                for &bw in &cv.grid {
                    Validator::validate_bandwidth(bw)?;
                }
            }
            None if self.bandwidth.is_none() => {
                return Err(KrsError::InvalidInput(
                    "a bandwidth or a cross-validation grid is required".into(),
                ));
            }
            None => {}
        }

        let method = self.method.unwrap_or_default();
        if self.residual_mode.is_some() && method != SmoothingMethod::MeanVariance {
            return Err(KrsError::InvalidInput(
                "residual_mode only applies to the mean-variance method".into(),
            ));
        }

        Ok(KernelRegressionModel {
            method,
            residual_mode: self.residual_mode.unwrap_or_default(),
            config: ExecutorConfig {
                param: self.bandwidth,
                cv: self.cv,
            },
        })
    }
}

// ============================================================================
// Kernel Regression Model
// ============================================================================

/// A configured scalar kernel smoother.
#[derive(Debug, Clone)]
pub struct KernelRegressionModel<T> {
    method: SmoothingMethod,
    residual_mode: ResidualMode,
    config: ExecutorConfig<T>,
}

impl<T: FloatLinalg> KernelRegressionModel<T> {
    /// Smoother variant.
    pub fn method(&self) -> SmoothingMethod {
        self.method
    }

    /// Fit on `(x, y)` and evaluate at the training points.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<KrsResult<T>, KrsError> {
        Validator::validate_inputs(x, y)?;
        let sample = ScalarSample::new(x, y)?;
        self.execute(&sample, None)
    }

    /// Fit on `(x, y)` and evaluate at the query points `x0`.
    pub fn predict(&self, x: &[T], y: &[T], x0: &[T]) -> Result<KrsResult<T>, KrsError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_finite(x0, "x0")?;
        let sample = ScalarSample::new(x, y)?;
        let query = x0.to_vec();
        self.execute(&sample, Some(&query))
    }

    fn execute(
        &self,
        sample: &ScalarSample<T>,
        query: Option<&Vec<T>>,
    ) -> Result<KrsResult<T>, KrsError> {
        match self.method {
            SmoothingMethod::Mean => {
                let smoother = KernelMeanSmoother::new();
                let out = KrsExecutor::run::<T, _>(&smoother, sample, query, &self.config)?;
                Ok(scalar_result(&smoother, sample, query, out))
            }
            SmoothingMethod::MeanVariance => {
                let smoother = MeanVarianceSmoother::with_residual_mode(self.residual_mode);
                let out = KrsExecutor::run::<T, _>(&smoother, sample, query, &self.config)?;
                Ok(scalar_result(&smoother, sample, query, out))
            }
        }
    }
}

fn scalar_result<T, S>(
    smoother: &S,
    sample: &ScalarSample<T>,
    query: Option<&Vec<T>>,
    out: ExecutorOutput<T, T>,
) -> KrsResult<T>
where
    T: FloatLinalg,
    S: Smoother<T, Param = T, Sample = ScalarSample<T>>,
{
    KrsResult {
        x: query.cloned().unwrap_or_else(|| sample.x.clone()),
        y: out.fitted,
        n_train: sample.len(),
        method: smoother.name(),
        bandwidth: out.param,
        cv_scores: out.cv_scores,
    }
}

// ============================================================================
// Local Linear Builder
// ============================================================================

/// Fluent builder for the local linear smoother.
#[derive(Debug, Clone)]
pub struct LocalLinearBuilder<T> {
    /// Kernel covariance matrix.
    pub bandwidth: Option<BandwidthMatrix<T>>,

    /// Cross-validation settings.
    pub(crate) cv: Option<CvSettings<BandwidthMatrix<T>>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for LocalLinearBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> LocalLinearBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            cv: None,
            duplicate_param: None,
        }
    }

    /// Set the bandwidth matrix.
    pub fn bandwidth(mut self, bandwidth: BandwidthMatrix<T>) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Select the bandwidth matrix by cross-validation over a candidate grid.
    pub fn cross_validate(mut self, config: CVConfig<'_, BandwidthMatrix<T>>) -> Self {
        if self.cv.is_some() {
            self.duplicate_param = Some("cross_validate");
        }
        self.cv = Some(CvSettings::from_config(&config));
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<LocalLinearModel<T>, KrsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let dims = match (&self.bandwidth, &self.cv) {
            (_, Some(cv)) => {
                Validator::validate_grid(&cv.grid)?;
                cv.grid[0].dims()
            }
            (Some(h), None) => h.dims(),
            (None, None) => {
                return Err(KrsError::InvalidInput(
                    "a bandwidth matrix or a cross-validation grid is required".into(),
                ));
            }
        };

        let candidates = self.bandwidth.iter().chain(self.cv.iter().flat_map(|cv| &cv.grid));
        for h in candidates {
            if h.dims() != dims {
                return Err(KrsError::DimensionMismatch {
                    what: "bandwidth matrix",
                    expected: dims * dims,
                    got: h.as_slice().len(),
                });
            }
            Validator::validate_bandwidth_matrix(h.as_slice(), h.dims())?;
        }

        Ok(LocalLinearModel {
            config: ExecutorConfig {
                param: self.bandwidth,
                cv: self.cv,
            },
        })
    }
}

// ============================================================================
// Local Linear Model
// ============================================================================

/// A configured local linear smoother.
#[derive(Debug, Clone)]
pub struct LocalLinearModel<T> {
    config: ExecutorConfig<BandwidthMatrix<T>>,
}

impl<T: FloatLinalg> LocalLinearModel<T> {
    /// Fit on `sample` and evaluate at its own locations.
    pub fn fit(&self, sample: &DesignSample<T>) -> Result<LocalLinearResult<T>, KrsError> {
        let smoother = LocalLinearSmoother::new();
        let out = KrsExecutor::run::<T, _>(&smoother, sample, None, &self.config)?;
        Ok(LocalLinearResult {
            locations: sample.locations.clone(),
            dims: sample.dims,
            y: out.fitted,
            n_train: sample.len(),
            bandwidth: out.param,
            cv_scores: out.cv_scores,
        })
    }

    /// Fit on `sample` and evaluate at `query`.
    pub fn predict(
        &self,
        sample: &DesignSample<T>,
        query: &DesignQuery<T>,
    ) -> Result<LocalLinearResult<T>, KrsError> {
        let smoother = LocalLinearSmoother::new();
        let out = KrsExecutor::run::<T, _>(&smoother, sample, Some(query), &self.config)?;
        Ok(LocalLinearResult {
            locations: query.locations.clone(),
            dims: query.dims,
            y: out.fitted,
            n_train: sample.len(),
            bandwidth: out.param,
            cv_scores: out.cv_scores,
        })
    }
}
