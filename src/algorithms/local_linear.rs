//! Local linear smoother with a multivariate Gaussian kernel.
//!
//! ## Purpose
//!
//! This module fits, at every query location, a weighted least squares
//! regression of the responses on the design matrix. Weights are the
//! multivariate normal density of each training location, centred at the
//! query location with covariance `H` (the bandwidth matrix).
//!
//! ## Design notes
//!
//! * **Factor once**: `H = L L'` is computed once per call and reused for
//!   every query point.
//! * **Square-root weighting**: `X_w = X * sqrt(w)` (row-scaled) and
//!   `y_w = y * sqrt(w)`, so `||y_w - X_w b||^2` is the weighted criterion.
//! * **QR solve**: Economy QR of `X_w`; no normal equations.
//! * **Prediction**: `fitted[i] = X0[i] . beta_i`.
//!
//! ## Invariants
//!
//! * Locations and the bandwidth matrix share the same dimension `d`.
//! * Training and query design rows share the same width `p`.
//!
//! ## Non-goals
//!
//! * This module does not regularize rank-deficient local designs.
//! * This module does not select `H` (see cross-validation).
//!
//! Complexity is O(n0 * (n d^2 + n p^2 + p^3)).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::smoother::Smoother;
use crate::math::linalg::FloatLinalg;
use crate::math::mvn::MultivariateNormal;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::{DesignQuery, DesignSample};
use crate::primitives::validator::Validator;

// ============================================================================
// Bandwidth Matrix
// ============================================================================

/// Symmetric `d x d` bandwidth (kernel covariance) matrix, row-major.
///
/// Positive-definiteness is checked when the matrix is factored.
#[derive(Debug, Clone, PartialEq)]
pub struct BandwidthMatrix<T> {
    values: Vec<T>,
    dims: usize,
}

impl<T: FloatLinalg> BandwidthMatrix<T> {
    /// Create a bandwidth matrix from row-major values.
    pub fn new(values: &[T], dims: usize) -> Result<Self, KrsError> {
        Validator::validate_bandwidth_matrix(values, dims)?;
        Ok(Self {
            values: values.to_vec(),
            dims,
        })
    }

    /// `h * I` in `dims` dimensions.
    pub fn isotropic(h: T, dims: usize) -> Result<Self, KrsError> {
        Validator::validate_bandwidth(h)?;
        let mut values = vec![T::zero(); dims * dims];
        for i in 0..dims {
            values[i * dims + i] = h;
        }
        Self::new(&values, dims)
    }

    /// Diagonal matrix with the given variances.
    pub fn diagonal(diag: &[T]) -> Result<Self, KrsError> {
        let dims = diag.len();
        let mut values = vec![T::zero(); dims * dims];
        for (i, &h) in diag.iter().enumerate() {
            Validator::validate_bandwidth(h)?;
            values[i * dims + i] = h;
        }
        Self::new(&values, dims)
    }

    /// Dimension `d`.
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Row-major entries.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Entry `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.values[row * self.dims + col]
    }

    /// This matrix multiplied by a positive factor.
    pub fn scaled(&self, factor: T) -> Result<Self, KrsError> {
        Validator::validate_bandwidth(factor)?;
        Ok(Self {
            values: self.values.iter().map(|&v| v * factor).collect(),
            dims: self.dims,
        })
    }
}

// ============================================================================
// Local Linear Smoother
// ============================================================================

/// Locally weighted linear regression with a multivariate Gaussian kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalLinearSmoother;

impl LocalLinearSmoother {
    /// Create the smoother.
    pub fn new() -> Self {
        Self
    }

    /// Fitted values at every query point of `query`.
    pub fn smooth_design<T: FloatLinalg>(
        train: &DesignSample<T>,
        query: &DesignQuery<T>,
        bandwidth: &BandwidthMatrix<T>,
    ) -> Result<Vec<T>, KrsError> {
        Self::validate_train(train, bandwidth)?;
        if query.dims != train.dims {
            return Err(KrsError::DimensionMismatch {
                what: "query location dimension",
                expected: train.dims,
                got: query.dims,
            });
        }
        if query.n_coeffs != train.n_coeffs {
            return Err(KrsError::DimensionMismatch {
                what: "query design width",
                expected: train.n_coeffs,
                got: query.n_coeffs,
            });
        }
        if query.design.len() != query.len() * query.n_coeffs {
            return Err(KrsError::DimensionMismatch {
                what: "query design",
                expected: query.len() * query.n_coeffs,
                got: query.design.len(),
            });
        }
        Validator::validate_finite(&query.locations, "x0")?;
        Validator::validate_finite(&query.design, "X0")?;

        let kernel = MultivariateNormal::new(bandwidth.as_slice(), bandwidth.dims())?;
        fit_all(train, query, &kernel)
    }

    /// Local regression coefficients at a single location.
    pub fn coefficients_at<T: FloatLinalg>(
        train: &DesignSample<T>,
        location: &[T],
        bandwidth: &BandwidthMatrix<T>,
    ) -> Result<Vec<T>, KrsError> {
        Self::validate_train(train, bandwidth)?;
        if location.len() != train.dims {
            return Err(KrsError::DimensionMismatch {
                what: "query location dimension",
                expected: train.dims,
                got: location.len(),
            });
        }
        Validator::validate_finite(location, "x0")?;

        let kernel = MultivariateNormal::new(bandwidth.as_slice(), bandwidth.dims())?;
        LocalFit::new().coefficients(train, location, &kernel, 0)
    }

    fn validate_train<T: FloatLinalg>(
        train: &DesignSample<T>,
        bandwidth: &BandwidthMatrix<T>,
    ) -> Result<(), KrsError> {
        let n = train.y.len();
        if n == 0 {
            return Err(KrsError::EmptyInput);
        }
        if train.dims == 0 || train.n_coeffs == 0 {
            return Err(KrsError::InvalidInput(
                "dims and n_coeffs must be positive".into(),
            ));
        }
        if train.locations.len() != n * train.dims {
            return Err(KrsError::DimensionMismatch {
                what: "locations",
                expected: n * train.dims,
                got: train.locations.len(),
            });
        }
        if train.design.len() != n * train.n_coeffs {
            return Err(KrsError::DimensionMismatch {
                what: "design",
                expected: n * train.n_coeffs,
                got: train.design.len(),
            });
        }
        if bandwidth.dims() != train.dims {
            return Err(KrsError::DimensionMismatch {
                what: "bandwidth matrix",
                expected: train.dims * train.dims,
                got: bandwidth.as_slice().len(),
            });
        }
        Validator::validate_finite(&train.y, "y")?;
        Validator::validate_finite(&train.locations, "x")?;
        Validator::validate_finite(&train.design, "X")
    }
}

#[cfg(feature = "parallel")]
fn fit_all<T: FloatLinalg>(
    train: &DesignSample<T>,
    query: &DesignQuery<T>,
    kernel: &MultivariateNormal<T>,
) -> Result<Vec<T>, KrsError> {
    (0..query.len())
        .into_par_iter()
        .map_init(LocalFit::new, |ws, i| ws.fit_at(train, query, kernel, i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fit_all<T: FloatLinalg>(
    train: &DesignSample<T>,
    query: &DesignQuery<T>,
    kernel: &MultivariateNormal<T>,
) -> Result<Vec<T>, KrsError> {
    let mut ws = LocalFit::new();
    (0..query.len())
        .map(|i| ws.fit_at(train, query, kernel, i))
        .collect()
}

impl<T: FloatLinalg> Smoother<T> for LocalLinearSmoother {
    type Param = BandwidthMatrix<T>;
    type Sample = DesignSample<T>;

    fn name(&self) -> &'static str {
        "local linear"
    }

    fn validate_param(&self, param: &BandwidthMatrix<T>) -> Result<(), KrsError> {
        Validator::validate_bandwidth_matrix(param.as_slice(), param.dims())
    }

    fn smooth(
        &self,
        train: &DesignSample<T>,
        query: &DesignQuery<T>,
        param: &BandwidthMatrix<T>,
    ) -> Result<Vec<T>, KrsError> {
        Self::smooth_design(train, query, param)
    }
}

// ============================================================================
// Per-query Workspace
// ============================================================================

/// Scratch buffers reused across query points.
struct LocalFit<T> {
    weights: Vec<T>,
    xw: Vec<T>,
    yw: Vec<T>,
}

impl<T: FloatLinalg> LocalFit<T> {
    fn new() -> Self {
        Self {
            weights: Vec::new(),
            xw: Vec::new(),
            yw: Vec::new(),
        }
    }

    fn fit_at(
        &mut self,
        train: &DesignSample<T>,
        query: &DesignQuery<T>,
        kernel: &MultivariateNormal<T>,
        index: usize,
    ) -> Result<T, KrsError> {
        let beta = self.coefficients(train, query.location(index), kernel, index)?;
        Ok(query
            .design_row(index)
            .iter()
            .zip(beta.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    fn coefficients(
        &mut self,
        train: &DesignSample<T>,
        location: &[T],
        kernel: &MultivariateNormal<T>,
        index: usize,
    ) -> Result<Vec<T>, KrsError> {
        let n = train.y.len();
        let p = train.n_coeffs;

        kernel.densities_into(&train.locations, location, &mut self.weights);

        self.xw.clear();
        self.yw.clear();
        for (j, &w) in self.weights.iter().enumerate() {
            let sw = w.sqrt();
            self.yw.push(train.y[j] * sw);
            self.xw.extend(train.design_row(j).iter().map(|&v| v * sw));
        }

        T::qr_least_squares(&self.xw, &self.yw, n, p)
            .ok_or(KrsError::RankDeficient { index, columns: p })
    }
}
