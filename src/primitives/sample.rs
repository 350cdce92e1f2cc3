//! Training samples and query sets consumed by the smoothers.
//!
//! ## Purpose
//!
//! This module defines the containers that carry observations into a
//! smoother: a scalar-covariate sample for the kernel mean smoothers and a
//! design sample (locations plus regression design) for the local linear
//! smoother. The [`Sample`] trait lets the cross-validation driver split any
//! of them into folds without knowing their layout.
//!
//! ## Design notes
//!
//! * **Row-major**: Matrices are flat slices with a fixed row width, the same
//!   layout the rest of the crate uses for nD points.
//! * **Owned**: Samples own their buffers so that fold subsets can be built
//!   without lifetimes leaking into the strategy trait.
//! * **Shape-checked**: Constructors reject inconsistent shapes; value checks
//!   (finiteness) are left to the smoothers.
//!
//! ## Invariants
//!
//! * `len(x) == len(y)` for scalar samples.
//! * For design samples, `locations.len() == n * dims` and `design.len() == n * n_coeffs`.
//!
//! ## Non-goals
//!
//! * This module does not validate numeric content.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KrsError;

// ============================================================================
// Sample Trait
// ============================================================================

/// A set of training observations that can be split into folds.
pub trait Sample<T>: Sized + Send + Sync {
    /// Query set type accepted by smoothers trained on this sample.
    type Query: Send + Sync;

    /// Number of observations.
    fn len(&self) -> usize;

    /// Whether the sample holds no observations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observed responses, one per observation.
    fn response(&self) -> &[T];

    /// Build a new sample from the observations at `indices`, in that order.
    fn subset(&self, indices: &[usize]) -> Self;

    /// Build a query set from the covariates at `indices`, in that order.
    fn query_subset(&self, indices: &[usize]) -> Self::Query;

    /// Use every training covariate as a query point.
    fn as_query(&self) -> Self::Query;
}

/// Copy the rows at `indices` out of a row-major buffer.
pub fn gather_rows<T: Copy>(data: &[T], width: usize, indices: &[usize]) -> Vec<T> {
    let mut out = Vec::with_capacity(indices.len() * width);
    for &i in indices {
        out.extend_from_slice(&data[i * width..(i + 1) * width]);
    }
    out
}

// ============================================================================
// Scalar Sample
// ============================================================================

/// Observations `(x_i, y_i)` with a scalar covariate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSample<T> {
    /// Covariate values.
    pub x: Vec<T>,

    /// Responses.
    pub y: Vec<T>,
}

impl<T: Float> ScalarSample<T> {
    /// Create a sample, checking that `x` and `y` have equal length.
    pub fn new(x: &[T], y: &[T]) -> Result<Self, KrsError> {
        if x.len() != y.len() {
            return Err(KrsError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }
}

impl<T: Float + Send + Sync> Sample<T> for ScalarSample<T> {
    type Query = Vec<T>;

    fn len(&self) -> usize {
        self.y.len()
    }

    fn response(&self) -> &[T] {
        &self.y
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            x: gather_rows(&self.x, 1, indices),
            y: gather_rows(&self.y, 1, indices),
        }
    }

    fn query_subset(&self, indices: &[usize]) -> Vec<T> {
        gather_rows(&self.x, 1, indices)
    }

    fn as_query(&self) -> Vec<T> {
        self.x.clone()
    }
}

// ============================================================================
// Design Sample
// ============================================================================

/// Observations for local linear regression.
///
/// Each observation has a kernel location (`dims` values) and a row of the
/// regression design (`n_coeffs` values, including an intercept column if
/// one is wanted).
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSample<T> {
    /// Responses (n).
    pub y: Vec<T>,

    /// Kernel locations, row-major (n x dims).
    pub locations: Vec<T>,

    /// Regression design, row-major (n x n_coeffs).
    pub design: Vec<T>,

    /// Dimension of the kernel locations.
    pub dims: usize,

    /// Number of regression coefficients.
    pub n_coeffs: usize,
}

impl<T: Float> DesignSample<T> {
    /// Create a sample from explicit locations and design.
    pub fn new(
        y: &[T],
        locations: &[T],
        dims: usize,
        design: &[T],
        n_coeffs: usize,
    ) -> Result<Self, KrsError> {
        check_shape("locations", locations.len(), y.len(), dims)?;
        check_shape("design", design.len(), y.len(), n_coeffs)?;
        Ok(Self {
            y: y.to_vec(),
            locations: locations.to_vec(),
            design: design.to_vec(),
            dims,
            n_coeffs,
        })
    }

    /// Create a sample whose design is `[1, x_1, ..., x_d]` for each location.
    pub fn with_intercept(y: &[T], locations: &[T], dims: usize) -> Result<Self, KrsError> {
        check_shape("locations", locations.len(), y.len(), dims)?;
        Ok(Self {
            y: y.to_vec(),
            locations: locations.to_vec(),
            design: intercept_design(locations, dims),
            dims,
            n_coeffs: dims + 1,
        })
    }

    /// Location of observation `i`.
    #[inline]
    pub fn location(&self, i: usize) -> &[T] {
        &self.locations[i * self.dims..(i + 1) * self.dims]
    }

    /// Design row of observation `i`.
    #[inline]
    pub fn design_row(&self, i: usize) -> &[T] {
        &self.design[i * self.n_coeffs..(i + 1) * self.n_coeffs]
    }
}

impl<T: Float + Send + Sync> Sample<T> for DesignSample<T> {
    type Query = DesignQuery<T>;

    fn len(&self) -> usize {
        self.y.len()
    }

    fn response(&self) -> &[T] {
        &self.y
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            y: gather_rows(&self.y, 1, indices),
            locations: gather_rows(&self.locations, self.dims, indices),
            design: gather_rows(&self.design, self.n_coeffs, indices),
            dims: self.dims,
            n_coeffs: self.n_coeffs,
        }
    }

    fn query_subset(&self, indices: &[usize]) -> DesignQuery<T> {
        DesignQuery {
            locations: gather_rows(&self.locations, self.dims, indices),
            design: gather_rows(&self.design, self.n_coeffs, indices),
            dims: self.dims,
            n_coeffs: self.n_coeffs,
        }
    }

    fn as_query(&self) -> DesignQuery<T> {
        DesignQuery {
            locations: self.locations.clone(),
            design: self.design.clone(),
            dims: self.dims,
            n_coeffs: self.n_coeffs,
        }
    }
}

// ============================================================================
// Design Query
// ============================================================================

/// Evaluation points for local linear regression.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignQuery<T> {
    /// Query locations, row-major (n0 x dims).
    pub locations: Vec<T>,

    /// Query design rows, row-major (n0 x n_coeffs).
    pub design: Vec<T>,

    /// Dimension of the kernel locations.
    pub dims: usize,

    /// Number of regression coefficients.
    pub n_coeffs: usize,
}

impl<T: Float> DesignQuery<T> {
    /// Create a query set from explicit locations and design rows.
    pub fn new(
        locations: &[T],
        dims: usize,
        design: &[T],
        n_coeffs: usize,
    ) -> Result<Self, KrsError> {
        if dims == 0 || n_coeffs == 0 {
            return Err(KrsError::InvalidInput(
                "query dimensions and coefficient count must be positive".into(),
            ));
        }
        let rows = locations.len() / dims;
        check_shape("query locations", locations.len(), rows, dims)?;
        check_shape("query design", design.len(), rows, n_coeffs)?;
        Ok(Self {
            locations: locations.to_vec(),
            design: design.to_vec(),
            dims,
            n_coeffs,
        })
    }

    /// Create a query set whose design is `[1, x_1, ..., x_d]` for each location.
    pub fn with_intercept(locations: &[T], dims: usize) -> Result<Self, KrsError> {
        if dims == 0 {
            return Err(KrsError::InvalidInput("dims must be positive".into()));
        }
        let rows = locations.len() / dims;
        check_shape("query locations", locations.len(), rows, dims)?;
        Ok(Self {
            locations: locations.to_vec(),
            design: intercept_design(locations, dims),
            dims,
            n_coeffs: dims + 1,
        })
    }

    /// Number of query points.
    #[inline]
    pub fn len(&self) -> usize {
        if self.dims == 0 {
            0
        } else {
            self.locations.len() / self.dims
        }
    }

    /// Whether the query set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Location of query point `i`.
    #[inline]
    pub fn location(&self, i: usize) -> &[T] {
        &self.locations[i * self.dims..(i + 1) * self.dims]
    }

    /// Design row of query point `i`.
    #[inline]
    pub fn design_row(&self, i: usize) -> &[T] {
        &self.design[i * self.n_coeffs..(i + 1) * self.n_coeffs]
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_shape(what: &'static str, got: usize, rows: usize, width: usize) -> Result<(), KrsError> {
    if width == 0 {
        return Err(KrsError::InvalidInput(
            "matrix width must be positive".into(),
        ));
    }
    if got != rows * width {
        return Err(KrsError::DimensionMismatch {
            what,
            expected: rows * width,
            got,
        });
    }
    Ok(())
}

fn intercept_design<T: Float>(locations: &[T], dims: usize) -> Vec<T> {
    let mut design = Vec::with_capacity(locations.len() / dims * (dims + 1));
    for row in locations.chunks_exact(dims) {
        design.push(T::one());
        design.extend_from_slice(row);
    }
    design
}
