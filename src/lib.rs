//! # krs-rs: Kernel Regression Smoothing for Rust
//!
//! Gaussian kernel smoothers with cross-validated bandwidth selection:
//! the Nadaraya-Watson kernel mean, a heteroscedastic mean-variance variant,
//! and multivariate local linear regression with a full bandwidth matrix.
//!
//! ## What is kernel regression?
//!
//! Kernel regression estimates `E[y | x]` without a parametric model. Each
//! fitted value is built from the training points near the query point,
//! weighted by a Gaussian kernel whose width (the bandwidth) controls the
//! trade-off between bias and variance:
//!
//! - **Kernel mean**: the fitted value is the kernel-weighted average of the
//!   responses.
//! - **Mean-variance**: the bandwidth is rescaled locally by the inverse of
//!   a smoothed absolute residual, so it widens where the data are quiet.
//! - **Local linear**: a weighted least squares regression is solved at each
//!   query point, with weights from a multivariate normal density.
//!
//! The bandwidth can be fixed or chosen from a candidate grid by k-fold or
//! leave-one-out cross-validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use krs_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! // Build the model
//! let model = KernelRegression::new()
//!     .bandwidth(1.0)     // Gaussian standard deviation
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), KrsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Method: kernel mean
//!   Bandwidth: 1
//!
//! Smoothed Data:
//!        X     Y_smooth
//!   --------------------
//!     1.00      3.06827
//!     2.00      4.28488
//!     3.00      6.02210
//!     4.00      7.75570
//!     5.00      8.90786
//! ```
//!
//! ### Cross-validated bandwidth
//!
//! ```rust
//! use krs_rs::prelude::*;
//!
//! let x: Vec<f64> = (0..50).map(|i| i as f64 / 49.0).collect();
//! let y: Vec<f64> = x.iter().map(|&v| (6.0 * v).sin()).collect();
//!
//! let model = KernelRegression::new()
//!     .cross_validate(KFold(5, &[0.02, 0.06, 0.1, 0.5]).seed(42))
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.cv_scores.as_ref().map(|s| s.len()), Some(4));
//! # Result::<(), KrsError>::Ok(())
//! ```
//!
//! ### Local linear regression
//!
//! ```rust
//! use krs_rs::prelude::*;
//!
//! // y = 1 + x1 + 2 * x2 on five points in the plane
//! let locations: Vec<f64> = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.5, 0.5];
//! let y: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 2.5];
//! let sample = DesignSample::with_intercept(&y, &locations, 2)?;
//!
//! let model = LocalLinearRegression::new()
//!     .bandwidth(BandwidthMatrix::isotropic(0.5, 2)?)
//!     .build()?;
//!
//! let result = model.fit(&sample)?;
//! assert!((result.y[4] - 2.5).abs() < 1e-9);
//! # Result::<(), KrsError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default     | Range/Options                | Description                                  | Builder          |
//! |--------------------|-------------|------------------------------|----------------------------------------------|------------------|
//! | **bandwidth**      | None        | (0, inf) or SPD matrix       | Kernel standard deviation / covariance       | Both             |
//! | **method**         | `Mean`      | `Mean`, `MeanVariance`       | Scalar smoother variant                      | KernelRegression |
//! | **residual_mode**  | `InSample`  | `InSample`, `LeaveOneOut`    | First-pass residuals of mean-variance        | KernelRegression |
//! | **cross_validate** | None        | `KFold(k, grid)`, `LOOCV`    | Bandwidth selection over a candidate grid    | Both             |
//!
//! Either a bandwidth or a cross-validation grid must be given. When both are
//! set, cross-validation wins. Setting a parameter twice fails at `build()`.
//!
//! ## Cross-validation
//!
//! Folds are cut from one permutation of `0..n` per run: fold `f` holds
//! the permuted positions `[floor(f*n/k), floor((f+1)*n/k))`. Use `.seed(s)`
//! for reproducible shuffles or `.permutation(p)` to supply the order
//! directly. Every candidate is scored on the same folds by mean held-out
//! squared error. The first minimum in grid order wins.
//!
//! ## Errors
//!
//! Every fallible operation returns `Result<_, KrsError>`. Errors are
//! classified by [`KrsError::kind`](prelude::KrsError::kind) into invalid
//! arguments (bad shapes, non-positive bandwidths, fold counts outside
//! `[2, n]`, empty grids) and numerical failures (non-positive-definite
//! bandwidth matrices, rank-deficient local designs, undefined kernel ratios
//! or vanishing residual scales).
//!
//! ## Feature flags
//!
//! - `std` (default): standard library support and OS-seeded shuffles.
//! - `parallel`: scores cross-validation candidates and local linear query
//!   points on the rayon thread pool.
//!
//! Without `std` the crate is `no_std` + `alloc`.
//!
//! ## References
//!
//! - Nadaraya, E. A. (1964). "On Estimating Regression"
//! - Watson, G. S. (1964). "Smooth Regression Analysis"
//! - Fan, J. & Gijbels, I. (1996). "Local Polynomial Modelling and Its Applications"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, samples and validation.
mod primitives;

// Layer 2: Math - Gaussian densities and the linear algebra bridge.
mod math;

// Layer 3: Algorithms - the smoother strategy and its implementations.
mod algorithms;

// Layer 4: Evaluation - folds, error metrics and cross-validation.
mod evaluation;

// Layer 5: Engine - fit orchestration and result types.
mod engine;

// High-level fluent API.
//
// Provides the `KernelRegression` and `LocalLinearRegression` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use krs_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BandwidthMatrix, DesignQuery, DesignSample, ErrorKind, KFold,
        KernelRegressionBuilder as KernelRegression, KrsError, KrsResult, LOOCV,
        LocalLinearBuilder as LocalLinearRegression, LocalLinearResult,
        ResidualMode::{InSample, LeaveOneOut},
        SmoothingMethod::{Mean, MeanVariance},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[doc(hidden)]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
