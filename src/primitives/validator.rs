//! Input validation for smoother parameters and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions every public smoother and
//! the cross-validation driver run before computing anything. It checks
//! input lengths, finite values and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Bandwidths in (0, inf), folds in [2, n].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Symmetry**: Bandwidth matrices must be symmetric up to rounding.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check positive-definiteness (the Cholesky factorization does).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KrsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration and input data.
///
/// Provides static methods that return `Result<(), KrsError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a scalar-covariate training sample.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), KrsError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(KrsError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(KrsError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every element of `vals` is finite.
    pub fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), KrsError> {
        for (i, &val) in vals.iter().enumerate() {
            if !val.is_finite() {
                return Err(KrsError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a scalar bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), KrsError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(KrsError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a `dims x dims` bandwidth matrix: shape, finiteness, symmetry.
    pub fn validate_bandwidth_matrix<T: Float>(h: &[T], dims: usize) -> Result<(), KrsError> {
        if dims == 0 {
            return Err(KrsError::InvalidInput(
                "bandwidth matrix must have at least one dimension".into(),
            ));
        }
        if h.len() != dims * dims {
            return Err(KrsError::DimensionMismatch {
                what: "bandwidth matrix",
                expected: dims * dims,
                got: h.len(),
            });
        }
        Self::validate_finite(h, "H")?;

        let tol = T::epsilon().sqrt();
        for i in 0..dims {
            for j in (i + 1)..dims {
                let a = h[i * dims + j];
                let b = h[j * dims + i];
                let scale = a.abs().max(b.abs()).max(T::one());
                if (a - b).abs() > tol * scale {
                    return Err(KrsError::AsymmetricBandwidth { row: i, col: j });
                }
            }
        }
        Ok(())
    }

    /// Validate a candidate grid for cross-validation.
    pub fn validate_grid<P>(grid: &[P]) -> Result<(), KrsError> {
        if grid.is_empty() {
            return Err(KrsError::EmptyGrid);
        }
        Ok(())
    }

    /// Validate the number of folds for k-fold cross-validation.
    pub fn validate_kfold(k: usize, n: usize) -> Result<(), KrsError> {
        if k < 2 || k > n {
            return Err(KrsError::InvalidFolds { k, n });
        }
        Ok(())
    }

    /// Validate that `perm` is a permutation of `0..n`.
    pub fn validate_permutation(perm: &[usize], n: usize) -> Result<(), KrsError> {
        if perm.len() != n {
            return Err(KrsError::InvalidPermutation { n });
        }
        let mut seen = vec![false; n];
        for &i in perm {
            if i >= n || seen[i] {
                return Err(KrsError::InvalidPermutation { n });
            }
            seen[i] = true;
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), KrsError> {
        if let Some(param) = duplicate_param {
            return Err(KrsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
