//! Error types for kernel regression smoothing.
//!
//! ## Purpose
//!
//! This module defines every failure a smoother or the cross-validation
//! driver can report, from malformed inputs to numerical breakdowns in the
//! kernel weights or the weighted least squares solve.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, indices, bandwidths).
//! * **Classified**: Every variant maps to an [`ErrorKind`] so callers can tell
//!   bad arguments from numerical failures without matching each variant.
//! * **No-std**: Uses `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Invalid arguments**: Empty or mismatched inputs, non-finite values,
//!    non-positive bandwidths, fold counts out of range, empty grids.
//! 2. **Numerical errors**: Bandwidth matrices that are not positive-definite,
//!    rank-deficient weighted designs, undefined kernel ratios or vanishing scales.
//!
//! ## Invariants
//!
//! * A failed fit never yields partial output; the error replaces the result.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Broad category of a [`KrsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed sizes, out-of-range parameters or non-finite inputs.
    InvalidArgument,

    /// The computation itself broke down (factorization, solve or normalization).
    Numerical,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel regression smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KrsError {
    /// The training sample is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` must have the same number of observations.
    MismatchedInputs {
        /// Number of observations in `x`.
        x_len: usize,
        /// Number of observations in `y`.
        y_len: usize,
    },

    /// A matrix argument does not have the expected shape.
    DimensionMismatch {
        /// Name of the offending argument.
        what: &'static str,
        /// Expected number of elements (rows * columns).
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Scalar bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// Bandwidth matrix is not symmetric.
    AsymmetricBandwidth {
        /// Row of the first asymmetric entry.
        row: usize,
        /// Column of the first asymmetric entry.
        col: usize,
    },

    /// Fold count must satisfy `2 <= k <= n`.
    InvalidFolds {
        /// Requested number of folds.
        k: usize,
        /// Number of observations.
        n: usize,
    },

    /// The candidate grid for cross-validation is empty.
    EmptyGrid,

    /// A supplied fold permutation is not a permutation of `0..n`.
    InvalidPermutation {
        /// Number of observations.
        n: usize,
    },

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Bandwidth matrix has no Cholesky factor (not positive-definite).
    NotPositiveDefinite,

    /// Weighted design matrix is rank-deficient at a query point.
    RankDeficient {
        /// Index of the query point being fitted.
        index: usize,
        /// Number of columns in the design matrix.
        columns: usize,
    },

    /// Kernel ratio is undefined at a query point (no neighbours or a non-finite sum).
    ZeroWeightSum {
        /// Index of the query point.
        index: usize,
    },

    /// Smoothed absolute residual is zero, so the local scale cannot be inverted.
    ZeroScale {
        /// Index of the query point.
        index: usize,
    },
}

impl KrsError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPositiveDefinite
            | Self::RankDeficient { .. }
            | Self::ZeroWeightSum { .. }
            | Self::ZeroScale { .. } => ErrorKind::Numerical,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Whether this error reports a numerical breakdown.
    pub const fn is_numerical(&self) -> bool {
        matches!(self.kind(), ErrorKind::Numerical)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KrsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::DimensionMismatch {
                what,
                expected,
                got,
            } => {
                write!(f, "Dimension mismatch in {what}: expected {expected} values, got {got}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::AsymmetricBandwidth { row, col } => {
                write!(f, "Bandwidth matrix is not symmetric at ({row}, {col})")
            }
            Self::InvalidFolds { k, n } => {
                write!(f, "Invalid fold count: {k} (must be between 2 and {n})")
            }
            Self::EmptyGrid => write!(f, "Candidate grid is empty"),
            Self::InvalidPermutation { n } => {
                write!(f, "Invalid permutation: expected a permutation of 0..{n}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::NotPositiveDefinite => {
                write!(f, "Bandwidth matrix is not positive-definite")
            }
            Self::RankDeficient { index, columns } => {
                write!(
                    f,
                    "Weighted design is rank-deficient at query point {index} ({columns} columns)"
                )
            }
            Self::ZeroWeightSum { index } => {
                write!(f, "Kernel weighted mean is undefined at query point {index}")
            }
            Self::ZeroScale { index } => {
                write!(f, "Local residual scale is zero at query point {index}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KrsError {}
