//! Result types returned by the fluent API.
//!
//! ## Purpose
//!
//! This module holds the fitted values together with the configuration that
//! produced them (bandwidth, method, cross-validation scores) and renders
//! them as a plain-text summary table.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::local_linear::BandwidthMatrix;
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Scalar Result
// ============================================================================

/// Output of a kernel mean or mean-variance fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KrsResult<T> {
    /// Query points.
    pub x: Vec<T>,

    /// Fitted values at the query points.
    pub y: Vec<T>,

    /// Number of training observations.
    pub n_train: usize,

    /// Smoother that produced the fit.
    pub method: &'static str,

    /// Bandwidth used (selected by CV or configured).
    pub bandwidth: T,

    /// Mean fold MSE for each candidate bandwidth (if CV was performed).
    pub cv_scores: Option<Vec<T>>,
}

impl<T: Float + Display> Display for KrsResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_train)?;
        writeln!(f, "  Method: {}", self.method)?;
        writeln!(f, "  Bandwidth: {}", self.bandwidth)?;
        if let Some(scores) = &self.cv_scores {
            write_cv_scores(f, scores)?;
        }

        writeln!(f)?;
        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "  {:>6} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "  --------------------")?;
        for (x, y) in self.x.iter().zip(self.y.iter()) {
            writeln!(f, "  {:>6.2} {:>12.5}", x, y)?;
        }
        Ok(())
    }
}

// ============================================================================
// Local Linear Result
// ============================================================================

/// Output of a local linear fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalLinearResult<T> {
    /// Query locations, row-major (n0 x dims).
    pub locations: Vec<T>,

    /// Dimension of the locations.
    pub dims: usize,

    /// Fitted values at the query locations.
    pub y: Vec<T>,

    /// Number of training observations.
    pub n_train: usize,

    /// Bandwidth matrix used (selected by CV or configured).
    pub bandwidth: BandwidthMatrix<T>,

    /// Mean fold MSE for each candidate matrix (if CV was performed).
    pub cv_scores: Option<Vec<T>>,
}

impl<T: FloatLinalg> Display for LocalLinearResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let dims = self.dims;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_train)?;
        writeln!(f, "  Method: local linear")?;
        writeln!(f, "  Dimensions: {}", dims)?;
        write!(f, "  Bandwidth diagonal:")?;
        for i in 0..dims {
            write!(f, " {}", self.bandwidth.get(i, i))?;
        }
        writeln!(f)?;
        if let Some(scores) = &self.cv_scores {
            write_cv_scores(f, scores)?;
        }

        writeln!(f)?;
        writeln!(f, "Smoothed Data:")?;
        write!(f, " ")?;
        for d in 0..dims {
            write!(f, " {:>8}", format!("X{}", d + 1))?;
        }
        writeln!(f, " {:>12}", "Y_smooth")?;
        writeln!(f, "  {}", "-".repeat(dims * 9 + 12))?;
        if dims > 0 {
            for (row, y) in self.locations.chunks_exact(dims).zip(self.y.iter()) {
                write!(f, " ")?;
                for v in row {
                    write!(f, " {:>8.3}", v)?;
                }
                writeln!(f, " {:>12.5}", y)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn write_cv_scores<T: Display>(f: &mut Formatter<'_>, scores: &[T]) -> FmtResult {
    write!(f, "  CV scores (MSE):")?;
    for s in scores {
        write!(f, " {:.6}", s)?;
    }
    writeln!(f)
}
