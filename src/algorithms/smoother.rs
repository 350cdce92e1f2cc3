//! The smoother strategy shared by every estimator.
//!
//! ## Purpose
//!
//! This module defines [`Smoother`], the capability "fit on a training
//! sample, predict at a query set, for a given smoothing parameter". The
//! cross-validation driver is written against this trait only, so any
//! estimator can have its parameter chosen by cross-validation.
//!
//! ## Design notes
//!
//! * **Injected**: Smoothers are passed to the driver as values, not inherited.
//! * **Stateless**: A smoother holds configuration only; every call allocates
//!   its own buffers and returns fresh output.
//! * **Associated types**: The parameter (scalar bandwidth or bandwidth
//!   matrix) and the sample layout are fixed per implementation.
//!
//! ## Invariants
//!
//! * `smooth` returns exactly one value per query point, or an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::Sample;

// ============================================================================
// Smoother Trait
// ============================================================================

/// Query set type of a smoother.
pub type QueryOf<T, S> = <<S as Smoother<T>>::Sample as Sample<T>>::Query;

/// A kernel smoother: fit on `train`, predict at `query` with `param`.
pub trait Smoother<T: FloatLinalg>: Sync {
    /// Smoothing parameter (bandwidth) type.
    type Param: Clone + Debug + Send + Sync;

    /// Training sample type.
    type Sample: Sample<T>;

    /// Short human-readable name, used in logs and result summaries.
    fn name(&self) -> &'static str;

    /// Check a parameter before any fitting work is done.
    fn validate_param(&self, param: &Self::Param) -> Result<(), KrsError>;

    /// Fitted values at each query point.
    fn smooth(
        &self,
        train: &Self::Sample,
        query: &QueryOf<T, Self>,
        param: &Self::Param,
    ) -> Result<Vec<T>, KrsError>;
}
