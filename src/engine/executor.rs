//! Execution engine for kernel regression.
//!
//! ## Purpose
//!
//! This module runs a configured smoother: either a single fit with a fixed
//! smoothing parameter, or a cross-validated search over a candidate grid
//! followed by a refit with the winner. The fluent API builders hand their
//! validated configuration to [`KrsExecutor`].
//!
//! ## Design notes
//!
//! * **Single entry point**: Both paths go through [`KrsExecutor::run`], so
//!   the builders never touch the CV driver directly.
//! * **Owned config**: [`ExecutorConfig`] owns its grid and permutation so
//!   that a built model does not borrow the caller's slices.
//!
//! ## Invariants
//!
//! * When cross-validation is configured, the fixed parameter is ignored.
//! * Output fitted values have one entry per query point.
//!
//! ## Non-goals
//!
//! * This module does not validate builder-level settings (see `build()`).
//! * This module does not format results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;

// Internal dependencies
use crate::algorithms::smoother::{QueryOf, Smoother};
use crate::evaluation::cv::{CVConfig, CVKind, CvOutcome, KFold, LOOCV};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::Sample;

// ============================================================================
// Configuration
// ============================================================================

/// Cross-validation settings captured from a [`CVConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct CvSettings<P> {
    /// Cross-validation scheme.
    pub kind: CVKind,

    /// Candidate grid.
    pub grid: Vec<P>,

    /// Fold shuffle seed.
    pub seed: Option<u64>,

    /// Explicit fold permutation.
    pub permutation: Option<Vec<usize>>,
}

impl<P: Clone> CvSettings<P> {
    /// Copy the settings out of a borrowed configuration.
    pub fn from_config(config: &CVConfig<'_, P>) -> Self {
        Self {
            kind: config.kind(),
            grid: config.grid().to_vec(),
            seed: config.get_seed(),
            permutation: config.get_permutation().map(|p| p.to_vec()),
        }
    }

    /// Borrow the settings back as a [`CVConfig`].
    pub fn as_config(&self) -> CVConfig<'_, P> {
        let mut config = match self.kind {
            CVKind::KFold(k) => KFold(k, &self.grid),
            CVKind::LOOCV => LOOCV(&self.grid),
        };
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if let Some(perm) = &self.permutation {
            config = config.permutation(perm);
        }
        config
    }
}

/// Configuration for one execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorConfig<P> {
    /// Fixed smoothing parameter, used when no cross-validation is configured.
    pub param: Option<P>,

    /// Cross-validation settings.
    pub cv: Option<CvSettings<P>>,
}

impl<P> Default for ExecutorConfig<P> {
    fn default() -> Self {
        Self {
            param: None,
            cv: None,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Output of one execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T, P> {
    /// Fitted values at the query points.
    pub fitted: Vec<T>,

    /// Smoothing parameter used for the fitted values.
    pub param: P,

    /// Mean fold MSE per candidate (if CV was performed).
    pub cv_scores: Option<Vec<T>>,

    /// Grid position of the selected candidate (if CV was performed).
    pub cv_best_index: Option<usize>,
}

impl<T, P> From<CvOutcome<T, P>> for ExecutorOutput<T, P> {
    fn from(outcome: CvOutcome<T, P>) -> Self {
        Self {
            fitted: outcome.fitted,
            param: outcome.best_param,
            cv_scores: Some(outcome.scores),
            cv_best_index: Some(outcome.best_index),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a smoother according to an [`ExecutorConfig`].
pub struct KrsExecutor;

impl KrsExecutor {
    /// Fit `smoother` on `sample` and evaluate at `query` (or the training points).
    pub fn run<T, S>(
        smoother: &S,
        sample: &S::Sample,
        query: Option<&QueryOf<T, S>>,
        config: &ExecutorConfig<S::Param>,
    ) -> Result<ExecutorOutput<T, S::Param>, KrsError>
    where
        T: FloatLinalg,
        S: Smoother<T>,
    {
        if let Some(cv) = &config.cv {
            debug!("{} fit with {:?} bandwidth selection", smoother.name(), cv.kind);
            let cv_config = cv.as_config();
            let outcome = match query {
                Some(q) => cv_config.run_with_query(smoother, sample, q)?,
                None => cv_config.run(smoother, sample)?,
            };
            return Ok(outcome.into());
        }

        let param = config.param.clone().ok_or_else(|| {
            KrsError::InvalidInput("a bandwidth or a cross-validation grid is required".into())
        })?;
        smoother.validate_param(&param)?;

        debug!("{} fit with fixed bandwidth {:?}", smoother.name(), param);
        let fitted = match query {
            Some(q) => smoother.smooth(sample, q, &param)?,
            None => smoother.smooth(sample, &sample.as_query(), &param)?,
        };

        Ok(ExecutorOutput {
            fitted,
            param,
            cv_scores: None,
            cv_best_index: None,
        })
    }
}
