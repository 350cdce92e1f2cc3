//! Cross-validation for bandwidth selection.
//!
//! ## Purpose
//!
//! This module selects the smoothing parameter of any [`Smoother`] by
//! k-fold or leave-one-out cross-validation, then refits the smoother on
//! the full sample with the winning parameter.
//!
//! ## Design notes
//!
//! * **Strategy injection**: The driver only sees the [`Smoother`] trait, so
//!   scalar bandwidths and bandwidth matrices are selected the same way.
//! * **One partition**: Folds are drawn once per run and shared by every
//!   candidate, so candidates are compared on identical splits.
//! * **Fail fast**: Any fold failure aborts the run. A candidate is never
//!   skipped silently.
//! * **Parallel**: With the `parallel` feature, candidates are scored on the
//!   rayon pool after the folds are fixed. Results match the serial run.
//!
//! ## Key concepts
//!
//! * **Fold score**: Mean squared error over the held-out points of one fold.
//! * **CV score**: Mean of the `k` fold scores of one candidate.
//! * **Selection**: Smallest CV score, first candidate wins ties, NaN never wins.
//!
//! ## Invariants
//!
//! * `2 <= k <= n` and the candidate grid is non-empty.
//! * Training and test sets are disjoint in each fold.
//!
//! ## Non-goals
//!
//! * This module does not provide confidence intervals for CV scores.
//! * This module does not search outside the supplied grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::smoother::{QueryOf, Smoother};
use crate::evaluation::folds::FoldAssignment;
use crate::evaluation::metrics::{mean, mean_squared_error};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::KrsError;
use crate::primitives::sample::{Sample, gather_rows};
use crate::primitives::validator::Validator;

// ============================================================================
// CV Kind
// ============================================================================

/// Cross-validation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CVKind {
    /// K-fold cross-validation with k folds.
    KFold(usize),

    /// Leave-one-out cross-validation (`k = n`, unshuffled).
    #[allow(clippy::upper_case_acronyms)]
    LOOCV,
}

// ============================================================================
// Cross-Validation Configuration
// ============================================================================

/// Cross-validation configuration: scheme, candidate grid and fold source.
#[derive(Debug, Clone)]
pub struct CVConfig<'a, P> {
    kind: CVKind,
    grid: &'a [P],
    seed: Option<u64>,
    permutation: Option<&'a [usize]>,
}

impl<'a, P> CVConfig<'a, P> {
    /// Seed the fold shuffle so that runs are reproducible.
    ///
    /// Ignored by LOOCV and when an explicit permutation is supplied.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cut folds from this permutation of `0..n` instead of shuffling.
    pub fn permutation(mut self, permutation: &'a [usize]) -> Self {
        self.permutation = Some(permutation);
        self
    }

    /// Candidate grid.
    pub fn grid(&self) -> &'a [P] {
        self.grid
    }

    /// Cross-validation scheme.
    pub fn kind(&self) -> CVKind {
        self.kind
    }

    /// Seed, if one was set.
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Explicit permutation, if one was set.
    pub fn get_permutation(&self) -> Option<&'a [usize]> {
        self.permutation
    }

    /// Fold assignment for a sample of `n` observations.
    pub fn folds(&self, n: usize) -> Result<FoldAssignment, KrsError> {
        match self.kind {
            CVKind::LOOCV => FoldAssignment::sequential(n, n),
            CVKind::KFold(k) => match (self.permutation, self.seed) {
                (Some(perm), _) => {
                    if perm.len() != n {
                        return Err(KrsError::InvalidPermutation { n });
                    }
                    FoldAssignment::from_permutation(perm.to_vec(), k)
                }
                (None, Some(seed)) => FoldAssignment::seeded(n, k, seed),
                (None, None) => FoldAssignment::random(n, k),
            },
        }
    }

    /// Cross-validate `smoother` over the grid and refit at the training points.
    pub fn run<T, S>(
        &self,
        smoother: &S,
        sample: &S::Sample,
    ) -> Result<CvOutcome<T, P>, KrsError>
    where
        T: FloatLinalg,
        S: Smoother<T, Param = P>,
    {
        let folds = self.folds(sample.len())?;
        cross_validate(smoother, sample, self.grid, folds, None)
    }

    /// Cross-validate `smoother` over the grid and refit at `query`.
    pub fn run_with_query<T, S>(
        &self,
        smoother: &S,
        sample: &S::Sample,
        query: &QueryOf<T, S>,
    ) -> Result<CvOutcome<T, P>, KrsError>
    where
        T: FloatLinalg,
        S: Smoother<T, Param = P>,
    {
        let folds = self.folds(sample.len())?;
        cross_validate(smoother, sample, self.grid, folds, Some(query))
    }
}

/// Create a K-fold cross-validation configuration.
#[allow(non_snake_case)]
pub fn KFold<P>(k: usize, grid: &[P]) -> CVConfig<'_, P> {
    CVConfig {
        kind: CVKind::KFold(k),
        grid,
        seed: None,
        permutation: None,
    }
}

/// Create a leave-one-out cross-validation configuration.
#[allow(non_snake_case)]
pub fn LOOCV<P>(grid: &[P]) -> CVConfig<'_, P> {
    CVConfig {
        kind: CVKind::LOOCV,
        grid,
        seed: None,
        permutation: None,
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a cross-validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct CvOutcome<T, P> {
    /// Winning grid element.
    pub best_param: P,

    /// Position of the winner in the grid.
    pub best_index: usize,

    /// Mean fold MSE per candidate, in grid order.
    pub scores: Vec<T>,

    /// Per-fold MSE per candidate (`fold_scores[candidate][fold]`).
    pub fold_scores: Vec<Vec<T>>,

    /// Refit of the winner on the full sample.
    pub fitted: Vec<T>,

    /// Folds used for every candidate.
    pub folds: FoldAssignment,
}

// ============================================================================
// Driver
// ============================================================================

/// Training subset and held-out points of one fold.
struct FoldSplit<S, Q, T> {
    train: S,
    test_query: Q,
    test_y: Vec<T>,
}

/// Cross-validate `smoother` over `grid` on the given folds.
///
/// The winner is refit on all of `sample`, evaluated at `final_query` or at
/// the training points when none is given.
pub fn cross_validate<T, S>(
    smoother: &S,
    sample: &S::Sample,
    grid: &[S::Param],
    folds: FoldAssignment,
    final_query: Option<&QueryOf<T, S>>,
) -> Result<CvOutcome<T, S::Param>, KrsError>
where
    T: FloatLinalg,
    S: Smoother<T>,
{
    Validator::validate_grid(grid)?;
    for param in grid {
        smoother.validate_param(param)?;
    }
    if folds.n() != sample.len() {
        return Err(KrsError::DimensionMismatch {
            what: "fold assignment",
            expected: sample.len(),
            got: folds.n(),
        });
    }

    debug!(
        "cross-validating {} smoother: n = {}, k = {}, {} candidates",
        smoother.name(),
        folds.n(),
        folds.k(),
        grid.len()
    );

    let splits: Vec<FoldSplit<S::Sample, QueryOf<T, S>, T>> = (0..folds.k())
        .map(|f| {
            let test = folds.test_indices(f);
            FoldSplit {
                train: sample.subset(&folds.train_indices(f)),
                test_query: sample.query_subset(test),
                test_y: gather_rows(sample.response(), 1, test),
            }
        })
        .collect();

    let fold_scores = score_grid(smoother, &splits, grid)?;
    let scores: Vec<T> = fold_scores.iter().map(|fs| mean(fs)).collect();

    for (i, score) in scores.iter().enumerate() {
        trace!("candidate {} ({:?}): cv mse = {}", i, grid[i], score);
    }

    let best_index = select_best(&scores).ok_or_else(|| {
        KrsError::InvalidNumericValue("every cross-validation score is NaN".into())
    })?;
    let best_param = grid[best_index].clone();

    debug!(
        "selected candidate {} ({:?}) with cv mse {}",
        best_index, best_param, scores[best_index]
    );

    let fitted = match final_query {
        Some(query) => smoother.smooth(sample, query, &best_param)?,
        None => smoother.smooth(sample, &sample.as_query(), &best_param)?,
    };

    Ok(CvOutcome {
        best_param,
        best_index,
        scores,
        fold_scores,
        fitted,
        folds,
    })
}

/// Index of the smallest non-NaN score; the first one wins ties.
pub fn select_best<T: FloatLinalg>(scores: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &s) in scores.iter().enumerate() {
        if s.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if s >= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(feature = "parallel")]
fn score_grid<T, S>(
    smoother: &S,
    splits: &[FoldSplit<S::Sample, QueryOf<T, S>, T>],
    grid: &[S::Param],
) -> Result<Vec<Vec<T>>, KrsError>
where
    T: FloatLinalg,
    S: Smoother<T>,
{
    grid.par_iter()
        .map(|param| score_candidate(smoother, splits, param))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_grid<T, S>(
    smoother: &S,
    splits: &[FoldSplit<S::Sample, QueryOf<T, S>, T>],
    grid: &[S::Param],
) -> Result<Vec<Vec<T>>, KrsError>
where
    T: FloatLinalg,
    S: Smoother<T>,
{
    grid.iter()
        .map(|param| score_candidate(smoother, splits, param))
        .collect()
}

fn score_candidate<T, S>(
    smoother: &S,
    splits: &[FoldSplit<S::Sample, QueryOf<T, S>, T>],
    param: &S::Param,
) -> Result<Vec<T>, KrsError>
where
    T: FloatLinalg,
    S: Smoother<T>,
{
    splits
        .iter()
        .map(|split| {
            let predicted = smoother.smooth(&split.train, &split.test_query, param)?;
            Ok(mean_squared_error(&split.test_y, &predicted))
        })
        .collect()
}
