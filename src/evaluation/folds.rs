//! Fold assignment for k-fold cross-validation.
//!
//! ## Purpose
//!
//! This module partitions the indices `0..n` into `k` folds. The indices are
//! permuted once (seeded RNG, caller-supplied permutation, or identity) and
//! the permuted order is cut into `k` contiguous blocks.
//!
//! ## Design notes
//!
//! * **Block boundaries**: Fold `f` holds permuted positions
//!   `[floor(f * n / k), floor((f + 1) * n / k))`. The boundaries are a pure
//!   function of `(n, k)`, so fold sizes differ by at most one and the larger
//!   folds are spread evenly rather than piled onto the last fold.
//! * **Reproducible**: A seed fully determines the permutation
//!   (`rand::rngs::StdRng`). Unseeded assignment draws OS entropy when
//!   `std` is available.
//! * **Drawn once**: The assignment is built before any fitting and reused
//!   for every candidate parameter.
//!
//! ## Invariants
//!
//! * Every index in `0..n` belongs to exactly one fold.
//! * Every fold is non-empty when `2 <= k <= n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

// Internal dependencies
use crate::primitives::errors::KrsError;
use crate::primitives::validator::Validator;

/// Seed used for unseeded shuffles when no entropy source is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x6b72_735f_6366_6f6c;

// ============================================================================
// Fold Assignment
// ============================================================================

/// Partition of `0..n` into `k` folds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    permutation: Vec<usize>,
    /// `k + 1` block boundaries into `permutation`.
    bounds: Vec<usize>,
    /// Fold of each original index.
    labels: Vec<usize>,
}

impl FoldAssignment {
    /// Folds from an explicit permutation of `0..n`.
    pub fn from_permutation(permutation: Vec<usize>, k: usize) -> Result<Self, KrsError> {
        let n = permutation.len();
        Validator::validate_kfold(k, n)?;
        Validator::validate_permutation(&permutation, n)?;

        let bounds: Vec<usize> = (0..=k).map(|f| f * n / k).collect();
        let mut labels = vec![0; n];
        for fold in 0..k {
            for &idx in &permutation[bounds[fold]..bounds[fold + 1]] {
                labels[idx] = fold;
            }
        }

        Ok(Self {
            permutation,
            bounds,
            labels,
        })
    }

    /// Folds over the unshuffled order `0..n`.
    pub fn sequential(n: usize, k: usize) -> Result<Self, KrsError> {
        Self::from_permutation((0..n).collect(), k)
    }

    /// Folds over a permutation drawn from `StdRng` seeded with `seed`.
    pub fn seeded(n: usize, k: usize, seed: u64) -> Result<Self, KrsError> {
        Validator::validate_kfold(k, n)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_permutation(shuffled_indices(n, &mut rng), k)
    }

    /// Folds over a freshly drawn random permutation.
    ///
    /// Not reproducible; prefer [`FoldAssignment::seeded`] when results must be repeatable.
    pub fn random(n: usize, k: usize) -> Result<Self, KrsError> {
        Validator::validate_kfold(k, n)?;

        #[cfg(feature = "std")]
        let mut rng = StdRng::from_os_rng();
        #[cfg(not(feature = "std"))]
        let mut rng = StdRng::seed_from_u64(FALLBACK_SEED);

        Self::from_permutation(shuffled_indices(n, &mut rng), k)
    }

    /// Number of folds.
    #[inline]
    pub fn k(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Number of observations.
    #[inline]
    pub fn n(&self) -> usize {
        self.permutation.len()
    }

    /// The permutation the folds were cut from.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Zero-based fold of observation `index`.
    #[inline]
    pub fn fold_of(&self, index: usize) -> usize {
        self.labels[index]
    }

    /// One-based fold label of observation `index`, in `1..=k`.
    #[inline]
    pub fn label_of(&self, index: usize) -> usize {
        self.labels[index] + 1
    }

    /// Held-out indices of `fold`.
    #[inline]
    pub fn test_indices(&self, fold: usize) -> &[usize] {
        &self.permutation[self.bounds[fold]..self.bounds[fold + 1]]
    }

    /// Training indices of `fold` (every index not held out), in permuted order.
    pub fn train_indices(&self, fold: usize) -> Vec<usize> {
        let (start, end) = (self.bounds[fold], self.bounds[fold + 1]);
        let mut out = Vec::with_capacity(self.n() - (end - start));
        out.extend_from_slice(&self.permutation[..start]);
        out.extend_from_slice(&self.permutation[end..]);
        out
    }

    /// Size of every fold.
    pub fn fold_sizes(&self) -> Vec<usize> {
        self.bounds.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

fn shuffled_indices(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}
