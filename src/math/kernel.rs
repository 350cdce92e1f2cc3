//! Gaussian kernel for scalar-covariate smoothing.
//!
//! ## Purpose
//!
//! This module provides the Gaussian density used as the kernel of the
//! Nadaraya-Watson smoothers. The weight of a training point `x_j` for a
//! query `x0` is the normal density of `x_j` with mean `x0` and standard
//! deviation equal to the bandwidth.
//!
//! ## Design notes
//!
//! * **Precomputation**: [`GaussianKernel`] caches `1 / bandwidth` so the
//!   inner loop is one multiply and one `exp`.
//! * **Shifted ratio**: [`GaussianKernel::weighted_mean`] subtracts the
//!   smallest squared distance from every exponent. The normalizing
//!   constant cancels in the ratio, the nearest point gets weight one, and
//!   the denominator cannot underflow however far the query lies.
//!
//! ## Invariants
//!
//! * Weights lie in `(0, 1]` and are symmetric in `(x, center)`.
//! * A non-empty neighbourhood of finite points always has a positive weight sum.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights across a neighborhood.
//! * This module does not validate the bandwidth (see the validator).

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, used in Gaussian density calculations.
pub const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

/// Natural log of 2*pi.
pub const LN_2PI: f64 = 1.8378770664093454835606594728112352797227949472756_f64;

// ============================================================================
// Density
// ============================================================================

/// Normal density of `x` with the given `mean` and standard deviation `sd`.
#[inline]
pub fn gaussian_density<T: Float>(x: T, mean: T, sd: T) -> T {
    let z = (x - mean) / sd;
    let half = T::from(0.5).unwrap();
    (-half * z * z).exp() / (sd * T::from(SQRT_2PI).unwrap())
}

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Gaussian kernel with a fixed bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    bandwidth: T,
    inv_bandwidth: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel with standard deviation `bandwidth`.
    ///
    /// The bandwidth is assumed positive and finite.
    #[inline]
    pub fn new(bandwidth: T) -> Self {
        Self {
            bandwidth,
            inv_bandwidth: bandwidth.recip(),
        }
    }

    /// The kernel's standard deviation.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Nadaraya-Watson ratio `sum(w_j * v_j) / sum(w_j)` at `center`.
    ///
    /// Returns `None` for an empty neighbourhood or a non-finite result.
    #[inline]
    pub fn weighted_mean(&self, xs: &[T], values: &[T], center: T) -> Option<T> {
        self.weighted_mean_of(xs.iter().copied().zip(values.iter().copied()), center)
    }

    /// [`weighted_mean`](Self::weighted_mean) over `(x_j, v_j)` pairs.
    ///
    /// The iterator is traversed twice: once for the smallest squared
    /// distance, once for the shifted sums.
    pub fn weighted_mean_of<I>(&self, pairs: I, center: T) -> Option<T>
    where
        I: Iterator<Item = (T, T)> + Clone,
    {
        let min_sq = pairs
            .clone()
            .map(|(xj, _)| self.scaled_sq(xj, center))
            .fold(T::infinity(), T::min);
        if !min_sq.is_finite() {
            return None;
        }

        let half = T::from(0.5).unwrap();
        let mut sum_wv = T::zero();
        let mut sum_w = T::zero();
        for (xj, vj) in pairs {
            let w = (-half * (self.scaled_sq(xj, center) - min_sq)).exp();
            sum_wv = sum_wv + w * vj;
            sum_w = sum_w + w;
        }

        let mean = sum_wv / sum_w;
        if mean.is_finite() { Some(mean) } else { None }
    }

    #[inline]
    fn scaled_sq(&self, x: T, center: T) -> T {
        let z = (x - center) * self.inv_bandwidth;
        z * z
    }
}
