//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the kernel smoothers and the strategy trait that
//! lets the cross-validation driver treat them uniformly:
//! - Nadaraya-Watson kernel mean smoother (scalar covariate)
//! - Mean-variance smoother with residual-adapted bandwidths
//! - Local linear smoother with a multivariate Gaussian kernel
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The `Smoother` strategy trait.
pub mod smoother;

/// Kernel mean (Nadaraya-Watson) smoother.
pub mod mean;

/// Mean-variance smoother.
pub mod mean_variance;

/// Local linear smoother.
pub mod local_linear;
