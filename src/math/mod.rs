//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the smoothers:
//! - Gaussian density for scalar kernel weights
//! - Multivariate Gaussian density evaluated through a Cholesky factor
//! - Linear algebra bridge (Cholesky, QR least squares) over nalgebra
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel density.
pub mod kernel;

/// Linear algebra backend.
pub mod linalg;

/// Multivariate normal density.
pub mod mvn;
