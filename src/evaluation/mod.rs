//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores smoothers on held-out data:
//! - Fold assignment (seeded, permutation-driven or sequential)
//! - Prediction error metrics
//! - Cross-validation driver generic over the smoother strategy
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cross-validation driver and configuration.
pub mod cv;

/// Fold assignment.
pub mod folds;

/// Error metrics.
pub mod metrics;
