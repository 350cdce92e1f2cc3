//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer runs configured smoothers for the fluent API:
//! - Fixed-bandwidth fits and cross-validated fits behind one entry point
//! - Result types with summary formatting
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Result types.
pub mod output;
