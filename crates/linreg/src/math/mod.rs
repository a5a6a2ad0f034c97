//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric building blocks:
//! - Running sums for the least-squares normal equations
//! - Rounding and clamping helpers
//!
//! These carry no regression-specific policy.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: View
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

/// Accumulated sums over a point set.
pub mod sums;

/// Rounding and clamping.
pub mod rounding;
