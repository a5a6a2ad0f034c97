//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates each operation: it validates input, runs the
//! raw algorithms, applies the degenerate-input policy, and renders
//! results as text.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: View
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

/// Policy-aware execution of every operation.
pub mod executor;

/// Text output and reports.
pub mod output;

/// Input validation.
pub mod validator;
