//! Layer 6: View
//!
//! # Purpose
//!
//! This layer keeps the state a chart renders from. It replaces any global
//! chart handle with an owned value passed to whoever draws.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: View ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Chart view state.
pub mod chart;
