//! Layer 3: Algorithms
//!
//! This layer implements the raw computations: the least-squares solve,
//! line sampling, and synthetic data generation. It performs no validation;
//! the engine layer orchestrates it.

// Closed-form least-squares line fit.
pub mod ols;

// Uniform line sampling for drawing.
pub mod polyline;

// Synthetic scatter data.
pub mod synthetic;
