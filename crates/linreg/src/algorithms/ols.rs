//! Closed-form ordinary least squares for a single predictor.
//!
//! ## Purpose
//!
//! This module solves the normal equations for the line y = slope·x + intercept
//! that minimizes the squared vertical distances to a set of points.
//!
//! ## Design notes
//!
//! * **Closed form**: slope = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)², which equals
//!   (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²); intercept = ȳ − slope·x̄.
//! * **Raw**: `solve` performs no validation. With constant x the
//!   denominator is zero and the result is non-finite; the engine decides
//!   what to do with that via [`DegeneratePolicy`].
//!
//! ## Invariants
//!
//! * The result holds no reference to the input points.
//! * Solving the same sums twice yields bit-identical output.

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::sums::LinearSums;

// ============================================================================
// Degenerate Input Policy
// ============================================================================

/// Behavior when a quotient is undefined because one axis has no variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegeneratePolicy {
    /// Fail with `RegressionError::DegenerateInput` (default).
    #[default]
    Reject,

    /// Return the non-finite slope, intercept or R² unchanged.
    Propagate,
}

// ============================================================================
// Regression Result
// ============================================================================

/// Best-fit line produced by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionResult<T> {
    /// Change in y per unit x.
    pub slope: T,

    /// Value of y at x = 0.
    pub intercept: T,

    /// Number of points the line was fitted to.
    pub n: usize,
}

impl<T: Float> RegressionResult<T> {
    /// Build a line from explicit parameters.
    pub fn new(slope: T, intercept: T) -> Self {
        Self {
            slope,
            intercept,
            n: 0,
        }
    }

    /// Solve the normal equations from accumulated moments.
    pub fn solve(sums: &LinearSums<T>) -> Self {
        let slope = sums.sxy / sums.sxx;
        let intercept = sums.mean_y - slope * sums.mean_x;
        Self {
            slope,
            intercept,
            n: sums.n,
        }
    }

    /// Evaluate the line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Whether both parameters are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}
