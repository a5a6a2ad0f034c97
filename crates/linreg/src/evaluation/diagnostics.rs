//! Goodness-of-fit metrics for a fitted line.
//!
//! ## Purpose
//!
//! This module evaluates how well a line explains a point set: the
//! coefficient of determination (R²) plus the residual error metrics RMSE
//! and MAE.
//!
//! ## Design notes
//!
//! * **Residual-based**: Every metric derives from r_i = y_i − ŷ_i.
//! * **Raw**: `calculate_r_squared` evaluates 1 − SS_res/SS_tot as written.
//!   With identical y-values SS_tot is zero and the quotient is NaN or −∞;
//!   the engine applies the degenerate-input policy before calling it.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RMSE and MAE are non-negative.
//! * R² <= 1 whenever SS_tot > 0; R² = 1 is a perfect fit.
//!
//! ## Non-goals
//!
//! * This module does not fit the line.
//! * This module does not provide p-values or standard errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::ols::RegressionResult;
use crate::primitives::point::Point;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Fit-quality metrics for a line against the points it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,
}

/// Residual and total sums of squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumsOfSquares<T> {
    /// Σ(y − ŷ)².
    pub ss_res: T,
    /// Σ(y − ȳ)².
    pub ss_tot: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute every metric for `line` over `points`.
    ///
    /// `r_squared` is supplied by the caller so it can reflect the
    /// degenerate-input policy.
    pub fn compute(points: &[Point<T>], line: &RegressionResult<T>, r_squared: T) -> Self {
        Diagnostics {
            rmse: Self::calculate_rmse(points, line),
            mae: Self::calculate_mae(points, line),
            r_squared,
        }
    }

    // ========================================================================
    // Residuals
    // ========================================================================

    /// Residuals r_i = y_i − ŷ_i, in input order.
    pub fn residuals(points: &[Point<T>], line: &RegressionResult<T>) -> Vec<T> {
        points.iter().map(|p| p.y - line.predict(p.x)).collect()
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// Compute the root mean squared error (RMSE).
    /// RMSE = sqrt((1/n) * sum (y_i - y_hat_i)^2).
    pub fn calculate_rmse(points: &[Point<T>], line: &RegressionResult<T>) -> T {
        if points.is_empty() {
            return T::zero();
        }
        let n_t = T::from(points.len()).unwrap_or(T::one());
        let rss = points.iter().fold(T::zero(), |acc, p| {
            let r = p.y - line.predict(p.x);
            acc + r * r
        });
        (rss / n_t).sqrt()
    }

    /// Compute the mean absolute error (MAE).
    /// MAE = (1/n) * sum |y_i - y_hat_i|.
    pub fn calculate_mae(points: &[Point<T>], line: &RegressionResult<T>) -> T {
        if points.is_empty() {
            return T::zero();
        }
        let n_t = T::from(points.len()).unwrap_or(T::one());
        let sum = points
            .iter()
            .fold(T::zero(), |acc, p| acc + (p.y - line.predict(p.x)).abs());
        sum / n_t
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// SS_res and SS_tot in a single pass after computing the mean.
    pub fn sums_of_squares(points: &[Point<T>], line: &RegressionResult<T>) -> SumsOfSquares<T> {
        let n_t = T::from(points.len()).unwrap_or(T::one());
        let mean = points.iter().fold(T::zero(), |acc, p| acc + p.y) / n_t;

        let (ss_res, ss_tot) = points
            .iter()
            .fold((T::zero(), T::zero()), |(res, tot), p| {
                let residual = p.y - line.predict(p.x);
                let deviation = p.y - mean;
                (res + residual * residual, tot + deviation * deviation)
            });

        SumsOfSquares { ss_res, ss_tot }
    }

    /// Compute the coefficient of determination (R²).
    /// R² = 1 - SS_res / SS_tot.
    pub fn calculate_r_squared(points: &[Point<T>], line: &RegressionResult<T>) -> T {
        let ss = Self::sums_of_squares(points, line);
        T::one() - ss.ss_res / ss.ss_tot
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        Ok(())
    }
}
