//! Execution of the regression operations under a degenerate-input policy.
//!
//! ## Purpose
//!
//! This module ties validation, the raw algorithms and the evaluation
//! metrics together. Every public operation of the crate ends up here.
//!
//! ## Design notes
//!
//! * **Validate, then compute**: Inputs pass through [`Validator`] first.
//! * **Policy**: Zero variance in x (fit) or y (score) is either rejected
//!   with `DegenerateInput` or propagated as a non-finite value, per
//!   [`DegeneratePolicy`].
//! * **Stateless**: The executor holds only configuration; every call
//!   recomputes from scratch.
//!
//! ## Invariants
//!
//! * Under `Reject`, every returned line has finite slope and intercept.
//! * `DegenerateInput { axis: X }` is reported only when every x is identical.
//! * Repeated calls with the same input return identical results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::algorithms::ols::{DegeneratePolicy, RegressionResult};
use crate::algorithms::polyline::{sample_line, DEFAULT_STEPS};
use crate::algorithms::synthetic::{generate, SyntheticConfig};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::sums::LinearSums;
use crate::primitives::errors::{Axis, RegressionError};
use crate::primitives::point::{Point, Polyline};

// ============================================================================
// Executor
// ============================================================================

/// Runs regression operations with a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionExecutor {
    /// What to do when an axis has no variance.
    pub policy: DegeneratePolicy,

    /// Default number of polyline intervals.
    pub steps: usize,
}

impl Default for RegressionExecutor {
    fn default() -> Self {
        Self {
            policy: DegeneratePolicy::default(),
            steps: DEFAULT_STEPS,
        }
    }
}

impl RegressionExecutor {
    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the least-squares line through `points`.
    pub fn fit_line<T: Float>(
        &self,
        points: &[Point<T>],
    ) -> Result<RegressionResult<T>, RegressionError> {
        Validator::validate_points(points, Validator::MIN_POINTS)?;

        let sums = LinearSums::from_points(points);
        let fit = RegressionResult::solve(&sums);

        if !sums.x_varies || !fit.is_finite() {
            match self.policy {
                DegeneratePolicy::Reject if !sums.x_varies => {
                    return Err(RegressionError::DegenerateInput { axis: Axis::X });
                }
                DegeneratePolicy::Reject => {
                    // x varies but the quotient still overflowed
                    return Err(RegressionError::InvalidNumericValue(format!(
                        "slope={}, intercept={}",
                        as_f64(fit.slope),
                        as_f64(fit.intercept)
                    )));
                }
                DegeneratePolicy::Propagate => {
                    tracing::warn!(
                        n = fit.n,
                        x_varies = sums.x_varies,
                        slope = as_f64(fit.slope),
                        intercept = as_f64(fit.intercept),
                        "line is not finite; returning it unchanged"
                    );
                }
            }
        }

        tracing::debug!(
            n = fit.n,
            slope = as_f64(fit.slope),
            intercept = as_f64(fit.intercept),
            "fitted line"
        );
        Ok(fit)
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Coefficient of determination of `line` over `points`.
    pub fn score_fit<T: Float>(
        &self,
        points: &[Point<T>],
        line: &RegressionResult<T>,
    ) -> Result<T, RegressionError> {
        if points.len() < Validator::MIN_POINTS {
            return match self.policy {
                DegeneratePolicy::Reject => Err(RegressionError::InsufficientData {
                    got: points.len(),
                    min: Validator::MIN_POINTS,
                }),
                DegeneratePolicy::Propagate => Ok(T::zero()),
            };
        }
        Validator::validate_points(points, Validator::MIN_POINTS)?;

        let ss = Diagnostics::sums_of_squares(points, line);
        let r_squared = T::one() - ss.ss_res / ss.ss_tot;

        if ss.ss_tot == T::zero() {
            match self.policy {
                DegeneratePolicy::Reject => {
                    return Err(RegressionError::DegenerateInput { axis: Axis::Y });
                }
                DegeneratePolicy::Propagate => {
                    tracing::warn!(
                        n = points.len(),
                        r_squared = as_f64(r_squared),
                        "y-values have no variance; returning non-finite R²"
                    );
                }
            }
        }

        Ok(r_squared)
    }

    /// RMSE, MAE and R² of `line` over `points`.
    pub fn diagnostics<T: Float>(
        &self,
        points: &[Point<T>],
        line: &RegressionResult<T>,
    ) -> Result<Diagnostics<T>, RegressionError> {
        let r_squared = self.score_fit(points, line)?;
        Ok(Diagnostics::compute(points, line, r_squared))
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Sample `line` at `steps + 1` evenly spaced points over `[x_min, x_max]`.
    pub fn sample_polyline<T: Float>(
        &self,
        line: &RegressionResult<T>,
        x_min: T,
        x_max: T,
        steps: usize,
    ) -> Result<Polyline<T>, RegressionError> {
        Validator::validate_range(x_min, x_max, "x")?;
        Validator::validate_steps(steps)?;

        tracing::debug!(
            x_min = as_f64(x_min),
            x_max = as_f64(x_max),
            steps,
            "sampling polyline"
        );
        Ok(sample_line(line, x_min, x_max, steps))
    }

    /// Sample `line` across the x-extent of `points` with the default step count.
    pub fn sample_over<T: Float>(
        &self,
        line: &RegressionResult<T>,
        points: &[Point<T>],
    ) -> Result<Polyline<T>, RegressionError> {
        let (x_min, x_max) = x_extent(points).ok_or(RegressionError::InsufficientData {
            got: 0,
            min: 1,
        })?;
        self.sample_polyline(line, x_min, x_max, self.steps)
    }

    // ========================================================================
    // Synthetic Data
    // ========================================================================

    /// Generate noisy demo points after validating `config`.
    pub fn generate_synthetic_points<T: Float, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &SyntheticConfig<T>,
    ) -> Result<Vec<Point<T>>, RegressionError> {
        Validator::validate_synthetic(config)?;
        let points = generate(rng, config);
        tracing::debug!(count = points.len(), "generated synthetic points");
        Ok(points)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Smallest and largest x among `points`, or `None` when empty.
pub fn x_extent<T: Float>(points: &[Point<T>]) -> Option<(T, T)> {
    let first = points.first()?;
    Some(
        points
            .iter()
            .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))),
    )
}

#[inline]
fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
