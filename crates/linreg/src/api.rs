//! High-level API for line fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder
//! that produces a configured [`Regressor`], and free functions that run
//! each operation with the default configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builder with sensible defaults for every parameter.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Type-Safe**: Operations are generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `LinearRegression::new()`.
//! 2. Chain configuration methods (`.degenerate_policy()`, `.polyline_steps()`).
//! 3. Call `.build()` to obtain a [`Regressor`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::engine::executor::RegressionExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::ols::{DegeneratePolicy, RegressionResult};
pub use crate::algorithms::polyline::DEFAULT_STEPS;
pub use crate::algorithms::synthetic::SyntheticConfig;
pub use crate::engine::output::{
    equation_text, format_number, prediction_text, r_squared_text, FitReport,
};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::{Axis, RegressionError};
pub use crate::primitives::point::{points_from_xy, Point, Polyline};
pub use crate::view::chart::ChartView;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Regressor`].
#[derive(Debug, Clone, Default)]
pub struct RegressionBuilder {
    /// Behavior on zero-variance input (default: Reject).
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Intervals used when sampling a line over a point set (default: 100).
    pub polyline_steps: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RegressionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set behavior for zero-variance input.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        if self.degenerate_policy.is_some() {
            self.duplicate_param = Some("degenerate_policy");
        }
        self.degenerate_policy = Some(policy);
        self
    }

    /// Set the number of intervals used by [`Regressor::sample_over`].
    pub fn polyline_steps(mut self, steps: usize) -> Self {
        if self.polyline_steps.is_some() {
            self.duplicate_param = Some("polyline_steps");
        }
        self.polyline_steps = Some(steps);
        self
    }

    /// Validate the configuration and build the regressor.
    pub fn build(self) -> Result<Regressor, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let steps = self.polyline_steps.unwrap_or(DEFAULT_STEPS);
        Validator::validate_steps(steps)?;

        Ok(Regressor {
            executor: RegressionExecutor {
                policy: self.degenerate_policy.unwrap_or_default(),
                steps,
            },
        })
    }
}

// ============================================================================
// Regressor
// ============================================================================

/// Configured entry point for every operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Regressor {
    executor: RegressionExecutor,
}

impl Regressor {
    /// Policy applied to zero-variance input.
    pub fn policy(&self) -> DegeneratePolicy {
        self.executor.policy
    }

    /// Intervals used by [`Regressor::sample_over`].
    pub fn steps(&self) -> usize {
        self.executor.steps
    }

    /// Underlying executor, e.g. for [`ChartView::refresh_line`].
    pub fn executor(&self) -> &RegressionExecutor {
        &self.executor
    }

    /// Fit the least-squares line through `points`.
    pub fn fit<T: Float>(&self, points: &[Point<T>]) -> Result<RegressionResult<T>, RegressionError> {
        self.executor.fit_line(points)
    }

    /// R² of `line` over `points`.
    pub fn score<T: Float>(
        &self,
        points: &[Point<T>],
        line: &RegressionResult<T>,
    ) -> Result<T, RegressionError> {
        self.executor.score_fit(points, line)
    }

    /// RMSE, MAE and R² of `line` over `points`.
    pub fn diagnostics<T: Float>(
        &self,
        points: &[Point<T>],
        line: &RegressionResult<T>,
    ) -> Result<Diagnostics<T>, RegressionError> {
        self.executor.diagnostics(points, line)
    }

    /// Sample `line` at `steps + 1` evenly spaced points over `[x_min, x_max]`.
    pub fn sample<T: Float>(
        &self,
        line: &RegressionResult<T>,
        x_min: T,
        x_max: T,
        steps: usize,
    ) -> Result<Polyline<T>, RegressionError> {
        self.executor.sample_polyline(line, x_min, x_max, steps)
    }

    /// Sample `line` across the x-extent of `points`.
    pub fn sample_over<T: Float>(
        &self,
        line: &RegressionResult<T>,
        points: &[Point<T>],
    ) -> Result<Polyline<T>, RegressionError> {
        self.executor.sample_over(line, points)
    }

    /// Fit `points` and bundle the line with its diagnostics.
    pub fn report<T: Float>(&self, points: &[Point<T>]) -> Result<FitReport<T>, RegressionError> {
        let line = self.fit(points)?;
        let diagnostics = self.diagnostics(points, &line)?;
        Ok(FitReport {
            points: points.to_vec(),
            line,
            diagnostics,
        })
    }

    /// Generate noisy demo points.
    pub fn generate<T: Float, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &SyntheticConfig<T>,
    ) -> Result<Vec<Point<T>>, RegressionError> {
        self.executor.generate_synthetic_points(rng, config)
    }

    /// Fit `points` and return a chart view holding them and the sampled line.
    pub fn chart<T: Float>(&self, points: Vec<Point<T>>) -> Result<ChartView<T>, RegressionError> {
        let mut view = ChartView::new(points);
        view.refresh_line(&self.executor)?;
        Ok(view)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Fit the least-squares line through `points`, rejecting degenerate input.
pub fn fit_line<T: Float>(points: &[Point<T>]) -> Result<RegressionResult<T>, RegressionError> {
    RegressionExecutor::default().fit_line(points)
}

/// R² of `line` over `points`, rejecting zero y-variance.
pub fn score_fit<T: Float>(
    points: &[Point<T>],
    line: &RegressionResult<T>,
) -> Result<T, RegressionError> {
    RegressionExecutor::default().score_fit(points, line)
}

/// Sample `line` at `steps + 1` evenly spaced points over `[x_min, x_max]`.
pub fn sample_polyline<T: Float>(
    line: &RegressionResult<T>,
    x_min: T,
    x_max: T,
    steps: usize,
) -> Result<Polyline<T>, RegressionError> {
    RegressionExecutor::default().sample_polyline(line, x_min, x_max, steps)
}

/// Generate `count` noisy points around y = 8x + 40.
pub fn generate_synthetic_points<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    x_range: (T, T),
    y_range: (T, T),
    noise: T,
) -> Result<Vec<Point<T>>, RegressionError> {
    let config = SyntheticConfig::new(count, x_range, y_range, noise);
    RegressionExecutor::default().generate_synthetic_points(rng, &config)
}

/// Generate demo points from the thread-local random source.
#[cfg(feature = "std")]
pub fn generate_random_points<T: Float>(
    config: &SyntheticConfig<T>,
) -> Result<Vec<Point<T>>, RegressionError> {
    RegressionExecutor::default().generate_synthetic_points(&mut rand::rng(), config)
}
