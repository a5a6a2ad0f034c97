//! Uniform sampling of a fitted line.
//!
//! Produces `steps + 1` points from `x_min` to `x_max` inclusive, with
//! x_i = x_min + i·(x_max − x_min)/steps. Callers guarantee `steps >= 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::RegressionResult;
use crate::primitives::point::{Point, Polyline};

/// Default number of intervals used when drawing a regression line.
pub const DEFAULT_STEPS: usize = 100;

/// Sample `line` at `steps + 1` evenly spaced x-values.
pub fn sample_line<T: Float>(
    line: &RegressionResult<T>,
    x_min: T,
    x_max: T,
    steps: usize,
) -> Polyline<T> {
    let step = (x_max - x_min) / T::from(steps).unwrap_or(T::one());
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = x_min + T::from(i).unwrap_or(T::zero()) * step;
        points.push(Point::new(x, line.predict(x)));
    }
    Polyline::from_points(points)
}
