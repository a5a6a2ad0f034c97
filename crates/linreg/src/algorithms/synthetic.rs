//! Synthetic scatter data for demos and tests.
//!
//! ## Purpose
//!
//! This module generates noisy points around a known line so teaching pages
//! and tests have something to fit. It is a convenience generator, not a
//! statistical model.
//!
//! ## Design notes
//!
//! * **Noise**: One-sided uniform noise in `[0, noise)` is added to the line.
//! * **Clamping**: y is clamped into the y range before rounding.
//! * **Rounding**: x to one decimal, y to an integer, both half-up.
//! * **Randomness**: The random source is injected, so seeded generators
//!   give reproducible data.
//!
//! ## Invariants
//!
//! * Exactly `count` points are produced, labeled "Point 1" to "Point {count}".
//! * Every y lies in the y range; every x lies in the x range up to rounding.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::rounding::{clamp, round_half_up};
use crate::primitives::point::Point;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntheticConfig<T> {
    /// Number of points to generate.
    pub count: usize,

    /// Range x is drawn from, `(lo, hi)`.
    pub x_range: (T, T),

    /// Range y is clamped into, `(lo, hi)`.
    pub y_range: (T, T),

    /// Upper bound of the additive noise.
    pub noise: T,

    /// Slope of the underlying line.
    pub slope: T,

    /// Intercept of the underlying line.
    pub intercept: T,
}

impl<T: Float> Default for SyntheticConfig<T> {
    fn default() -> Self {
        let c = |v: f64| T::from(v).unwrap_or(T::zero());
        Self {
            count: 8,
            x_range: (c(1.0), c(8.0)),
            y_range: (c(40.0), c(100.0)),
            noise: c(20.0),
            slope: c(8.0),
            intercept: c(40.0),
        }
    }
}

impl<T: Float> SyntheticConfig<T> {
    /// Default line and noise with explicit count and ranges.
    pub fn new(count: usize, x_range: (T, T), y_range: (T, T), noise: T) -> Self {
        Self {
            count,
            x_range,
            y_range,
            noise,
            ..Self::default()
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate `config.count` noisy points around `config.slope·x + config.intercept`.
///
/// The configuration is assumed valid (ordered ranges, finite non-negative noise).
pub fn generate<T: Float, R: Rng + ?Sized>(rng: &mut R, config: &SyntheticConfig<T>) -> Vec<Point<T>> {
    let (x_lo, x_hi) = config.x_range;
    let (y_lo, y_hi) = config.y_range;

    let mut points = Vec::with_capacity(config.count);
    for i in 1..=config.count {
        let x = unit::<T, R>(rng) * (x_hi - x_lo) + x_lo;
        let y = x * config.slope + config.intercept + unit::<T, R>(rng) * config.noise;
        points.push(Point::labeled(
            round_half_up(x, 1),
            round_half_up(clamp(y, y_lo, y_hi), 0),
            format!("Point {i}"),
        ));
    }
    points
}

// Uniform draw from [0, 1).
#[inline]
fn unit<T: Float, R: Rng + ?Sized>(rng: &mut R) -> T {
    T::from(rng.random::<f64>()).unwrap_or(T::zero())
}
