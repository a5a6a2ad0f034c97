//! Running moments for the closed-form least-squares line.
//!
//! ## Purpose
//!
//! This module accumulates the means of x and y together with the centered
//! sums Σ(x − x̄)² and Σ(x − x̄)(y − ȳ) in a single pass, so the normal
//! equations can be solved without revisiting the data.
//!
//! ## Design notes
//!
//! * **Centered**: Moments are updated incrementally around the running
//!   means. The raw form n·Σx² − (Σx)² cancels to zero when the x-values
//!   share a large offset; the centered form does not.
//! * **Variance flag**: Tracks whether any x differs from the first one, so
//!   a constant-x set is detected exactly rather than through a near-zero
//!   denominator.
//!
//! ## Invariants
//!
//! * `n` equals the number of `push` calls.
//! * `x_varies` is false for fewer than two points.
//! * `sxx` is exactly zero when `x_varies` is false.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

/// Accumulated moments over a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSums<T> {
    /// Number of points accumulated.
    pub n: usize,
    /// Mean of x.
    pub mean_x: T,
    /// Mean of y.
    pub mean_y: T,
    /// Σ(x − x̄)².
    pub sxx: T,
    /// Σ(x − x̄)(y − ȳ).
    pub sxy: T,
    /// Whether at least two distinct x-values were seen.
    pub x_varies: bool,
    first_x: Option<T>,
}

impl<T: Float> Default for LinearSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearSums<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            mean_x: T::zero(),
            mean_y: T::zero(),
            sxx: T::zero(),
            sxy: T::zero(),
            x_varies: false,
            first_x: None,
        }
    }

    /// Accumulate every point in `points`.
    pub fn from_points(points: &[Point<T>]) -> Self {
        let mut sums = Self::new();
        for p in points {
            sums.push(p.x, p.y);
        }
        sums
    }

    /// Add a single observation.
    #[inline]
    pub fn push(&mut self, x: T, y: T) {
        match self.first_x {
            None => self.first_x = Some(x),
            Some(x0) if x != x0 => self.x_varies = true,
            Some(_) => {}
        }
        self.n += 1;
        let n = T::from(self.n).unwrap_or(T::one());

        let dx = x - self.mean_x;
        self.mean_x = self.mean_x + dx / n;
        let dy = y - self.mean_y;
        self.mean_y = self.mean_y + dy / n;

        // Second factor uses the updated mean
        self.sxx = self.sxx + dx * (x - self.mean_x);
        self.sxy = self.sxy + dx * (y - self.mean_y);
    }
}
