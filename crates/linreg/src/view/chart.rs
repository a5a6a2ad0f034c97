//! Owned view state for a scatter-plus-line chart.
//!
//! ## Purpose
//!
//! This module holds what a chart needs to redraw: the scatter points, the
//! sampled regression line, and whether each dataset is currently shown.
//! A rendering surface reads from it; nothing here draws.
//!
//! ## Design notes
//!
//! * **Owned**: Each chart gets its own `ChartView`; there is no shared
//!   process-wide chart handle.
//! * **Partial updates**: `update` replaces the line only when a new one is
//!   supplied, so callers can refresh points without losing the line.
//! * **Visibility**: Both datasets start hidden and are revealed by toggles.
//!
//! ## Invariants
//!
//! * `visible_points` and `visible_line` return data only while the
//!   matching flag is set.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::ols::RegressionResult;
use crate::engine::executor::{x_extent, RegressionExecutor};
use crate::primitives::errors::RegressionError;
use crate::primitives::point::{Point, Polyline};

/// Scatter points, regression line, and their visibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartView<T> {
    points: Vec<Point<T>>,
    line: Option<Polyline<T>>,
    points_visible: bool,
    line_visible: bool,
}

impl<T: Float> Default for ChartView<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Float> ChartView<T> {
    /// Create a view over `points` with no line and both datasets hidden.
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self {
            points,
            line: None,
            points_visible: false,
            line_visible: false,
        }
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Replace the points, and the line when one is given.
    pub fn update(&mut self, points: Vec<Point<T>>, line: Option<Polyline<T>>) {
        self.points = points;
        if let Some(line) = line {
            self.line = Some(line);
        }
    }

    /// Fit the current points and sample the line across their x-extent.
    pub fn refresh_line(
        &mut self,
        executor: &RegressionExecutor,
    ) -> Result<RegressionResult<T>, RegressionError> {
        let fit = executor.fit_line(&self.points)?;
        self.line = Some(executor.sample_over(&fit, &self.points)?);
        Ok(fit)
    }

    /// Drop the line, keeping the points.
    pub fn clear_line(&mut self) {
        self.line = None;
    }

    /// All points, regardless of visibility.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// The sampled line, regardless of visibility.
    pub fn line(&self) -> Option<&Polyline<T>> {
        self.line.as_ref()
    }

    /// Smallest and largest x among the points.
    pub fn x_extent(&self) -> Option<(T, T)> {
        x_extent(&self.points)
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Flip point visibility, returning the new state.
    pub fn toggle_points(&mut self) -> bool {
        self.points_visible = !self.points_visible;
        self.points_visible
    }

    /// Flip line visibility, returning the new state.
    pub fn toggle_line(&mut self) -> bool {
        self.line_visible = !self.line_visible;
        self.line_visible
    }

    /// Whether points are shown.
    pub fn points_visible(&self) -> bool {
        self.points_visible
    }

    /// Whether the line is shown.
    pub fn line_visible(&self) -> bool {
        self.line_visible
    }

    /// Points to draw, if shown.
    pub fn visible_points(&self) -> Option<&[Point<T>]> {
        self.points_visible.then_some(self.points.as_slice())
    }

    /// Line to draw, if shown and sampled.
    pub fn visible_line(&self) -> Option<&Polyline<T>> {
        if self.line_visible {
            self.line.as_ref()
        } else {
            None
        }
    }
}
