//! Point and polyline value types.
//!
//! ## Purpose
//!
//! This module defines the 2-D point that every operation consumes and the
//! polyline produced when a fitted line is sampled for drawing.
//!
//! ## Design notes
//!
//! * **Value objects**: Points have no identity beyond their coordinates.
//! * **Labels**: An optional display label travels with the point for tables.
//! * **Generics**: Coordinates are generic over `Float` types.
//!
//! ## Invariants
//!
//! * A polyline preserves the order in which it was sampled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::ops::Deref;
use core::slice::Iter;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A 2-D observation, optionally tagged with a display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,

    /// Display label, e.g. "Point 3".
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
}

impl<T: Float> Point<T> {
    /// Create an unlabeled point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y, label: None }
    }

    /// Create a labeled point.
    pub fn labeled(x: T, y: T, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Zip parallel coordinate slices into points, stopping at the shorter one.
pub fn points_from_xy<T: Float>(x: &[T], y: &[T]) -> Vec<Point<T>> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| Point::new(xi, yi))
        .collect()
}

// ============================================================================
// Polyline
// ============================================================================

/// Ordered sequence of points sampled along a line, for drawing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polyline<T> {
    points: Vec<Point<T>>,
}

impl<T> Polyline<T> {
    /// Wrap already-ordered points.
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Number of sampled points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points were sampled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the sampled points in order.
    pub fn iter(&self) -> Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Consume the polyline, returning its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

impl<T> Deref for Polyline<T> {
    type Target = [Point<T>];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a Point<T>;
    type IntoIter = Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
