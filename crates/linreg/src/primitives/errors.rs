//! Error types for regression operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting,
//! scoring, or sampling a regression line, and while generating synthetic
//! data or configuring the builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (counts, bounds, axis).
//! * **Deferred**: Builder misconfiguration is stored and reported by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Key concepts
//!
//! 1. **Insufficient data**: Fewer than two points for a line fit.
//! 2. **Degenerate input**: Zero variance along one axis makes a quotient undefined.
//! 3. **Parameter validation**: Ranges, step counts and noise amplitude.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not decide whether degenerate input is an error; see `DegeneratePolicy`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Axis
// ============================================================================

/// Coordinate axis whose values carry no variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// All x-values are identical; the slope is undefined.
    X,

    /// All y-values are identical; the total sum of squares is zero.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// A line fit needs at least `min` points.
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Zero variance along `axis` makes the computation divide by zero.
    DegenerateInput {
        /// Axis with no variance.
        axis: Axis,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A range whose upper bound is below its lower bound.
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Polyline sampling needs at least one step.
    InvalidSteps(usize),

    /// Noise amplitude must be finite and non-negative.
    InvalidNoise(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} points, need at least {min}")
            }
            Self::DegenerateInput { axis } => {
                write!(f, "Degenerate input: all {axis}-values are identical")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: [{min}, {max}] (upper bound below lower bound)")
            }
            Self::InvalidSteps(steps) => write!(f, "Invalid steps: {steps} (must be >= 1)"),
            Self::InvalidNoise(noise) => {
                write!(f, "Invalid noise amplitude: {noise} (must be >= 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
