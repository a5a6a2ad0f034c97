//! Text output for fitted lines.
//!
//! ## Purpose
//!
//! This module turns fit results into the strings a teaching page shows:
//! the regression equation, the R² line, a single-point prediction, and a
//! full report with a data table.
//!
//! ## Design notes
//!
//! * **Fixed-point**: Numbers render with a fixed number of decimals
//!   (two by default).
//! * **Signs**: A negative intercept renders as `- 3.00`, not `+ -3.00`.
//! * **Ergonomics**: [`FitReport`] implements `Display`.
//!
//! ## Non-goals
//!
//! * This module does not produce HTML or drive a chart.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::ols::RegressionResult;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::point::Point;

/// Decimal places used when none are requested.
pub const DEFAULT_DECIMALS: usize = 2;

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Render `value` with exactly `decimals` digits after the point.
pub fn format_number<T: Float>(value: T, decimals: usize) -> String {
    format!("{:.*}", decimals, value.to_f64().unwrap_or(f64::NAN))
}

/// `y = 2.00x + 1.00`.
pub fn equation_text<T: Float>(line: &RegressionResult<T>) -> String {
    let sign = if line.intercept.is_sign_negative() && line.intercept != T::zero() {
        '-'
    } else {
        '+'
    };
    format!(
        "y = {}x {} {}",
        format_number(line.slope, DEFAULT_DECIMALS),
        sign,
        format_number(line.intercept.abs(), DEFAULT_DECIMALS)
    )
}

/// `R² = 0.98`.
pub fn r_squared_text<T: Float>(r_squared: T) -> String {
    format!("R² = {}", format_number(r_squared, DEFAULT_DECIMALS))
}

/// `x = 4 → y = 9.00`.
pub fn prediction_text<T: Float>(line: &RegressionResult<T>, x: T) -> String {
    format!(
        "x = {} → y = {}",
        x.to_f64().unwrap_or(f64::NAN),
        format_number(line.predict(x), DEFAULT_DECIMALS)
    )
}

// ============================================================================
// Report Structure
// ============================================================================

/// A fitted line together with its data and fit quality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitReport<T> {
    /// Points the line was fitted to, in input order.
    pub points: Vec<Point<T>>,

    /// Fitted line.
    pub line: RegressionResult<T>,

    /// Fit-quality metrics.
    pub diagnostics: Diagnostics<T>,
}

impl<T: Float> FitReport<T> {
    /// Equation text for the fitted line.
    pub fn equation(&self) -> String {
        equation_text(&self.line)
    }

    /// Predicted y at `x`.
    pub fn predict(&self, x: T) -> T {
        self.line.predict(x)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.points.len())?;
        writeln!(f, "  Equation:    {}", equation_text(&self.line))?;
        writeln!(f, "  {}", r_squared_text(self.diagnostics.r_squared))?;
        writeln!(f)?;

        writeln!(f, "{}", self.diagnostics)?;

        writeln!(f, "Data:")?;
        writeln!(
            f,
            "{:>12} {:>8} {:>12} {:>12} {:>12}",
            "Label", "X", "Y", "Fitted", "Residual"
        )?;
        writeln!(f, "{:-<width$}", "", width = 60)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.points.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev_idx = idx;

            let p = &self.points[idx];
            let fitted = self.line.predict(p.x);
            let default_label;
            let label = match &p.label {
                Some(label) => label.as_str(),
                None => {
                    default_label = format!("Point {}", idx + 1);
                    default_label.as_str()
                }
            };
            writeln!(
                f,
                "{:>12} {:>8.2} {:>12.6} {:>12.6} {:>12.6}",
                label,
                p.x,
                p.y,
                fitted,
                p.y - fitted
            )?;
        }

        Ok(())
    }
}
