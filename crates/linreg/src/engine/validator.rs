//! Input validation for regression data and parameters.
//!
//! ## Purpose
//!
//! This module checks point sets, ranges, step counts and generator
//! settings before any computation runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Point count is checked before finiteness, so an empty or
//!   single-point set always reports `InsufficientData`.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect zero variance; that depends on the policy
//!   and is handled by the executor.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::synthetic::SyntheticConfig;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression inputs and configuration.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of points needed to determine a line.
    pub const MIN_POINTS: usize = 2;

    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a point set: at least `min` points, all coordinates finite.
    pub fn validate_points<T: Float>(points: &[Point<T>], min: usize) -> Result<(), RegressionError> {
        if points.len() < min {
            return Err(RegressionError::InsufficientData {
                got: points.len(),
                min,
            });
        }

        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "points[{}].x={}",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !p.y.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "points[{}].y={}",
                    i,
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RegressionError> {
        if !val.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a closed range `[lo, hi]`: finite bounds, `lo <= hi`.
    pub fn validate_range<T: Float>(lo: T, hi: T, name: &str) -> Result<(), RegressionError> {
        Self::validate_scalar(lo, name)?;
        Self::validate_scalar(hi, name)?;
        if hi < lo {
            return Err(RegressionError::InvalidRange {
                min: lo.to_f64().unwrap_or(f64::NAN),
                max: hi.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the number of sampling intervals.
    pub fn validate_steps(steps: usize) -> Result<(), RegressionError> {
        if steps == 0 {
            return Err(RegressionError::InvalidSteps(steps));
        }
        Ok(())
    }

    /// Validate the synthetic noise amplitude.
    pub fn validate_noise<T: Float>(noise: T) -> Result<(), RegressionError> {
        if !noise.is_finite() || noise < T::zero() {
            return Err(RegressionError::InvalidNoise(
                noise.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate every field of a synthetic generator configuration.
    pub fn validate_synthetic<T: Float>(config: &SyntheticConfig<T>) -> Result<(), RegressionError> {
        Self::validate_range(config.x_range.0, config.x_range.1, "x_range")?;
        Self::validate_range(config.y_range.0, config.y_range.1, "y_range")?;
        Self::validate_noise(config.noise)?;
        Self::validate_scalar(config.slope, "slope")?;
        Self::validate_scalar(config.intercept, "intercept")?;
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
