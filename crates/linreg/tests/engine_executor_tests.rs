#![cfg(feature = "dev")]
//! Tests for policy-aware execution.
//!
//! ## Test Organization
//!
//! 1. **Fitting** - Validation and degenerate x under each policy
//! 2. **Scoring** - Degenerate y and small inputs under each policy
//! 3. **Sampling** - Parameter checks and extent sampling
//! 4. **Synthetic Data** - Configuration checks

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use linreg::internals::algorithms::ols::{DegeneratePolicy, RegressionResult};
use linreg::internals::algorithms::synthetic::SyntheticConfig;
use linreg::internals::engine::executor::{x_extent, RegressionExecutor};
use linreg::internals::primitives::errors::{Axis, RegressionError};
use linreg::internals::primitives::point::{points_from_xy, Point};

// ============================================================================
// Helper Functions
// ============================================================================

fn reject() -> RegressionExecutor {
    RegressionExecutor::default()
}

fn propagate() -> RegressionExecutor {
    RegressionExecutor {
        policy: DegeneratePolicy::Propagate,
        ..RegressionExecutor::default()
    }
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Defaults: reject degenerate input, 100 steps.
#[test]
fn test_executor_defaults() {
    let exec = RegressionExecutor::default();
    assert_eq!(exec.policy, DegeneratePolicy::Reject);
    assert_eq!(exec.steps, 100);
}

/// Finite, repeatable fits for ordinary data.
#[test]
fn test_fit_line_finite_and_idempotent() {
    let points = points_from_xy::<f64>(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.1, 5.9, 8.2, 9.8]);
    let a = reject().fit_line(&points).unwrap();
    let b = reject().fit_line(&points).unwrap();

    assert!(a.is_finite());
    assert_eq!(a, b);
    assert_eq!(a.n, 5);
}

/// Constant x is rejected by default.
#[test]
fn test_fit_line_constant_x_rejected() {
    let points = points_from_xy::<f64>(&[2.0, 2.0, 2.0], &[1.0, 5.0, 3.0]);
    assert_eq!(
        reject().fit_line(&points),
        Err(RegressionError::DegenerateInput { axis: Axis::X })
    );
}

/// Constant x propagates a non-finite line when asked.
#[test]
fn test_fit_line_constant_x_propagated() {
    let points = points_from_xy::<f64>(&[2.0, 2.0], &[1.0, 5.0]);
    let fit = propagate().fit_line(&points).unwrap();
    assert!(!fit.is_finite());
}

/// x-values sharing a large offset still fit.
#[test]
fn test_fit_line_large_x_offset() {
    for &offset in &[1e8, 1e9] {
        let points = points_from_xy::<f64>(&[offset, offset + 1.0, offset + 2.0], &[1.0, 2.0, 3.0]);
        let fit = reject().fit_line(&points).unwrap();

        assert!(fit.is_finite());
        assert_relative_eq!(fit.slope, 1.0, epsilon = 1e-9);
    }
}

/// A non-finite line from varying x is not reported as constant x.
#[test]
fn test_fit_line_overflow_not_degenerate() {
    // Σ(x − x̄)² underflows to zero while x still varies
    let points = points_from_xy::<f64>(&[0.0, 1e-300], &[0.0, 1e300]);

    assert!(matches!(
        reject().fit_line(&points),
        Err(RegressionError::InvalidNumericValue(_))
    ));
    assert!(!propagate().fit_line(&points).unwrap().is_finite());
}

/// Counting comes before finiteness checks.
#[test]
fn test_fit_line_insufficient_data() {
    let single = vec![Point::<f64>::new(1.0, 1.0)];
    for exec in [reject(), propagate()] {
        assert_eq!(
            exec.fit_line(&single),
            Err(RegressionError::InsufficientData { got: 1, min: 2 })
        );
    }
}

/// Non-finite coordinates are rejected under both policies.
#[test]
fn test_fit_line_non_finite() {
    let points = points_from_xy::<f64>(&[1.0, 2.0], &[f64::NAN, 2.0]);
    assert!(matches!(
        propagate().fit_line(&points),
        Err(RegressionError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Scoring Tests
// ============================================================================

/// Noisy reference: R² = 1 − 0.091 / 38.9.
#[test]
fn test_score_fit_reference() {
    let points = points_from_xy::<f64>(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.1, 5.9, 8.2, 9.8]);
    let fit = reject().fit_line(&points).unwrap();
    let r2 = reject().score_fit(&points, &fit).unwrap();

    assert_relative_eq!(r2, 1.0 - 0.091 / 38.9, epsilon = 1e-9);
}

/// Constant y: rejected, or NaN when propagated.
#[test]
fn test_score_fit_constant_y() {
    let points = points_from_xy::<f64>(&[1.0, 2.0, 3.0], &[3.0, 3.0, 3.0]);
    let fit = reject().fit_line(&points).unwrap();
    assert_relative_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.intercept, 3.0);

    assert_eq!(
        reject().score_fit(&points, &fit),
        Err(RegressionError::DegenerateInput { axis: Axis::Y })
    );
    assert!(propagate().score_fit(&points, &fit).unwrap().is_nan());
}

/// Fewer than two points: rejected, or 0 when propagated.
#[test]
fn test_score_fit_small_input() {
    let single = vec![Point::<f64>::new(1.0, 1.0)];
    let line = RegressionResult::<f64>::new(1.0, 0.0);

    assert_eq!(
        reject().score_fit(&single, &line),
        Err(RegressionError::InsufficientData { got: 1, min: 2 })
    );
    assert_eq!(propagate().score_fit(&single, &line), Ok(0.0));
}

/// diagnostics carries the policy-checked R².
#[test]
fn test_diagnostics() {
    let points = points_from_xy::<f64>(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]);
    let line = RegressionResult::<f64>::new(1.0, 0.0);
    let diag = reject().diagnostics(&points, &line).unwrap();

    assert_relative_eq!(diag.r_squared, 0.375, epsilon = 1e-12);
    assert_relative_eq!(diag.mae, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Sampling Tests
// ============================================================================

/// Invalid sampling parameters are reported.
#[test]
fn test_sample_polyline_invalid() {
    let line = RegressionResult::<f64>::new(2.0, 1.0);
    let exec = reject();

    assert_eq!(
        exec.sample_polyline(&line, 0.0, 10.0, 0),
        Err(RegressionError::InvalidSteps(0))
    );
    assert_eq!(
        exec.sample_polyline(&line, 10.0, 0.0, 10),
        Err(RegressionError::InvalidRange { min: 10.0, max: 0.0 })
    );
    assert!(matches!(
        exec.sample_polyline(&line, f64::NAN, 1.0, 10),
        Err(RegressionError::InvalidNumericValue(_))
    ));
}

/// sample_over spans the points with the configured step count.
#[test]
fn test_sample_over_extent() {
    let points = points_from_xy::<f64>(&[4.0, -1.0, 2.5, 7.0], &[0.0, 0.0, 0.0, 0.0]);
    let exec = RegressionExecutor {
        steps: 8,
        ..RegressionExecutor::default()
    };
    let poly = exec
        .sample_over(&RegressionResult::<f64>::new(1.0, 0.0), &points)
        .unwrap();

    assert_eq!(x_extent(&points), Some((-1.0, 7.0)));
    assert_eq!(poly.len(), 9);
    assert_relative_eq!(poly[0].x, -1.0);
    assert_relative_eq!(poly[8].x, 7.0, epsilon = 1e-12);
}

/// sample_over needs at least one point.
#[test]
fn test_sample_over_empty() {
    let empty: Vec<Point<f64>> = vec![];
    assert!(x_extent(&empty).is_none());
    assert!(matches!(
        reject().sample_over(&RegressionResult::<f64>::new(1.0, 0.0), &empty),
        Err(RegressionError::InsufficientData { .. })
    ));
}

// ============================================================================
// Synthetic Data Tests
// ============================================================================

/// Invalid configurations are rejected before generation.
#[test]
fn test_generate_invalid_config() {
    let mut rng = StdRng::seed_from_u64(0);
    let negative_noise = SyntheticConfig::<f64>::new(5, (1.0, 8.0), (40.0, 100.0), -2.0);
    let reversed_x = SyntheticConfig::<f64>::new(5, (8.0, 1.0), (40.0, 100.0), 2.0);

    assert_eq!(
        reject().generate_synthetic_points(&mut rng, &negative_noise),
        Err(RegressionError::InvalidNoise(-2.0))
    );
    assert_eq!(
        reject().generate_synthetic_points(&mut rng, &reversed_x),
        Err(RegressionError::InvalidRange { min: 8.0, max: 1.0 })
    );
}

/// Valid configurations generate the requested count.
#[test]
fn test_generate_valid_config() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = SyntheticConfig::<f64>::new(12, (1.0, 8.0), (40.0, 100.0), 20.0);
    let points = reject().generate_synthetic_points(&mut rng, &config).unwrap();

    assert_eq!(points.len(), 12);
}
