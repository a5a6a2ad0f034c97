//! Tests for the high-level API.
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults and validation
//! 2. **Regressor Operations** - Fit, score, sample, report, chart
//! 3. **Free Functions** - Default-policy entry points

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use linreg::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn linear_points(n: usize, slope: f64, intercept: f64) -> Vec<Point<f64>> {
    (0..n)
        .map(|i| Point::<f64>::new(i as f64, slope * i as f64 + intercept))
        .collect()
}

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Defaults: Reject, 100 steps.
#[test]
fn test_builder_defaults() {
    let model = LinearRegression::new().build().unwrap();
    assert_eq!(model.policy(), Reject);
    assert_eq!(model.steps(), DEFAULT_STEPS);
}

/// Setting a parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = LinearRegression::new()
        .degenerate_policy(Reject)
        .degenerate_policy(Propagate)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "degenerate_policy"
        }
    );

    let err = LinearRegression::new()
        .polyline_steps(10)
        .polyline_steps(20)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("polyline_steps"));
}

/// Zero steps fails at build time.
#[test]
fn test_builder_zero_steps() {
    assert_eq!(
        LinearRegression::new().polyline_steps(0).build(),
        Err(RegressionError::InvalidSteps(0))
    );
}

// ============================================================================
// Regressor Operation Tests
// ============================================================================

/// Exact-line data is recovered and scores 1.
#[test]
fn test_regressor_exact_line() {
    let model = LinearRegression::new().build().unwrap();
    let points = linear_points(12, -1.5, 7.0);

    let line = model.fit(&points).unwrap();
    assert_relative_eq!(line.slope, -1.5, epsilon = 1e-10);
    assert_relative_eq!(line.intercept, 7.0, epsilon = 1e-10);
    assert_relative_eq!(model.score(&points, &line).unwrap(), 1.0, epsilon = 1e-12);

    let diag = model.diagnostics(&points, &line).unwrap();
    assert!(diag.rmse < 1e-10);
}

/// Propagate returns non-finite values instead of failing.
#[test]
fn test_regressor_propagate() {
    let model = LinearRegression::new()
        .degenerate_policy(Propagate)
        .build()
        .unwrap();

    let vertical = vec![Point::<f64>::new(1.0, 0.0), Point::<f64>::new(1.0, 4.0)];
    assert!(!model.fit(&vertical).unwrap().is_finite());

    let flat = vec![Point::<f64>::new(0.0, 2.0), Point::<f64>::new(1.0, 2.0)];
    let line = model.fit(&flat).unwrap();
    assert!(model.score(&flat, &line).unwrap().is_nan());
}

/// sample_over uses the configured resolution.
#[test]
fn test_regressor_sample_over() {
    let model = LinearRegression::new().polyline_steps(10).build().unwrap();
    let points = linear_points(5, 2.0, 1.0);
    let line = model.fit(&points).unwrap();

    let poly = model.sample_over(&line, &points).unwrap();
    assert_eq!(poly.len(), 11);
    assert_relative_eq!(poly[10].x, 4.0, epsilon = 1e-12);

    let explicit = model.sample(&line, 0.0, 1.0, 4).unwrap();
    assert_eq!(explicit.len(), 5);
}

/// report bundles points, line and diagnostics.
#[test]
fn test_regressor_report() {
    let model = LinearRegression::new().build().unwrap();
    let points = linear_points(4, 1.0, 0.0);
    let report = model.report(&points).unwrap();

    assert_eq!(report.points.len(), 4);
    assert_relative_eq!(report.diagnostics.r_squared, 1.0, epsilon = 1e-12);
    assert_eq!(report.equation(), "y = 1.00x + 0.00");
}

/// report fails on constant y under Reject.
#[test]
fn test_regressor_report_constant_y() {
    let model = LinearRegression::new().build().unwrap();
    let points = linear_points(4, 0.0, 5.0);

    assert_eq!(
        model.report(&points),
        Err(RegressionError::DegenerateInput { axis: Axis::Y })
    );
}

/// chart returns a view with the sampled line, hidden by default.
#[test]
fn test_regressor_chart() {
    let model = LinearRegression::new().build().unwrap();
    let mut view = model.chart(linear_points(6, 3.0, -2.0)).unwrap();

    assert!(view.visible_line().is_none());
    view.toggle_line();
    assert_eq!(view.visible_line().map(|l| l.len()), Some(DEFAULT_STEPS + 1));
}

/// generate produces the configured number of points.
#[test]
fn test_regressor_generate() {
    let model = LinearRegression::new().build().unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let points = model
        .generate(&mut rng, &SyntheticConfig::<f64>::default())
        .unwrap();

    assert_eq!(points.len(), 8);
    let line = model.fit(&points).unwrap();
    assert!(line.is_finite());
}

// ============================================================================
// Free Function Tests
// ============================================================================

/// Free functions reject degenerate input.
#[test]
fn test_free_functions_reject() {
    let vertical = vec![Point::<f64>::new(1.0, 0.0), Point::<f64>::new(1.0, 4.0)];
    assert_eq!(
        fit_line(&vertical),
        Err(RegressionError::DegenerateInput { axis: Axis::X })
    );

    let line = RegressionResult::<f64>::new(0.0, 2.0);
    let flat = vec![Point::<f64>::new(0.0, 2.0), Point::<f64>::new(1.0, 2.0)];
    assert_eq!(
        score_fit(&flat, &line),
        Err(RegressionError::DegenerateInput { axis: Axis::Y })
    );
}

/// Free-function generator validates its arguments.
#[test]
fn test_free_generate_invalid() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generate_synthetic_points(&mut rng, 5, (1.0, 8.0), (40.0, 100.0), -1.0),
        Err(RegressionError::InvalidNoise(-1.0))
    );
}

/// Thread-local generator honors the configuration.
#[cfg(feature = "std")]
#[test]
fn test_generate_random_points() {
    let config = SyntheticConfig::<f64>::new(5, (1.0, 8.0), (40.0, 100.0), 20.0);
    let points = generate_random_points(&config).unwrap();

    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|p| (40.0..=100.0).contains(&p.y)));
}

/// Error messages name the problem.
#[test]
fn test_error_display() {
    assert_eq!(
        RegressionError::InsufficientData { got: 1, min: 2 }.to_string(),
        "Insufficient data: got 1 points, need at least 2"
    );
    assert_eq!(
        RegressionError::DegenerateInput { axis: Axis::X }.to_string(),
        "Degenerate input: all x-values are identical"
    );
    assert_eq!(
        RegressionError::InvalidSteps(0).to_string(),
        "Invalid steps: 0 (must be >= 1)"
    );
}
