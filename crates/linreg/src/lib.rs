//! # linreg: Simple Linear Regression for Teaching Charts
//!
//! Closed-form ordinary least squares for a single predictor, R² scoring,
//! line sampling for plotting, and synthetic scatter data for demos.
//!
//! ## What does it compute?
//!
//! Given points (x, y), the best-fit line y = slope·x + intercept is
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! ```
//!
//! and its goodness of fit is R² = 1 − SS_res / SS_tot.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(3.0, 3.0),
//! ];
//!
//! let line = fit_line(&points)?;
//! let r2 = score_fit(&points, &line)?;
//!
//! assert!((line.slope - 1.0).abs() < 1e-12);
//! assert!(line.intercept.abs() < 1e-12);
//! assert!((r2 - 1.0).abs() < 1e-12);
//!
//! // 11 points from x = 0 to x = 10 for drawing
//! let polyline = sample_polyline(&line, 0.0, 10.0, 10)?;
//! assert_eq!(polyline.len(), 11);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Configured Use
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let model = LinearRegression::new()
//!     .degenerate_policy(Propagate)   // return NaN/inf instead of failing
//!     .polyline_steps(50)             // resolution of sampled lines
//!     .build()?;
//!
//! let points: Vec<Point<f64>> = vec![Point::new(1.0, 2.0), Point::new(2.0, 4.1), Point::new(3.0, 5.9)];
//! let report = model.report(&points)?;
//! println!("{}", report);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Degenerate Input
//!
//! When every x is identical the slope is undefined, and when every y is
//! identical R² is undefined. By default both fail with
//! `RegressionError::DegenerateInput`; `DegeneratePolicy::Propagate`
//! returns the non-finite value instead.
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let vertical: Vec<Point<f64>> = vec![Point::new(2.0, 1.0), Point::new(2.0, 5.0)];
//! assert!(matches!(
//!     fit_line(&vertical),
//!     Err(RegressionError::DegenerateInput { axis: Axis::X })
//! ));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! linreg = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, synthetic data needs an explicit random source; the
//! thread-local convenience `generate_random_points` is unavailable.
//!
//! ## Features
//!
//! - `std` (default): standard library support.
//! - `serde`: `Serialize`/`Deserialize` on points, lines and reports.
//! - `dev`: exposes the `internals` module for tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - value types and errors.
mod primitives;

// Layer 2: Math - running sums, rounding.
mod math;

// Layer 3: Algorithms - least squares, sampling, synthetic data.
mod algorithms;

// Layer 4: Evaluation - goodness of fit.
mod evaluation;

// Layer 5: Engine - validation, policy, text output.
mod engine;

// Layer 6: View - chart view state.
mod view;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        equation_text, fit_line, format_number, generate_synthetic_points, points_from_xy,
        prediction_text, r_squared_text, sample_polyline, score_fit, Axis, ChartView,
        DegeneratePolicy,
        DegeneratePolicy::Propagate,
        DegeneratePolicy::Reject,
        Diagnostics, FitReport, Point, Polyline, RegressionBuilder as LinearRegression,
        RegressionError, RegressionResult, Regressor, SyntheticConfig, DEFAULT_STEPS,
    };

    #[cfg(feature = "std")]
    pub use crate::api::generate_random_points;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod view {
        pub use crate::view::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
