//! Linear Regression Walkthrough
//!
//! This example covers the typical teaching-page flow:
//! - Fitting a line and scoring it
//! - Sampling the line for a chart
//! - Generating noisy demo data
//! - Handling degenerate input
//! - Driving a chart view
//!
//! Set `RUST_LOG=linreg=debug` to see the library's trace output.

use linreg::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), RegressionError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(80));
    println!("Linear Regression - Walkthrough");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_fit()?;
    example_2_synthetic_data()?;
    example_3_degenerate_input()?;
    example_4_chart_view()?;

    Ok(())
}

/// Example 1: Basic Fit
fn example_1_basic_fit() -> Result<(), RegressionError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(80));

    let points = points_from_xy::<f64>(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.1, 5.9, 8.2, 9.8]);
    let model = LinearRegression::new().build()?;

    let report = model.report(&points)?;
    println!("{}", report);
    println!("{}", prediction_text(&report.line, 6.0));

    /* Expected Output (excerpt):
    Summary:
      Data points: 5
      Equation:    y = 1.97x + 0.09
      R² = 1.00
    ...
    x = 6 → y = 11.91
    */

    println!();
    Ok(())
}

/// Example 2: Synthetic Data
/// Points scattered above y = 8x + 40, as on the demo page.
fn example_2_synthetic_data() -> Result<(), RegressionError> {
    println!("Example 2: Synthetic Data");
    println!("{}", "-".repeat(80));

    let mut rng = StdRng::seed_from_u64(42);
    let points = generate_synthetic_points(&mut rng, 8, (1.0, 8.0), (40.0, 100.0), 20.0)?;
    for p in &points {
        println!(
            "  {:<8} x = {:>4.1}  y = {:>4.0}",
            p.label.as_deref().unwrap_or(""),
            p.x,
            p.y
        );
    }

    let line = fit_line(&points)?;
    println!("{}", equation_text(&line));
    println!("{}", r_squared_text(score_fit(&points, &line)?));

    println!();
    Ok(())
}

/// Example 3: Degenerate Input
fn example_3_degenerate_input() -> Result<(), RegressionError> {
    println!("Example 3: Degenerate Input");
    println!("{}", "-".repeat(80));

    let vertical = points_from_xy::<f64>(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]);

    match fit_line(&vertical) {
        Ok(line) => println!("Unexpected fit: {}", equation_text(&line)),
        Err(e) => println!("Reject:    {}", e),
    }

    let lenient = LinearRegression::new().degenerate_policy(Propagate).build()?;
    let line = lenient.fit(&vertical)?;
    println!("Propagate: slope = {}, intercept = {}", line.slope, line.intercept);

    println!();
    Ok(())
}

/// Example 4: Chart View
fn example_4_chart_view() -> Result<(), RegressionError> {
    println!("Example 4: Chart View");
    println!("{}", "-".repeat(80));

    let model = LinearRegression::new().polyline_steps(4).build()?;
    let mut view = model.chart(points_from_xy::<f64>(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]))?;

    println!("Points visible: {}", view.toggle_points());
    println!("Line visible:   {}", view.toggle_line());
    if let Some(line) = view.visible_line() {
        for p in line {
            println!("  ({:.2}, {:.2})", p.x, p.y);
        }
    }

    println!();
    Ok(())
}
