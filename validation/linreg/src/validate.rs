use linreg::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    #[serde(default)]
    notes: String,
    input: InputData,
    expected: Coefficients,
    #[serde(skip_deserializing)]
    result: Option<ResultData>,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
struct Coefficients {
    slope: f64,
    intercept: f64,
    r_squared: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct ResultData {
    coefficients: Option<Coefficients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    passed: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input_dir = Path::new("../fixtures");
    let output_dir = Path::new("../output");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut paths: Vec<_> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut failures = 0;
    for path in &paths {
        if !process_file(path, output_dir)? {
            failures += 1;
        }
    }

    println!("{} of {} fixtures passed", paths.len() - failures, paths.len());
    if failures > 0 {
        return Err(format!("{} fixture(s) failed", failures).into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let passed = evaluate(&mut data)?;
    write_result(&data, input_path, output_dir)?;

    Ok(passed)
}

/// Fit one fixture and record the outcome; a failed fit is a FAIL row, not an abort.
fn evaluate(data: &mut ValidationData) -> Result<bool, RegressionError> {
    let points = points_from_xy(&data.input.x, &data.input.y);
    let model = LinearRegression::new().build()?;
    let fitted = model
        .fit(&points)
        .and_then(|line| model.score(&points, &line).map(|r_squared| (line, r_squared)));

    let (line, r_squared) = match fitted {
        Ok(fit) => fit,
        Err(e) => {
            println!("FAIL {:<20} {}", data.name, e);
            data.result = Some(ResultData {
                coefficients: None,
                error: Some(e.to_string()),
                passed: false,
            });
            return Ok(false);
        }
    };

    let actual = Coefficients {
        slope: line.slope,
        intercept: line.intercept,
        r_squared,
    };
    let expected = data.expected;
    let passed = close(actual.slope, expected.slope)
        && close(actual.intercept, expected.intercept)
        && close(actual.r_squared, expected.r_squared);

    println!(
        "{} {:<20} {}  {}",
        if passed { "PASS" } else { "FAIL" },
        data.name,
        equation_text(&line),
        r_squared_text(r_squared)
    );

    data.result = Some(ResultData {
        coefficients: Some(actual),
        error: None,
        passed,
    });

    Ok(passed)
}

fn write_result(
    data: &ValidationData,
    input_path: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("fixture path {:?} has no file name", input_path))?;
    let output_json = serde_json::to_string_pretty(data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(())
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(x: &[f64], y: &[f64], expected: (f64, f64, f64)) -> ValidationData {
        ValidationData {
            name: "case".to_string(),
            notes: String::new(),
            input: InputData {
                x: x.to_vec(),
                y: y.to_vec(),
            },
            expected: Coefficients {
                slope: expected.0,
                intercept: expected.1,
                r_squared: expected.2,
            },
            result: None,
        }
    }

    #[test]
    fn test_evaluate_pass() {
        let mut data = fixture(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], (1.0, 0.0, 1.0));
        assert!(evaluate(&mut data).unwrap());

        let result = data.result.unwrap();
        assert!(result.passed);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_evaluate_mismatch() {
        let mut data = fixture(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], (2.0, 0.0, 1.0));
        assert!(!evaluate(&mut data).unwrap());
    }

    /// Degenerate fixtures become FAIL rows so later fixtures still run.
    #[test]
    fn test_evaluate_degenerate_is_recorded() {
        let mut data = fixture(&[2.0, 2.0], &[1.0, 5.0], (0.0, 0.0, 0.0));
        assert!(!evaluate(&mut data).unwrap());

        let result = data.result.unwrap();
        assert!(!result.passed);
        assert!(result.coefficients.is_none());
        assert!(result.error.unwrap().contains("Degenerate input"));
    }
}
