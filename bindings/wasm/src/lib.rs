//! WebAssembly bindings for linreg.

use js_sys::{Array, Float64Array, Object, Reflect};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use ::linreg::prelude::{
    equation_text, format_number, generate_synthetic_points, points_from_xy, r_squared_text,
    ChartView, DegeneratePolicy, LinearRegression, Point, Polyline, RegressionError,
    RegressionResult, Regressor, SyntheticConfig, DEFAULT_STEPS,
};

// ============================================================================
// Option Parsing
// ============================================================================

fn to_js(err: RegressionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_degenerate_policy(name: &str) -> Result<DegeneratePolicy, JsValue> {
    match name.to_lowercase().as_str() {
        "reject" | "error" | "strict" => Ok(DegeneratePolicy::Reject),
        "propagate" | "nan" => Ok(DegeneratePolicy::Propagate),
        _ => Err(JsValue::from_str(&format!(
            "Unknown degenerate policy: {}",
            name
        ))),
    }
}

/// Upper bound on points generated or sampled in one call.
const MAX_POINTS: usize = 1_000_000;

fn parse_size(value: f64, name: &str) -> Result<usize, JsValue> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_POINTS as f64 {
        return Err(JsValue::from_str(&format!(
            "Invalid {}: {} (must be an integer in [0, {}])",
            name, value, MAX_POINTS
        )));
    }
    Ok(value as usize)
}

fn get_option(options: &JsValue, key: &str) -> Option<JsValue> {
    if options.is_undefined() || options.is_null() {
        return None;
    }
    let options = Object::from(options.clone());
    Reflect::get(&options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn build_regressor(options: &JsValue) -> Result<Regressor, JsValue> {
    let mut builder = LinearRegression::new();

    if let Some(val) = get_option(options, "degeneratePolicy").and_then(|v| v.as_string()) {
        builder = builder.degenerate_policy(parse_degenerate_policy(&val)?);
    }
    if let Some(val) = get_option(options, "steps").and_then(|v| v.as_f64()) {
        builder = builder.polyline_steps(parse_size(val, "steps")?);
    }

    builder.build().map_err(to_js)
}

fn points_from_arrays(x: &Float64Array, y: &Float64Array) -> Result<Vec<Point<f64>>, JsValue> {
    if x.length() != y.length() {
        return Err(JsValue::from_str(&format!(
            "x and y must have the same length (got {} and {})",
            x.length(),
            y.length()
        )));
    }
    Ok(points_from_xy(&x.to_vec(), &y.to_vec()))
}

fn split_xy<'a, I: IntoIterator<Item = &'a Point<f64>>>(points: I) -> (Vec<f64>, Vec<f64>) {
    points.into_iter().map(|p| (p.x, p.y)).unzip()
}

// ============================================================================
// Result Types
// ============================================================================

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub n: u32,
}

impl From<RegressionResult<f64>> for LineFit {
    fn from(fit: RegressionResult<f64>) -> Self {
        Self {
            slope: fit.slope,
            intercept: fit.intercept,
            n: fit.n as u32,
        }
    }
}

#[wasm_bindgen]
impl LineFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    #[wasm_bindgen(js_name = equationText)]
    pub fn equation_text(&self) -> String {
        equation_text(&RegressionResult::new(self.slope, self.intercept))
    }
}

#[wasm_bindgen]
pub struct PolylineWasm {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl From<&Polyline<f64>> for PolylineWasm {
    fn from(line: &Polyline<f64>) -> Self {
        let (x, y) = split_xy(line);
        Self { x, y }
    }
}

#[wasm_bindgen]
impl PolylineWasm {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Float64Array {
        Float64Array::from(self.x.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Float64Array {
        Float64Array::from(self.y.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u32 {
        self.x.len() as u32
    }
}

#[wasm_bindgen]
pub struct PointsWasm {
    x: Vec<f64>,
    y: Vec<f64>,
    labels: Vec<String>,
}

#[wasm_bindgen]
impl PointsWasm {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Float64Array {
        Float64Array::from(self.x.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Float64Array {
        Float64Array::from(self.y.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn labels(&self) -> Array {
        self.labels.iter().map(|l| JsValue::from_str(l)).collect()
    }
}

// ============================================================================
// Functions
// ============================================================================

#[wasm_bindgen(js_name = fitLine)]
pub fn fit_line(x: &Float64Array, y: &Float64Array, options: &JsValue) -> Result<LineFit, JsValue> {
    let model = build_regressor(options)?;
    let points = points_from_arrays(x, y)?;
    model.fit(&points).map(LineFit::from).map_err(to_js)
}

#[wasm_bindgen(js_name = scoreFit)]
pub fn score_fit(
    x: &Float64Array,
    y: &Float64Array,
    slope: f64,
    intercept: f64,
    options: &JsValue,
) -> Result<f64, JsValue> {
    let model = build_regressor(options)?;
    let points = points_from_arrays(x, y)?;
    model
        .score(&points, &RegressionResult::new(slope, intercept))
        .map_err(to_js)
}

#[wasm_bindgen(js_name = samplePolyline)]
pub fn sample_polyline(
    slope: f64,
    intercept: f64,
    x_min: f64,
    x_max: f64,
    steps: Option<u32>,
) -> Result<PolylineWasm, JsValue> {
    let steps = match steps {
        Some(s) => parse_size(f64::from(s), "steps")?,
        None => DEFAULT_STEPS,
    };
    Regressor::default()
        .sample(&RegressionResult::new(slope, intercept), x_min, x_max, steps)
        .map(|line| PolylineWasm::from(&line))
        .map_err(to_js)
}

#[wasm_bindgen(js_name = generateRandomData)]
pub fn generate_random_data(options: &JsValue) -> Result<PointsWasm, JsValue> {
    let defaults = SyntheticConfig::<f64>::default();
    let number = |key: &str| get_option(options, key).and_then(|v| v.as_f64());

    let count = match number("count") {
        Some(c) => parse_size(c, "count")?,
        None => defaults.count,
    };
    let x_range = (
        number("xMin").unwrap_or(defaults.x_range.0),
        number("xMax").unwrap_or(defaults.x_range.1),
    );
    let y_range = (
        number("yMin").unwrap_or(defaults.y_range.0),
        number("yMax").unwrap_or(defaults.y_range.1),
    );
    let noise = number("noise").unwrap_or(defaults.noise);

    let seed = match number("seed") {
        Some(seed) => seed as u64,
        None => (js_sys::Math::random() * u64::MAX as f64) as u64,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let points = generate_synthetic_points(&mut rng, count, x_range, y_range, noise).map_err(to_js)?;
    let labels = points
        .iter()
        .map(|p| p.label.clone().unwrap_or_default())
        .collect();
    let (x, y) = split_xy(&points);
    Ok(PointsWasm { x, y, labels })
}

#[wasm_bindgen]
pub fn predict(slope: f64, intercept: f64, x: f64) -> f64 {
    RegressionResult::new(slope, intercept).predict(x)
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(value: f64, decimals: Option<u32>) -> String {
    format_number(value, decimals.map_or(2, |d| d.min(100) as usize))
}

#[wasm_bindgen(js_name = equationText)]
pub fn equation_text_js(slope: f64, intercept: f64) -> String {
    equation_text(&RegressionResult::new(slope, intercept))
}

#[wasm_bindgen(js_name = rSquaredText)]
pub fn r_squared_text_js(r_squared: f64) -> String {
    r_squared_text(r_squared)
}

// ============================================================================
// Chart View
// ============================================================================

#[wasm_bindgen]
pub struct ChartViewWasm {
    inner: ChartView<f64>,
    model: Regressor,
}

#[wasm_bindgen]
impl ChartViewWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(x: &Float64Array, y: &Float64Array, options: &JsValue) -> Result<ChartViewWasm, JsValue> {
        Ok(ChartViewWasm {
            inner: ChartView::new(points_from_arrays(x, y)?),
            model: build_regressor(options)?,
        })
    }

    /// Replace the points; the current line is kept.
    pub fn update(&mut self, x: &Float64Array, y: &Float64Array) -> Result<(), JsValue> {
        self.inner.update(points_from_arrays(x, y)?, None);
        Ok(())
    }

    #[wasm_bindgen(js_name = refreshLine)]
    pub fn refresh_line(&mut self) -> Result<LineFit, JsValue> {
        self.inner
            .refresh_line(self.model.executor())
            .map(LineFit::from)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = togglePoints)]
    pub fn toggle_points(&mut self) -> bool {
        self.inner.toggle_points()
    }

    #[wasm_bindgen(js_name = toggleLine)]
    pub fn toggle_line(&mut self) -> bool {
        self.inner.toggle_line()
    }

    #[wasm_bindgen(getter, js_name = pointsVisible)]
    pub fn points_visible(&self) -> bool {
        self.inner.points_visible()
    }

    #[wasm_bindgen(getter, js_name = lineVisible)]
    pub fn line_visible(&self) -> bool {
        self.inner.line_visible()
    }

    /// Visible points, or `undefined` while hidden.
    #[wasm_bindgen(js_name = visiblePoints)]
    pub fn visible_points(&self) -> Option<PolylineWasm> {
        self.inner.visible_points().map(|points| {
            let (x, y) = split_xy(points);
            PolylineWasm { x, y }
        })
    }

    /// Visible line, or `undefined` while hidden or not yet sampled.
    #[wasm_bindgen(js_name = visibleLine)]
    pub fn visible_line(&self) -> Option<PolylineWasm> {
        self.inner.visible_line().map(PolylineWasm::from)
    }
}
