use js_sys::Float64Array;
use linreg_wasm::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_fit_line() {
    let x = Float64Array::from(&[1.0, 2.0, 3.0][..]);
    let y = Float64Array::from(&[1.0, 2.0, 3.0][..]);

    let fit = fit_line(&x, &y, &JsValue::NULL).expect("Fit failed");
    assert!((fit.slope - 1.0).abs() < 1e-12);
    assert!(fit.intercept.abs() < 1e-12);

    let r2 = score_fit(&x, &y, fit.slope, fit.intercept, &JsValue::NULL).expect("Score failed");
    assert!((r2 - 1.0).abs() < 1e-12);
}

#[wasm_bindgen_test]
fn test_fit_line_degenerate() {
    let x = Float64Array::from(&[2.0, 2.0][..]);
    let y = Float64Array::from(&[1.0, 5.0][..]);

    assert!(fit_line(&x, &y, &JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn test_sample_polyline() {
    let line = sample_polyline(2.0, 1.0, 0.0, 10.0, Some(10)).expect("Sample failed");
    assert_eq!(line.length(), 11);
    assert_eq!(line.y().get_index(10), 21.0);

    let line = sample_polyline(2.0, 1.0, 0.0, 10.0, None).expect("Sample failed");
    assert_eq!(line.length(), 101);
}

#[wasm_bindgen_test]
fn test_generate_random_data() {
    let data = generate_random_data(&JsValue::NULL).expect("Generate failed");
    assert_eq!(data.x().length(), 8);
    assert_eq!(data.labels().length(), 8);
}

#[wasm_bindgen_test]
fn test_text_helpers() {
    assert_eq!(format_number_js(3.14159, None), "3.14");
    assert_eq!(equation_text_js(2.0, -3.0), "y = 2.00x - 3.00");
    assert_eq!(predict(2.0, 1.0, 4.0), 9.0);
}

#[wasm_bindgen_test]
fn test_chart_view() {
    let x = Float64Array::from(&[0.0, 1.0, 2.0][..]);
    let y = Float64Array::from(&[1.0, 3.0, 5.0][..]);

    let mut view = ChartViewWasm::new(&x, &y, &JsValue::NULL).expect("View failed");
    assert!(view.visible_line().is_none());

    view.refresh_line().expect("Refresh failed");
    assert!(view.toggle_line());
    assert_eq!(view.visible_line().map(|l| l.length()), Some(101));
}

#[wasm_bindgen_test]
fn test_generate_random_data_rejects_bad_count() {
    for count in [1e12, 2.5, -1.0, f64::NAN] {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("count"), &JsValue::from_f64(count))
            .expect("Set failed");
        assert!(generate_random_data(&options.into()).is_err());
    }
}

#[wasm_bindgen_test]
fn test_generate_random_data_count_option() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("count"), &JsValue::from_f64(3.0))
        .expect("Set failed");
    let data = generate_random_data(&options.into()).expect("Generate failed");
    assert_eq!(data.x().length(), 3);
}

#[wasm_bindgen_test]
fn test_sample_polyline_rejects_huge_steps() {
    assert!(sample_polyline(1.0, 0.0, 0.0, 1.0, Some(u32::MAX)).is_err());
}
