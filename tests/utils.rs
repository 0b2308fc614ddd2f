/// Passes for equal values, two NaNs, or a difference below `atol + rtol * |f2|`.
pub fn assert_float_eq<T: num::Float + std::fmt::Display>(
    f1: T,
    f2: T,
    atol: T,
    rtol: T,
    msg: &str,
) {
    let close = f1 == f2
        || (f1.is_nan() && f2.is_nan())
        || (f1 - f2).abs() < atol + rtol * f2.abs();
    assert!(close, "floats not almost equal. {} f1: {}, f2: {}", msg, f1, f2);
}

#[allow(dead_code)]
pub fn assert_float_eq_f64(f1: f64, f2: f64) {
    assert_float_eq(f1, f2, 1e-12, 0.0, "");
}
