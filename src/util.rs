/// Equal values, including infinities of the same sign, and two NaNs are considered close.
#[cfg(test)]
fn floats_close<T: num::Float>(f1: T, f2: T, tol: T) -> bool {
    f1 == f2 || (f1.is_nan() && f2.is_nan()) || (f1 - f2).abs() < tol
}
#[cfg(test)]
fn assert_float_eq<T: num::Float + std::fmt::Display>(f1: T, f2: T, tol: T) {
    assert!(
        floats_close(f1, f2, tol),
        "floats not close within {}, left {}, right {}",
        tol,
        f1,
        f2
    );
}
#[cfg(test)]
pub fn assert_float_eq_f32(f1: f32, f2: f32) {
    assert_float_eq(f1, f2, 1e-6);
}
#[cfg(test)]
pub fn assert_float_eq_f64(f1: f64, f2: f64) {
    assert_float_eq(f1, f2, 1e-12);
}

#[cfg(test)]
mod test {
    use super::{assert_float_eq_f32, assert_float_eq_f64, floats_close};

    #[test]
    fn test_floats_close() {
        assert!(floats_close(1.0, 1.0 + 1e-13, 1e-12));
        assert!(floats_close(f64::INFINITY, f64::INFINITY, 1e-12));
        assert!(floats_close(f64::NAN, f64::NAN, 1e-12));
        assert!(!floats_close(f64::NAN, 1.0, 1e-12));
        assert!(!floats_close(1.0, f64::NAN, 1e-12));
        assert!(!floats_close(f64::INFINITY, f64::NEG_INFINITY, 1e-12));
        assert!(!floats_close(1.0, 1.1, 1e-12));
        assert_float_eq_f32(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic]
    fn test_nan_is_not_close_to_number() {
        assert_float_eq_f64(f64::NAN, 0.0);
    }
}
