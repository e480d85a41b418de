//! `assert_close!`: equality assertions with a tolerance.
//!
//! The default comparison allows a relative error of `1e-9` and no
//! absolute error; either knob can be overridden by leading
//! `rel=`/`abs=` arguments:
//!
//! ```
//! # #[macro_use] extern crate smallmat_assert_close;
//! # fn main() {
//! assert_close!(1.0, 1.0 + 1e-12);
//! assert_close!(abs=1e-6, 0.0, 1e-8);
//! assert_close!(rel=1e-3, abs=1e-3, 100.0, 100.05);
//! # }
//! ```

#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::check_close($a, $b, $abs, $rel)
    };
    (abs=$abs:expr, rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::check_close($a, $b, $abs, $rel)
    };
    (rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::check_close($a, $b, 0.0, $rel)
    };
    (abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::check_close($a, $b, $abs, 0.0)
    };
    ($a:expr, $b:expr $(,)*) => {
        $crate::check_close($a, $b, 0.0, 1e-9)
    };
}

/// Implementation detail of `assert_close!`. Panics on failure.
#[inline]
pub fn check_close(a: f64, b: f64, abs: f64, rel: f64) {
    if !is_close(a, b, abs, rel) {
        panic!(
            "not nearly equal! (tolerances: rel={}, abs={})\n left: {}\nright: {}",
            rel, abs, a, b,
        );
    }
}

/// Closeness test from Python 3.5's `math.isclose`.
///
/// https://hg.python.org/cpython/file/tip/Modules/mathmodule.c#l1993
pub fn is_close(a: f64, b: f64, abs: f64, rel: f64) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[cfg(test)]
mod tests {
    #[test]
    fn close_enough() {
        assert_close!(1.0, 1.0);
        assert_close!(1.0, 1.0 + 1e-12);
        assert_close!(abs=1e-6, 0.0, -1e-9);
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(1.0, 1.001);
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn zero_needs_abs_tolerance() {
        // rel alone can never accept a comparison against exactly zero.
        assert_close!(0.0, 1e-300);
    }
}
