//! Operations on single floating-point values.
//!
//! These are the building blocks of the vector and matrix operations, and are useful on their own
//! for things like animation curves and range conversions.

use crate::{approx::ApproxEq, Float};

/// Returns `x * x`.
#[inline]
pub fn square<T: Float>(x: T) -> T {
    x * x
}

/// Returns `x * x * x`.
#[inline]
pub fn cube<T: Float>(x: T) -> T {
    x * x * x
}

/// Returns whether `a` and `b` are equal within [`Float::EPSILON`], scaled by the larger of their
/// magnitudes (but never less than 1).
///
/// Non-finite values depart from that formula, which would reject every comparison involving an
/// infinity: two infinities of the same sign are equal, so equality stays reflexive for all
/// non-NaN values. NaN is never equal to anything, including itself.
///
/// # Examples
///
/// ```
/// # use quite_math::scalar::approx_equal;
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1.0f32, 1.0001));
/// assert!(approx_equal(f32::INFINITY, f32::INFINITY));
/// assert!(!approx_equal(f32::INFINITY, f32::NEG_INFINITY));
/// ```
#[inline]
pub fn approx_equal<T: Float + ApproxEq<Tolerance = T>>(a: T, b: T) -> bool {
    a.approx_eq(&b)
}

/// Alias of [`approx_equal`].
#[inline]
pub fn equal<T: Float + ApproxEq<Tolerance = T>>(a: T, b: T) -> bool {
    approx_equal(a, b)
}

/// Restricts `value` to the range `[min, max]`.
///
/// If the bounds are inverted (`max < min`), `value` is returned unchanged.
///
/// # Examples
///
/// ```
/// # use quite_math::scalar::clamp;
/// assert_eq!(clamp(-3.0, 1.0, 10.0), 1.0);
/// assert_eq!(clamp(5.0, 10.0, 1.0), 5.0);
/// ```
#[inline]
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if max < min {
        return value;
    }
    value.max(min).min(max)
}

/// Wraps `value` around into the half-open range `[min, max)`.
///
/// If the range is empty or inverted (`max <= min`), `value` is returned unchanged.
///
/// # Examples
///
/// ```
/// # use quite_math::scalar::wrap;
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-90.0, 0.0, 360.0), 270.0);
/// ```
#[inline]
pub fn wrap<T: Float>(value: T, min: T, max: T) -> T {
    if max <= min {
        return value;
    }
    let range = max - min;
    value - range * ((value - min) / range).floor()
}

/// Linearly interpolates between `start` and `end`.
///
/// `t` is not clamped: values outside of `[0, 1]` extrapolate.
#[inline]
pub fn lerp<T: Float>(t: T, start: T, end: T) -> T {
    start + t * (end - start)
}

/// Computes `(value - start) * (end - start)`.
///
/// *Note*: despite its name this does **not** map `value` into `[0, 1]`; the range width is
/// multiplied, not divided. Use [`remap`] with an output range of `[0, 1]` for that.
#[inline]
pub fn normalize<T: Float>(value: T, start: T, end: T) -> T {
    (value - start) * (end - start)
}

/// Linearly maps `value` from the range `[in_start, in_end]` to `[out_start, out_end]`.
///
/// If either range is degenerate (start equals end), `value` is returned unchanged.
///
/// # Examples
///
/// ```
/// # use quite_math::scalar::remap;
/// assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// assert_eq!(remap(5.0, 1.0, 1.0, 100.0, 200.0), 5.0);
/// ```
#[inline]
pub fn remap<T: Float>(value: T, in_start: T, in_end: T, out_start: T, out_end: T) -> T {
    if in_start == in_end || out_start == out_end {
        return value;
    }
    (value - in_start) * (out_end - out_start) / (in_end - in_start) + out_start
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians * T::from_f32(180.0) / T::PI
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees * T::PI / T::from_f32(180.0)
}
