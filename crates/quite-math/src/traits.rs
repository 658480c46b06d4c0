use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Floating-point element types supported by [`Vector`][crate::Vector] and
/// [`Matrix`][crate::Matrix].
///
/// This is implemented for [`f32`] and [`f64`] and forwards to their inherent methods. It bundles
/// everything the vector and matrix operations need: arithmetic, ordering, a few transcendental
/// functions, and the machine epsilon used for approximate comparisons.
pub trait Float:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + PartialOrd
    + Copy
{
    /// Tolerance used by [`approx_equal`][crate::scalar::approx_equal].
    ///
    /// This is the distance between `1.0` and the next representable value (`1.1920929e-7` for
    /// [`f32`]).
    const EPSILON: Self;

    /// Archimedes' constant (π).
    const PI: Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;

    /// Returns the smaller of `self` and `other`, ignoring NaN (like C's `fmin`).
    fn min(self, other: Self) -> Self;
    /// Returns the larger of `self` and `other`, ignoring NaN (like C's `fmax`).
    fn max(self, other: Self) -> Self;

    fn is_finite(self) -> bool;

    /// Converts an [`f32`] literal to this type.
    fn from_f32(value: f32) -> Self;
}

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Float for $types {
                const EPSILON: Self = $types::EPSILON;
                const PI: Self = std::$types::consts::PI;

                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                #[inline]
                fn floor(self) -> Self {
                    self.floor()
                }

                #[inline]
                fn sin(self) -> Self {
                    self.sin()
                }

                #[inline]
                fn cos(self) -> Self {
                    self.cos()
                }

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                #[inline]
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    self.max(other)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn from_f32(value: f32) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn two<T: Float>() -> T {
        T::from_f32(2.0)
    }

    #[test]
    fn constants() {
        assert_eq!(<f32 as Float>::EPSILON, 1.1920929e-7);
        assert_eq!(<f64 as Float>::EPSILON, f64::EPSILON);
        assert_eq!(<f32 as Float>::PI, std::f32::consts::PI);
        assert_eq!(two::<f64>(), 2.0);
    }

    #[test]
    fn min_max_ignore_nan() {
        assert_eq!(Float::min(f32::NAN, 1.0), 1.0);
        assert_eq!(Float::max(1.0, f32::NAN), 1.0);
        assert_eq!(Float::min(-0.5f64, 3.0), -0.5);
    }
}
