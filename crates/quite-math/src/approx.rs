//! Approximate equality.

use std::{fmt, panic::Location};

use crate::Float;

/// Types that can be compared for *approximate equality*.
///
/// Two scalars `a` and `b` are approximately equal if `|a - b| <= eps * max(|a|, |b|, 1)`. Close to
/// zero this behaves like an absolute comparison with tolerance `eps`; for large values the
/// tolerance grows with their magnitude.
///
/// Compound types (vectors and matrices) are considered equal if all of their elements are.
///
/// The relation is reflexive and symmetric, but not transitive: `a ≈ b` and `b ≈ c` do not imply
/// `a ≈ c` when the differences are close to the tolerance.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type used to express tolerances.
    type Tolerance: Float;

    /// Compares `self` and `other` with the mixed absolute/relative tolerance `eps`.
    fn approx_eq_eps(&self, other: &Rhs, eps: Self::Tolerance) -> bool;

    /// Compares `self` and `other` with an absolute tolerance only.
    ///
    /// The values compare equal if their difference is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` using the machine epsilon of the element type as tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::{*, approx::ApproxEq};
    /// assert!(vec2(1.0f32, 2.0).approx_eq(&vec2(1.0, 2.0 + f32::EPSILON)));
    /// assert!(!vec2(1.0f32, 2.0).approx_eq(&vec2(1.0, 2.001)));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_eps(other, Self::Tolerance::EPSILON)
    }
}

macro_rules! scalar_impls {
    ($($types:ty),+) => {
        $(
            impl ApproxEq for $types {
                type Tolerance = Self;

                fn approx_eq_eps(&self, other: &Self, eps: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // `inf == inf`, `-inf == -inf`, `inf != -inf`, `NaN != anything`
                        return self == other;
                    }

                    let largest = self.abs().max(other.abs()).max(1.0);
                    (self - other).abs() <= largest * eps
                }

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    (self - other).abs() <= abs_tolerance
                }
            }
        )+
    };
}
scalar_impls!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn approx_eq_eps(&self, other: &U, eps: Self::Tolerance) -> bool {
        T::approx_eq_eps(self, other, eps)
    }

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn approx_eq_eps(&self, other: &[U], eps: Self::Tolerance) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.approx_eq_eps(b, eps))
    }

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn approx_eq_eps(&self, other: &[U; N], eps: Self::Tolerance) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), eps)
    }

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// The assertion is checked when the guard is dropped. Before that, the comparison can be
/// configured:
///
/// - [`Asserter::eps`] replaces the tolerance of the default mixed comparison
///   ([`ApproxEq::approx_eq_eps`]).
/// - [`Asserter::abs`] performs an absolute comparison instead ([`ApproxEq::abs_diff_eq`]).
///
/// If both are configured, the values are equal if *either* comparison considers them equal. If
/// neither is, the mixed comparison with [`Float::EPSILON`] is used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    eps: Option<T::Tolerance>,
    abs: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            eps: None,
            abs: None,
        }
    }

    /// Use `eps` as the tolerance of the mixed absolute/relative comparison.
    pub fn eps(&mut self, eps: T::Tolerance) -> &mut Self {
        self.eps = Some(eps);
        self
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    fn equal(&self) -> bool {
        if self.eps.is_none() && self.abs.is_none() {
            return self.left.approx_eq(self.right);
        }

        self.eps
            .map_or(false, |eps| self.left.approx_eq_eps(self.right, eps))
            || self
                .abs
                .map_or(false, |abs| self.left.abs_diff_eq(self.right, abs))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to configure the
/// tolerance.
///
/// # Examples
///
/// ```
/// # use quite_math::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).eps(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use quite_math::*;
/// assert_approx_ne!(100.0, 99.0);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn reports_eq_failure() {
        assert_approx_eq!(0.5, 0.75);
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn reports_ne_failure() {
        assert_approx_ne!(2.0f32, 2.0 + f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn custom_message() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.5], "values differ");
    }

    #[test]
    fn tolerance_near_zero_is_absolute() {
        assert_approx_eq!(0.0f32, f32::EPSILON);
        assert_approx_eq!(-0.5 * f32::EPSILON, 0.5 * f32::EPSILON);
        assert_approx_ne!(0.0f32, 2.0 * f32::EPSILON);
        assert_approx_eq!(0.0f64, f64::EPSILON);
        assert_approx_ne!(0.0f64, f32::EPSILON as f64);
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON);
        assert_approx_ne!(1.0f32, 1.0 + 4.0 * f32::EPSILON);
        // One ULP at 1e4 is about 1e-3, below the scaled tolerance.
        assert!(10000.0f32.approx_eq(&10000.001));
        assert!(!1.0f32.approx_eq(&1.001));
    }

    #[test]
    fn reflexive_symmetric() {
        for &(a, b) in &[(1.0f32, 1.0000001), (0.0, -0.0), (-3.5, -3.5000002), (1e6, 1e6 + 0.1)] {
            assert!(a.approx_eq(&a));
            assert_eq!(a.approx_eq(&b), b.approx_eq(&a));
        }
    }

    #[test]
    fn explicit_tolerances() {
        assert_approx_eq!(10.0, 10.5).eps(0.05);
        assert_approx_ne!(10.0, 10.5).eps(0.01);
        assert_approx_eq!(10.0, 10.5).abs(0.5);
        assert_approx_ne!(10.0, 10.5).abs(0.25);
        assert_approx_eq!(-3.0, -3.0).eps(0.0).abs(0.0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f64::NAN, f64::NAN);
        assert_approx_ne!(f64::NAN, 1.0).abs(f64::INFINITY);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY);
        assert_approx_eq!(f32::NEG_INFINITY, f32::NEG_INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY);
        assert_approx_ne!(f32::MAX, f32::INFINITY).eps(1.0);
    }

    #[test]
    fn collections() {
        assert!([1.0, 2.0].approx_eq(&[1.0, 2.0 + 1e-16]));
        assert!(![1.0, 2.0][..].approx_eq(&[1.0][..]));
        assert!((&[0.25f32; 3]).approx_eq(&[0.25; 3]));
    }
}
