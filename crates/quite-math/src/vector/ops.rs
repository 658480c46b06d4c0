//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Exact, element-wise comparison. Use `ApproxEq` for computed values.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn approx_eq_eps(&self, other: &Self, eps: Self::Tolerance) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! binops {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $sym:tt;)+) => {
        $(
            impl<T, const N: usize> $op for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $f(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T: $op<Output = T> + Copy, const N: usize> $op_assign for Vector<T, N> {
                fn $f_assign(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }

            impl<T: $op<Output = T> + Copy, const N: usize> $op_assign<T> for Vector<T, N> {
                fn $f_assign(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}

// Every operator takes either another vector (element-wise, so `*` is the Hadamard product) or a
// scalar that is applied to each element. Having both rules out a blanket
// `Mul<U> for Vector<T, N> where T: Mul<U>`.
binops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}
