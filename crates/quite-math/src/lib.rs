//! Small, fixed-size linear algebra for games and graphics code.
//!
//! This crate provides 2, 3 and 4-element vectors ([`Vector`]), matrices with 2 to 4 rows and
//! columns ([`Matrix`]) and quaternions (an alias of [`Vec4`]), plus the scalar helpers they are
//! built from ([`scalar`]).
//!
//! # Goals & Non-Goals
//!
//! - Every operation is a pure function on `Copy` values. Nothing allocates, logs or panics
//!   (except for out of bounds indexing, like on arrays).
//! - Degenerate inputs are handled in one of two ways: operations with an obvious "do nothing"
//!   answer (normalizing a zero vector, clamping with inverted bounds, ...) return their input
//!   unchanged, everything else follows IEEE 754 and produces infinities or NaN.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors. Both can
//!   be reinterpreted as flat float buffers via [`bytemuck`].
//! - Be generic over the element type, but only support [`f32`] and [`f64`] (see [`Float`]).
//! - Don't provide quaternion algebra, 4x4 determinants or 4x4 inverses.
//!
//! Comparisons of computed values should use [`approx::ApproxEq`] (or the [`assert_approx_eq!`]
//! macro in tests) rather than `==`.

pub mod approx;
mod matrix;
pub mod scalar;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
