use std::{array, fmt};

use crate::{scalar, Float, Mat2, One, Zero};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// A quaternion, stored as a 4-dimensional vector.
///
/// `x`, `y` and `z` hold the imaginary parts, `w` holds the real part. Quaternions share every
/// operation of [`Vec4`]; no quaternion-specific algebra is provided. Unit length is a convention
/// of the caller and is never checked.
///
/// The identity rotation is [`Vector::W`].
pub type Quaternion<T> = Vec4<T>;
/// A quaternion with [`f32`] elements.
pub type Quatf = Quaternion<f32>;
/// A quaternion with [`f64`] elements.
pub type Quatd = Quaternion<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit axis vectors.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, and `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   array.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` between two vectors operate element-wise (`*` is the Hadamard product,
/// not the dot product). The same operators with a scalar right-hand side apply the scalar to every
/// element. Division never checks for zero: dividing by zero yields infinities or NaN, as it does
/// for plain floats.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    ///
    /// As a [`Quaternion`], this is the identity rotation.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|e| e * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Multiplies every element by `factor`.
    ///
    /// Equivalent to `self * factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        self * factor
    }

    /// Returns the element-wise reciprocal `1 / self`.
    ///
    /// Zero elements turn into infinities.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec2(2.0, -0.5).invert(), vec2(0.5, -2.0));
    /// assert_eq!(vec2(0.0, 1.0).invert(), vec2(f32::INFINITY, 1.0));
    /// ```
    pub fn invert(self) -> Self {
        self.map(|elem| T::ONE / elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This is exactly `self.dot(self)`.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction and is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == T::ZERO {
            return self;
        }
        self / length
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// NaN elements lose against numbers.
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// NaN elements lose against numbers.
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// Each axis is handled independently: an axis whose bounds are inverted (`max < min`) keeps
    /// its value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = vec3(-5.0, 5.0, 50.0);
    /// let clamped = v.clamp(vec3(0.0, 0.0, 100.0), vec3(1.0, 1.0, 0.0));
    /// assert_eq!(clamped, vec3(0.0, 1.0, 50.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| scalar::clamp(self[i], min[i], max[i]))
    }

    /// Scales `self` so that its length lies in `[min, max]`, preserving its direction.
    ///
    /// The vector is returned unchanged if the bounds are inverted (`max < min`), or if it has no
    /// length (and therefore no direction).
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(0.0, 2.5), vec2(1.5, 2.0));
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(10.0, 20.0), vec2(6.0, 8.0));
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(1.0, 10.0), vec2(3.0, 4.0));
    /// ```
    #[doc(alias = "clamp_magnitude")]
    pub fn clamp_length(self, min: T, max: T) -> Self {
        if max < min {
            return self;
        }

        let length = self.length();
        if length == T::ZERO {
            return self;
        }

        let mut factor = T::ONE;
        if length < min {
            factor = min / length;
        }
        if length > max {
            factor = max / length;
        }
        self * factor
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `end` (at `t = 1`).
    ///
    /// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
    pub fn lerp(self, end: Self, t: T) -> Self {
        Self::from_fn(|i| scalar::lerp(t, self[i], end[i]))
    }

    /// Reflects `self` off a surface with the given `normal`.
    ///
    /// `normal` is expected to be of unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = vec2(1.0, -1.0);
    /// assert_eq!(v.reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        let dot = self.dot(normal);
        self - normal * (T::from_f32(2.0) * dot)
    }

    /// Refracts `self` through a surface with the given `normal`.
    ///
    /// `index` is the ratio of the refractive indices of the two media. If the ray would undergo
    /// total internal reflection, `self` is returned unchanged.
    pub fn refract(self, normal: Self, index: T) -> Self {
        let dot = self.dot(normal);
        let diff = T::ONE - index * index * (T::ONE - dot * dot);
        if diff < T::ZERO {
            return self;
        }
        self * index - normal * (dot * index + diff.sqrt())
    }

    /// Moves `self` a distance of `dist` towards `target`.
    ///
    /// The step is never allowed to overshoot: if `target` is closer than `dist`, `self` is
    /// returned unchanged. Non-positive distances also leave `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = Vec2f::ZERO;
    /// assert_eq!(v.move_towards(vec2(10.0, 0.0), 4.0), vec2(4.0, 0.0));
    /// assert_eq!(v.move_towards(vec2(10.0, 0.0), 10.0), vec2(10.0, 0.0));
    /// assert_eq!(v.move_towards(vec2(10.0, 0.0), 12.0), v);
    /// ```
    pub fn move_towards(self, target: Self, dist: T) -> Self {
        if dist <= T::ZERO {
            return self;
        }

        let delta = target - self;
        let remaining = delta.length();
        if remaining < dist {
            return self;
        }
        self + delta * (dist / remaining)
    }
}

impl<T: Float> Vector<T, 2> {
    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::X.rotate(FRAC_PI_2), Vec2f::Y).abs(1e-6);
    /// assert_approx_eq!(Vec2f::Y.rotate(-FRAC_PI_2), Vec2f::X).abs(1e-6);
    /// ```
    pub fn rotate(self, radians: T) -> Self {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` extended into 3D.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Computes the signed counterclockwise angle from `self` to `other`, in radians.
    ///
    /// The result is in `[-π, π]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), FRAC_PI_2);
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T {
        self.perp_dot(other).atan2(self.dot(other))
    }

    /// Returns the negated angle of the line segment from `start` to `end`, relative to the X
    /// axis.
    ///
    /// The negation makes the angle increase clockwise, which matches screen coordinates where
    /// the Y axis points down.
    pub fn line_angle(start: Self, end: Self) -> T {
        -(end.y - start.y).atan2(end.x - start.x)
    }
}

impl<T: Float> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Swapping the
    /// arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Builds an orthonormal pair of vectors from `self` and `other` (Gram-Schmidt).
    ///
    /// The first returned vector is `self`, normalized. The second one is perpendicular to it and
    /// lies in the plane spanned by `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let (a, b) = vec3(2.0, 0.0, 0.0).orthonormalize(vec3(1.0, 1.0, 0.0));
    /// assert_approx_eq!(a, Vec3f::X);
    /// assert_approx_eq!(b, Vec3f::Y);
    /// ```
    pub fn orthonormalize(self, other: Self) -> (Self, Self) {
        let left = self.normalize();
        let normal = left.cross(other).normalize();
        (left, normal.cross(left))
    }

    /// Returns an arbitrary vector perpendicular to `self`.
    ///
    /// The result is the cross product of `self` with the coordinate axis `self` is least
    /// aligned with.
    pub fn perpendicular(self) -> Self {
        let mut min = self.x.abs();
        let mut axis = Self::X;
        if self.y.abs() < min {
            min = self.y.abs();
            axis = Self::Y;
        }
        if self.z.abs() < min {
            axis = Self::Z;
        }
        self.cross(axis)
    }

    /// Computes the barycentric coordinates of the point `self` with respect to the triangle
    /// `(a, b, c)`.
    ///
    /// `self` is projected onto the plane of the triangle. The result `(u, v, w)` satisfies
    /// `u + v + w = 1` and `u * a + v * b + w * c` is the projected point. Degenerate triangles
    /// yield NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let (a, b, c) = (Vec3f::ZERO, Vec3f::X, Vec3f::Y);
    /// assert_approx_eq!(vec3(0.25, 0.5, 7.0).barycenter(a, b, c), vec3(0.25, 0.25, 0.5));
    /// ```
    pub fn barycenter(self, a: Self, b: Self, c: Self) -> Self {
        let ab = b - a;
        let ac = c - a;
        let ap = self - a;

        let ab2 = ab.length_squared();
        let ac2 = ac.length_squared();
        let dot = ab.dot(ac);
        let dp1 = ab.dot(ap);
        let dp2 = ac.dot(ap);

        let denom = ab2 * ac2 - dot * dot;
        let v = (ac2 * dp1 - dot * dp2) / denom;
        let w = (ab2 * dp2 - dot * dp1) / denom;
        vec3(T::ONE - v - w, v, w)
    }

    /// Evaluates the cubic Hermite spline from `start` (with tangent `start_tangent`) to `end`
    /// (with tangent `end_tangent`) at `t`.
    ///
    /// `t = 0` yields `start` and `t = 1` yields `end`.
    pub fn cubic_hermite(
        start: Self,
        start_tangent: Self,
        end: Self,
        end_tangent: Self,
        t: T,
    ) -> Self {
        let (two, three) = (T::from_f32(2.0), T::from_f32(3.0));
        let t2 = scalar::square(t);
        let t3 = scalar::cube(t);

        let h00 = t3 * two - t2 * three + T::ONE;
        let h10 = t3 - t2 * two + t;
        let h01 = t3 * -two + t2 * three;
        let h11 = t3 - t2;

        start * h00 + start_tangent * h10 + end * h01 + end_tangent * h11
    }

    /// Projects `self` onto `target`.
    ///
    /// Projecting onto the zero vector yields NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec3(3.0, 4.0, 5.0).project(vec3(2.0, 0.0, 0.0)), vec3(3.0, 0.0, 0.0));
    /// ```
    pub fn project(self, target: Self) -> Self {
        let magnitude = self.dot(target) / target.length_squared();
        target * magnitude
    }

    /// Returns the part of `self` that is perpendicular to `target`.
    ///
    /// This is `self - self.project(target)`. Rejecting from the zero vector yields NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(vec3(3.0, 4.0, 5.0).reject(vec3(2.0, 0.0, 0.0)), vec3(0.0, 4.0, 5.0));
    /// ```
    pub fn reject(self, target: Self) -> Self {
        self - self.project(target)
    }

    /// Rotates `self` around `axis` by `radians`.
    ///
    /// The rotation is counterclockwise when looking down `axis` towards the origin (right-hand
    /// rule). `axis` does not need to be normalized; a zero axis leaves `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec3f::X.rotate_by_axis(Vec3f::Z, FRAC_PI_2), Vec3f::Y).abs(1e-6);
    /// assert_approx_eq!(Vec3f::X.rotate_by_axis(vec3(0.0, 0.0, 5.0), FRAC_PI_2), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate_by_axis(self, axis: Self, radians: T) -> Self {
        let two = T::from_f32(2.0);
        let half = radians / two;

        // Imaginary part `w` and real part `a` of the rotation quaternion.
        let w = axis.normalize() * half.sin();
        let a = half.cos();

        let wv = w.cross(self);
        let wwv = w.cross(wv);
        self + wv * (two * a) + wwv * two
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// The result is in `[0, π]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// use std::f32::consts::{FRAC_PI_2, PI};
    ///
    /// assert_approx_eq!(Vec3f::Y.angle_to(Vec3f::X), FRAC_PI_2);
    /// assert_approx_eq!(Vec3f::Y.angle_to(-Vec3f::Y), PI);
    /// ```
    pub fn angle_to(self, other: Self) -> T {
        self.cross(other).length().atan2(self.dot(other))
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Constructs a [`Quaternion`] from its imaginary parts `x`, `y`, `z` and its real part `w`.
#[inline]
pub const fn quat<T>(x: T, y: T, z: T, w: T) -> Quaternion<T> {
    vec4(x, y, z, w)
}
