use std::{array, fmt};

use crate::{Float, One, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A 2x3 matrix with [`f32`] elements.
pub type Mat2x3f = Mat2x3<f32>;
/// A 2x3 matrix with [`f64`] elements.
pub type Mat2x3d = Mat2x3<f64>;
/// A 2x4 matrix with [`f32`] elements.
pub type Mat2x4f = Mat2x4<f32>;
/// A 2x4 matrix with [`f64`] elements.
pub type Mat2x4d = Mat2x4<f64>;
/// A 3x2 matrix with [`f32`] elements.
pub type Mat3x2f = Mat3x2<f32>;
/// A 3x2 matrix with [`f64`] elements.
pub type Mat3x2d = Mat3x2<f64>;
/// A 3x4 matrix with [`f32`] elements.
pub type Mat3x4f = Mat3x4<f32>;
/// A 3x4 matrix with [`f64`] elements.
pub type Mat3x4d = Mat3x4<f64>;
/// A 4x2 matrix with [`f32`] elements.
pub type Mat4x2f = Mat4x2<f32>;
/// A 4x2 matrix with [`f64`] elements.
pub type Mat4x2d = Mat4x2<f64>;
/// A 4x3 matrix with [`f32`] elements.
pub type Mat4x3f = Mat4x3<f32>;
/// A 4x3 matrix with [`f64`] elements.
pub type Mat4x3d = Mat4x3<f64>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] allow creating 2D
///   rotation matrices from a rotation angle.
///
/// Additionally, some commonly used matrices are predefined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::ONE`] is a matrix with every element set to 1.
/// - [`Matrix::identity`] is a square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use quite_math::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0]
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// ```
///
/// Indexing with a single `usize` addresses the elements in storage order, which is column-major:
/// flat index `i` refers to row `i % R` and column `i / R`.
///
/// ```
/// # use quite_math::*;
/// let mat = Matrix::from_rows([
///     [0.0, 2.0, 4.0],
///     [1.0, 3.0, 5.0],
/// ]);
/// assert_eq!(mat[3], 3.0);
/// assert_eq!(mat[4], mat[(0, 2)]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Arithmetic
///
/// `+` and `-` operate element-wise on matrices of the same shape. `*` performs matrix-vector and
/// matrix-matrix multiplication, or scales every element when the right-hand side is a scalar.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 1.
    ///
    /// *Note*: this is **not** the identity matrix, see [`Matrix::identity`] for that.
    pub const ONE: Self = Self([[T::ONE; R]; C]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as f32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 3.0],
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the column at index `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns the row at index `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0.0));
    /// assert_eq!(mat.get(1, 0), Some(&3.0));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the elements in column-major storage order.
    pub fn into_columns(self) -> [[T; R]; C] {
        self.0
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug
            for FormatRow<'a, T, R, C>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        // Printed row by row, in the natural writing order.
        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector or
    /// matrix with it returns that value unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(Mat3::identity() * v, v);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

// Determinant and inverse only exist up to 3x3; keep both impls in sync!
impl<T: Float> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// The singularity of `self` is not checked: if its [`determinant()`] is zero, the result
    /// contains infinities or NaN.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// assert_eq!(Mat2f::identity().invert(), Mat2f::identity());
    ///
    /// let mat = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_approx_eq!(mat * mat.invert(), Mat2::identity());
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverts this 3x3 matrix by dividing its adjugate by its determinant.
    ///
    /// The singularity of `self` is not checked: if its [`determinant()`] is zero, the result
    /// contains infinities or NaN.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use quite_math::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0],
    ///     [0.0, 0.0, 8.0],
    /// ]);
    /// assert_eq!(mat.invert(), Matrix::from_rows([
    ///     [0.5, 0.0, 0.0],
    ///     [0.0, 0.25, 0.0],
    ///     [0.0, 0.0, 0.125],
    /// ]));
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;

        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        adjugate * (T::ONE / det)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{approx::ApproxEq, assert_approx_eq, vec2, vec3, Vec2f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Mat2x3f::from_columns([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]),
        );
    }

    #[test]
    fn access() {
        #[rustfmt::skip]
        let mut mat = Mat3x2f::from_rows([
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
        ]);
        assert_eq!(mat[(2, 1)], 6.0);
        assert_eq!(mat.row(1), vec2(3.0, 4.0));
        assert_eq!(mat.column(0), vec3(1.0, 3.0, 5.0));
        assert_eq!(mat.into_columns(), [[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]);

        // flat indices are column-major
        let flat: Vec<f32> = (0..6).map(|i| mat[i]).collect();
        assert_eq!(flat, [1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);

        mat[4] = -1.0;
        assert_eq!(mat[(1, 1)], -1.0);
        if let Some(elem) = mat.get_mut(0, 1) {
            *elem = 9.0;
        }
        assert_eq!(mat.get(0, 1), Some(&9.0));
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.get_mut(0, 2), None);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::ONE), "[[1.0, 1.0], [1.0, 1.0]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat4x2f::ZERO, Mat4x2f::default());
        assert_eq!(Mat4d::identity().trace(), 4.0);
    }

    #[test]
    fn add_sub_scale() {
        let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(a + b, Mat2::ONE * 5.0);
        assert_eq!(a - a, Mat2::ZERO);
        assert_eq!(a * 2.0, a + a);

        let mut c = a;
        c += b;
        c -= Mat2::ONE;
        assert_eq!(c, Mat2::ONE * 4.0);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        let vec = vec2(4.0, 5.0);
        let out = mat * vec;
        assert_eq!(out, [4.0 * 0.0 + 5.0 * 1.0, 4.0 * 2.0 + 5.0 * 3.0]);

        let rect = Mat2x3f::from_rows([[1.0, 0.0, 2.0], [0.0, 1.0, -1.0]]);
        assert_eq!(rect * vec3(1.0, 2.0, 3.0), vec2(7.0, -1.0));
    }

    #[test]
    fn mat_mat_mul() {
        // 4x2 * 2x3 = 4x3
        let a = Mat4x2f::from_columns([[1.0, 0.0, 2.0, -1.0], [0.0, 1.0, 1.0, 3.0]]);
        let b = Mat2x3f::from_rows([[1.0, 2.0, 0.0], [-1.0, 0.0, 4.0]]);
        let c: Mat4x3f = a * b;
        assert_eq!(
            c,
            Mat4x3f::from_rows([
                [1.0, 2.0, 0.0],
                [-1.0, 0.0, 4.0],
                [1.0, 4.0, 4.0],
                [-4.0, -2.0, 12.0],
            ])
        );
        assert_eq!(c.row(3), b.row(0) * a.row(3).x + b.row(1) * a.row(3).y);

        assert_eq!(Mat4f::identity() * c, c);
        assert_eq!(c * Mat3f::identity(), c);
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }

    #[test]
    fn rectangular_f64() {
        let a = Mat2x3d::from_rows([[1.0, 0.0, -1.0], [2.0, 1.0, 0.0]]);
        let b = Mat3x4d::from_fn(|row, col| (row + col) as f64);
        let c: Mat2x4d = a * b;
        assert_eq!(c, Mat2x4d::from_rows([[-2.0, -2.0, -2.0, -2.0], [1.0, 4.0, 7.0, 10.0]]));

        let t: Mat4x2d = c.transpose();
        assert_eq!(t.row(3), [-2.0, 10.0]);
        assert_eq!(Mat3x2d::ZERO + Mat3x2d::ONE, Mat3x2d::ONE);
        assert_eq!(Mat4x3d::ONE * 0.0, Mat4x3d::ZERO);
    }

    #[test]
    fn transpose() {
        let mat = Mat3x4f::from_fn(|row, col| (row * 4 + col) as f32);
        assert_eq!(mat.transpose().transpose(), mat);
        assert_eq!(mat.transpose()[(3, 2)], mat[(2, 3)]);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);

        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(mat.determinant(), -2.0);
        assert_eq!(mat.trace(), 5.0);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(m.determinant(), 54.0);
        assert_eq!(m.transpose().determinant(), 54.0);
    }

    #[test]
    fn invert() {
        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_approx_eq!(mat.invert(), Matrix::from_rows([[-2.0, 1.0], [1.5, -0.5]]));
        assert_approx_eq!(mat.invert().invert(), mat);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_approx_eq!(mat * mat.invert(), Mat3::identity()).abs(1e-12);
        assert_approx_eq!(mat.invert() * mat, Mat3::identity()).abs(1e-12);
        assert_approx_eq!(mat.invert().determinant(), 1.0 / 54.0).eps(1e-12);
    }

    #[test]
    fn invert_singular() {
        let singular = Matrix::from_rows([[1.0f32, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.determinant(), 0.0);
        let inv = singular.invert();
        assert!((0..4).all(|i| !inv[i].is_finite()));

        let inv = Mat3f::ONE.invert();
        assert!((0..9).any(|i| !inv[i].is_finite()));
    }

    #[test]
    fn rotation() {
        assert_eq!(Mat2f::rotation_clockwise(0.0), Mat2f::identity());
        assert_eq!(Mat2f::rotation_counterclockwise(0.0), Mat2f::identity());

        let quarter = Mat2f::rotation_counterclockwise(PI / 2.0);
        assert_approx_eq!(quarter * Vec2f::X, Vec2f::Y).abs(1e-6);
        assert_approx_eq!(quarter * Vec2f::Y, -Vec2f::X).abs(1e-6);
        assert_approx_eq!(Mat2f::rotation_clockwise(PI / 2.0) * Vec2f::Y, Vec2f::X).abs(1e-6);

        // Rotations are orthonormal: the inverse is the transpose and the opposite rotation.
        let r = Mat2f::rotation_counterclockwise(0.7);
        assert_approx_eq!(r.invert(), r.transpose()).abs(1e-6);
        assert_approx_eq!(r.invert(), Mat2f::rotation_clockwise(0.7)).abs(1e-6);
        assert_approx_eq!(r.determinant(), 1.0).abs(1e-6);
    }

    #[test]
    fn equality() {
        let mat = Mat2f::rotation_counterclockwise(1.0);
        assert!(mat.approx_eq(&mat));
        assert!(!mat.approx_eq(&(mat * 1.001)));
        assert!(mat.approx_eq(&mat.transpose().transpose()));
    }
}
