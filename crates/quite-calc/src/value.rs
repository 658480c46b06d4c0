//! Operands and results of the calculator.

use std::fmt;

use anyhow::{bail, Context};
use quite_math::{Mat2d, Mat3d, Mat4d, Matrix, Vec2d, Vec3d, Vec4d, Vector};

/// A value that can be passed on the command line or printed as a result.
///
/// Operands are written as:
///
/// - a plain number for scalars (`2.5`),
/// - comma-separated elements for vectors (`1,2,3`),
/// - semicolon-separated rows for square matrices (`1,2;3,4`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vec2(Vec2d),
    Vec3(Vec3d),
    Vec4(Vec4d),
    Mat2(Mat2d),
    Mat3(Mat3d),
    Mat4(Mat4d),
    Pair(Vec3d, Vec3d),
}

impl Value {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.contains(';') {
            return parse_matrix(s);
        }

        let elems = parse_list(s)?;
        Ok(match *elems.as_slice() {
            [x] => Value::Scalar(x),
            [x, y] => Value::Vec2(Vector::from([x, y])),
            [x, y, z] => Value::Vec3(Vector::from([x, y, z])),
            [x, y, z, w] => Value::Vec4(Vector::from([x, y, z, w])),
            _ => bail!("vectors need 2 to 4 elements, got {} in `{}`", elems.len(), s),
        })
    }

    /// Returns a short description of the kind of value, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Vec2(_) => "vec2",
            Value::Vec3(_) => "vec3",
            Value::Vec4(_) => "vec4",
            Value::Mat2(_) => "mat2",
            Value::Mat3(_) => "mat3",
            Value::Mat4(_) => "mat4",
            Value::Pair(..) => "pair",
        }
    }

    /// Returns whether every element of this value is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Value::Scalar(x) => x.is_finite(),
            Value::Vec2(v) => v.as_slice().iter().all(|e| e.is_finite()),
            Value::Vec3(v) => v.as_slice().iter().all(|e| e.is_finite()),
            Value::Vec4(v) => v.as_slice().iter().all(|e| e.is_finite()),
            Value::Mat2(m) => m.into_columns().iter().flatten().all(|e| e.is_finite()),
            Value::Mat3(m) => m.into_columns().iter().flatten().all(|e| e.is_finite()),
            Value::Mat4(m) => m.into_columns().iter().flatten().all(|e| e.is_finite()),
            Value::Pair(a, b) => Value::Vec3(*a).is_finite() && Value::Vec3(*b).is_finite(),
        }
    }
}

fn parse_list(s: &str) -> anyhow::Result<Vec<f64>> {
    s.split(',')
        .map(|elem| {
            let elem = elem.trim();
            elem.parse::<f64>()
                .with_context(|| format!("invalid number `{}`", elem))
        })
        .collect()
}

fn parse_matrix(s: &str) -> anyhow::Result<Value> {
    let rows = s
        .split(';')
        .map(parse_list)
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("invalid matrix `{}`", s))?;

    let n = rows.len();
    if let Some(row) = rows.iter().find(|row| row.len() != n) {
        bail!(
            "matrix `{}` is not square: {} rows, but a row has {} elements",
            s,
            n,
            row.len()
        );
    }

    Ok(match n {
        2 => Value::Mat2(Matrix::from_fn(|r, c| rows[r][c])),
        3 => Value::Mat3(Matrix::from_fn(|r, c| rows[r][c])),
        4 => Value::Mat4(Matrix::from_fn(|r, c| rows[r][c])),
        _ => bail!("matrices need 2 to 4 rows, got {} in `{}`", n, s),
    })
}

fn fmt_matrix<const N: usize>(f: &mut fmt::Formatter<'_>, m: &Matrix<f64, N, N>) -> fmt::Result {
    for row in 0..N {
        if row != 0 {
            writeln!(f)?;
        }
        write!(f, "{}", m.row(row))?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(x) => write!(f, "{}", x),
            Value::Vec2(v) => write!(f, "{}", v),
            Value::Vec3(v) => write!(f, "{}", v),
            Value::Vec4(v) => write!(f, "{}", v),
            Value::Mat2(m) => fmt_matrix(f, m),
            Value::Mat3(m) => fmt_matrix(f, m),
            Value::Mat4(m) => fmt_matrix(f, m),
            Value::Pair(a, b) => write!(f, "{}\n{}", a, b),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Vec2d> for Value {
    fn from(v: Vec2d) -> Self {
        Value::Vec2(v)
    }
}

impl From<Vec3d> for Value {
    fn from(v: Vec3d) -> Self {
        Value::Vec3(v)
    }
}

impl From<Vec4d> for Value {
    fn from(v: Vec4d) -> Self {
        Value::Vec4(v)
    }
}

impl From<Mat2d> for Value {
    fn from(m: Mat2d) -> Self {
        Value::Mat2(m)
    }
}

impl From<Mat3d> for Value {
    fn from(m: Mat3d) -> Self {
        Value::Mat3(m)
    }
}

impl From<Mat4d> for Value {
    fn from(m: Mat4d) -> Self {
        Value::Mat4(m)
    }
}

impl From<(Vec3d, Vec3d)> for Value {
    fn from((a, b): (Vec3d, Vec3d)) -> Self {
        Value::Pair(a, b)
    }
}

#[cfg(test)]
mod tests {
    use quite_math::{vec2, vec3, vec4};

    use super::*;

    #[test]
    fn parse_scalars_and_vectors() {
        assert_eq!(Value::parse("2.5").unwrap(), Value::Scalar(2.5));
        assert_eq!(Value::parse(" -1 ").unwrap(), Value::Scalar(-1.0));
        assert_eq!(Value::parse("1,2").unwrap(), Value::Vec2(vec2(1.0, 2.0)));
        assert_eq!(Value::parse("1, 2, 3").unwrap(), Value::Vec3(vec3(1.0, 2.0, 3.0)));
        assert_eq!(
            Value::parse("0,0,0,1").unwrap(),
            Value::Vec4(vec4(0.0, 0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn parse_matrices() {
        let m = Value::parse("1,2;3,4").unwrap();
        assert_eq!(m, Value::Mat2(Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]])));
        assert_eq!(m.kind(), "mat2");

        let m = Value::parse("1,0,0;0,1,0;0,0,1").unwrap();
        assert_eq!(m, Value::Mat3(Mat3d::identity()));
    }

    #[test]
    fn parse_errors() {
        let err = Value::parse("1,x").unwrap_err();
        assert_eq!(err.to_string(), "invalid number `x`");

        let err = Value::parse("1,2,3,4,5").unwrap_err();
        assert!(err.to_string().contains("2 to 4 elements"), "{}", err);

        let err = Value::parse("1,2;3").unwrap_err();
        assert!(err.to_string().contains("not square"), "{}", err);

        let err = Value::parse("1;2").unwrap_err();
        assert!(err.to_string().contains("not square"), "{}", err);

        let err = Value::parse("1,2;3,y").unwrap_err();
        assert_eq!(err.to_string(), "invalid matrix `1,2;3,y`");
        let cause = err.chain().nth(1).map(|cause| cause.to_string());
        assert_eq!(cause.as_deref(), Some("invalid number `y`"));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Scalar(0.5).to_string(), "0.5");
        assert_eq!(Value::Vec3(vec3(1.0, -2.0, 0.5)).to_string(), "(1, -2, 0.5)");
        assert_eq!(
            Value::Mat2(Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]])).to_string(),
            "(1, 2)\n(3, 4)"
        );
    }

    #[test]
    fn finiteness() {
        assert!(Value::Scalar(1.0).is_finite());
        assert!(!Value::Vec2(vec2(1.0, f64::NAN)).is_finite());
        assert!(!Value::Mat2(Mat2d::ONE * f64::INFINITY).is_finite());
    }
}
