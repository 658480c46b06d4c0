//! The operations understood by the calculator.

use anyhow::bail;
use quite_math::{scalar, Vec2d, Vec3d};

use crate::value::Value;

/// Matches `$args` against vectors of a single dimension followed by scalars, and evaluates
/// `$body` with the operands bound by value.
///
/// Vector operands are listed before the `;`, scalar operands after it.
macro_rules! vector_op {
    ($args:expr, |$($v:ident),+ ; $($s:ident),*| $body:expr) => {
        match $args {
            [$(Value::Vec2($v)),+ $(, Value::Scalar($s))*] => {
                $(let $v = *$v;)+
                $(let $s = *$s;)*
                Some(Value::from($body))
            }
            [$(Value::Vec3($v)),+ $(, Value::Scalar($s))*] => {
                $(let $v = *$v;)+
                $(let $s = *$s;)*
                Some(Value::from($body))
            }
            [$(Value::Vec4($v)),+ $(, Value::Scalar($s))*] => {
                $(let $v = *$v;)+
                $(let $s = *$s;)*
                Some(Value::from($body))
            }
            _ => None,
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Scale,
    Dot,
    Length,
    LengthSquared,
    Distance,
    Normalize,
    Invert,
    Min,
    Max,
    Clamp,
    ClampLength,
    Lerp,
    Reflect,
    Refract,
    MoveTowards,
    Cross,
    Angle,
    Perpendicular,
    Orthonormalize,
    Barycenter,
    CubicHermite,
    Project,
    Reject,
    Rotate,
    RotateByAxis,
    LineAngle,
    Transpose,
    Determinant,
    Trace,
    Inverse,
    Wrap,
    Remap,
    Degrees,
    Radians,
}

impl Op {
    /// All operations, in the order they are listed in `--help`.
    pub const ALL: &'static [Op] = &[
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Scale,
        Op::Dot,
        Op::Length,
        Op::LengthSquared,
        Op::Distance,
        Op::Normalize,
        Op::Invert,
        Op::Min,
        Op::Max,
        Op::Clamp,
        Op::ClampLength,
        Op::Lerp,
        Op::Reflect,
        Op::Refract,
        Op::MoveTowards,
        Op::Cross,
        Op::Angle,
        Op::Perpendicular,
        Op::Orthonormalize,
        Op::Barycenter,
        Op::CubicHermite,
        Op::Project,
        Op::Reject,
        Op::Rotate,
        Op::RotateByAxis,
        Op::LineAngle,
        Op::Transpose,
        Op::Determinant,
        Op::Trace,
        Op::Inverse,
        Op::Wrap,
        Op::Remap,
        Op::Degrees,
        Op::Radians,
    ];

    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        match Self::ALL.iter().find(|op| op.name() == name) {
            Some(op) => Ok(*op),
            None => bail!("unknown operation `{}` (see `--help` for a list)", name),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Scale => "scale",
            Op::Dot => "dot",
            Op::Length => "length",
            Op::LengthSquared => "length-squared",
            Op::Distance => "distance",
            Op::Normalize => "normalize",
            Op::Invert => "invert",
            Op::Min => "min",
            Op::Max => "max",
            Op::Clamp => "clamp",
            Op::ClampLength => "clamp-length",
            Op::Lerp => "lerp",
            Op::Reflect => "reflect",
            Op::Refract => "refract",
            Op::MoveTowards => "move-towards",
            Op::Cross => "cross",
            Op::Angle => "angle",
            Op::Perpendicular => "perpendicular",
            Op::Orthonormalize => "orthonormalize",
            Op::Barycenter => "barycenter",
            Op::CubicHermite => "cubic-hermite",
            Op::Project => "project",
            Op::Reject => "reject",
            Op::Rotate => "rotate",
            Op::RotateByAxis => "rotate-by-axis",
            Op::LineAngle => "line-angle",
            Op::Transpose => "transpose",
            Op::Determinant => "determinant",
            Op::Trace => "trace",
            Op::Inverse => "inverse",
            Op::Wrap => "wrap",
            Op::Remap => "remap",
            Op::Degrees => "degrees",
            Op::Radians => "radians",
        }
    }

    /// Describes the accepted operands.
    pub fn usage(self) -> &'static str {
        match self {
            Op::Add | Op::Sub => "<a> <b>             (vectors, matrices, or vector and scalar)",
            Op::Mul => "<a> <b>             (element-wise, matrix-vector or matrix-matrix)",
            Op::Scale => "<v> <factor>",
            Op::Dot | Op::Distance | Op::Min | Op::Max => "<a> <b>",
            Op::Length | Op::LengthSquared | Op::Normalize | Op::Invert => "<v>",
            Op::Clamp => "<value> <min> <max>  (scalars or vectors)",
            Op::ClampLength => "<v> <min> <max>",
            Op::Lerp => "<start> <end> <t>",
            Op::Reflect => "<v> <normal>",
            Op::Refract => "<v> <normal> <index>",
            Op::MoveTowards => "<v> <target> <distance>",
            Op::Cross | Op::Orthonormalize | Op::Project | Op::Reject => "<a> <b>      (vec3)",
            Op::Angle => "<a> <b>             (signed for vec2, unsigned for vec3)",
            Op::Perpendicular => "<v>          (vec3)",
            Op::Barycenter => "<p> <a> <b> <c>      (vec3)",
            Op::CubicHermite => "<start> <start-tangent> <end> <end-tangent> <t>  (vec3)",
            Op::Rotate => "<v> <radians>       (vec2)",
            Op::RotateByAxis => "<v> <axis> <radians>  (vec3)",
            Op::LineAngle => "<start> <end>       (vec2)",
            Op::Transpose | Op::Trace => "<m>",
            Op::Determinant | Op::Inverse => "<m>          (2x2 or 3x3)",
            Op::Wrap => "<value> <min> <max>",
            Op::Remap => "<value> <in-start> <in-end> <out-start> <out-end>",
            Op::Degrees => "<radians>",
            Op::Radians => "<degrees>",
        }
    }

    /// Applies this operation to `args`.
    ///
    /// Fails if the number or kinds of the operands don't fit the operation.
    pub fn eval(self, args: &[Value]) -> anyhow::Result<Value> {
        use Value::*;

        log::trace!("evaluating `{}` on {:?}", self.name(), args);

        let result: Option<Value> = match self {
            Op::Add => match args {
                [Mat2(a), Mat2(b)] => Some((*a + *b).into()),
                [Mat3(a), Mat3(b)] => Some((*a + *b).into()),
                [Mat4(a), Mat4(b)] => Some((*a + *b).into()),
                _ => vector_op!(args, |a, b;| a + b).or(vector_op!(args, |a; s| a + s)),
            },
            Op::Sub => match args {
                [Mat2(a), Mat2(b)] => Some((*a - *b).into()),
                [Mat3(a), Mat3(b)] => Some((*a - *b).into()),
                [Mat4(a), Mat4(b)] => Some((*a - *b).into()),
                _ => vector_op!(args, |a, b;| a - b).or(vector_op!(args, |a; s| a - s)),
            },
            Op::Mul => match args {
                [Mat2(a), Mat2(b)] => Some((*a * *b).into()),
                [Mat3(a), Mat3(b)] => Some((*a * *b).into()),
                [Mat4(a), Mat4(b)] => Some((*a * *b).into()),
                [Mat2(m), Vec2(v)] => Some((*m * *v).into()),
                [Mat3(m), Vec3(v)] => Some((*m * *v).into()),
                [Mat4(m), Vec4(v)] => Some((*m * *v).into()),
                [Mat2(m), Scalar(s)] => Some((*m * *s).into()),
                [Mat3(m), Scalar(s)] => Some((*m * *s).into()),
                [Mat4(m), Scalar(s)] => Some((*m * *s).into()),
                _ => vector_op!(args, |a, b;| a * b).or(vector_op!(args, |a; s| a * s)),
            },
            Op::Scale => vector_op!(args, |v; s| v.scale(s)),
            Op::Dot => vector_op!(args, |a, b;| a.dot(b)),
            Op::Length => vector_op!(args, |v;| v.length()),
            Op::LengthSquared => vector_op!(args, |v;| v.length_squared()),
            Op::Distance => vector_op!(args, |a, b;| a.distance(b)),
            Op::Normalize => vector_op!(args, |v;| v.normalize()),
            Op::Invert => vector_op!(args, |v;| v.invert()),
            Op::Min => match args {
                [Scalar(a), Scalar(b)] => Some(a.min(*b).into()),
                _ => vector_op!(args, |a, b;| a.min(b)),
            },
            Op::Max => match args {
                [Scalar(a), Scalar(b)] => Some(a.max(*b).into()),
                _ => vector_op!(args, |a, b;| a.max(b)),
            },
            Op::Clamp => match args {
                [Scalar(v), Scalar(min), Scalar(max)] => Some(scalar::clamp(*v, *min, *max).into()),
                _ => vector_op!(args, |v, min, max;| v.clamp(min, max)),
            },
            Op::ClampLength => vector_op!(args, |v; min, max| v.clamp_length(min, max)),
            Op::Lerp => match args {
                [Scalar(start), Scalar(end), Scalar(t)] => {
                    Some(scalar::lerp(*t, *start, *end).into())
                }
                _ => vector_op!(args, |start, end; t| start.lerp(end, t)),
            },
            Op::Reflect => vector_op!(args, |v, normal;| v.reflect(normal)),
            Op::Refract => vector_op!(args, |v, normal; index| v.refract(normal, index)),
            Op::MoveTowards => {
                vector_op!(args, |v, target; dist| v.move_towards(target, dist))
            }
            Op::Cross => match args {
                [Vec3(a), Vec3(b)] => Some(a.cross(*b).into()),
                _ => None,
            },
            Op::Angle => match args {
                [Vec2(a), Vec2(b)] => Some(a.signed_angle_to(*b).into()),
                [Vec3(a), Vec3(b)] => Some(a.angle_to(*b).into()),
                _ => None,
            },
            Op::Perpendicular => match args {
                [Vec3(v)] => Some(v.perpendicular().into()),
                _ => None,
            },
            Op::Orthonormalize => match args {
                [Vec3(a), Vec3(b)] => Some(a.orthonormalize(*b).into()),
                _ => None,
            },
            Op::Barycenter => match args {
                [Vec3(p), Vec3(a), Vec3(b), Vec3(c)] => Some(p.barycenter(*a, *b, *c).into()),
                _ => None,
            },
            Op::CubicHermite => match args {
                [Vec3(p0), Vec3(m0), Vec3(p1), Vec3(m1), Scalar(t)] => {
                    Some(Vec3d::cubic_hermite(*p0, *m0, *p1, *m1, *t).into())
                }
                _ => None,
            },
            Op::Project => match args {
                [Vec3(v), Vec3(target)] => Some(v.project(*target).into()),
                _ => None,
            },
            Op::Reject => match args {
                [Vec3(v), Vec3(target)] => Some(v.reject(*target).into()),
                _ => None,
            },
            Op::Rotate => match args {
                [Vec2(v), Scalar(radians)] => Some(v.rotate(*radians).into()),
                _ => None,
            },
            Op::RotateByAxis => match args {
                [Vec3(v), Vec3(axis), Scalar(radians)] => {
                    Some(v.rotate_by_axis(*axis, *radians).into())
                }
                _ => None,
            },
            Op::LineAngle => match args {
                [Vec2(start), Vec2(end)] => Some(Vec2d::line_angle(*start, *end).into()),
                _ => None,
            },
            Op::Transpose => match args {
                [Mat2(m)] => Some(m.transpose().into()),
                [Mat3(m)] => Some(m.transpose().into()),
                [Mat4(m)] => Some(m.transpose().into()),
                _ => None,
            },
            Op::Determinant => match args {
                [Mat2(m)] => Some(m.determinant().into()),
                [Mat3(m)] => Some(m.determinant().into()),
                _ => None,
            },
            Op::Trace => match args {
                [Mat2(m)] => Some(m.trace().into()),
                [Mat3(m)] => Some(m.trace().into()),
                [Mat4(m)] => Some(m.trace().into()),
                _ => None,
            },
            Op::Inverse => match args {
                [Mat2(m)] => Some(m.invert().into()),
                [Mat3(m)] => Some(m.invert().into()),
                _ => None,
            },
            Op::Wrap => match args {
                [Scalar(v), Scalar(min), Scalar(max)] => Some(scalar::wrap(*v, *min, *max).into()),
                _ => None,
            },
            Op::Remap => match args {
                [Scalar(v), Scalar(in_lo), Scalar(in_hi), Scalar(out_lo), Scalar(out_hi)] => {
                    Some(scalar::remap(*v, *in_lo, *in_hi, *out_lo, *out_hi).into())
                }
                _ => None,
            },
            Op::Degrees => match args {
                [Scalar(radians)] => Some(scalar::to_degrees(*radians).into()),
                _ => None,
            },
            Op::Radians => match args {
                [Scalar(degrees)] => Some(scalar::to_radians(*degrees).into()),
                _ => None,
            },
        };

        match result {
            Some(value) => Ok(value),
            None => {
                let kinds = args.iter().map(|arg| arg.kind()).collect::<Vec<_>>();
                bail!(
                    "`{}` does not accept operands ({}); usage: {} {}",
                    self.name(),
                    kinds.join(", "),
                    self.name(),
                    self.usage(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quite_math::{vec2, vec3, Matrix};

    use super::*;

    fn eval(op: &str, args: &[&str]) -> anyhow::Result<Value> {
        let args = args
            .iter()
            .map(|arg| Value::parse(arg))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Op::from_name(op)?.eval(&args)
    }

    #[test]
    fn names_roundtrip() {
        for op in Op::ALL {
            assert_eq!(Op::from_name(op.name()).unwrap(), *op);
        }
        assert!(Op::from_name("frobnicate").is_err());
    }

    #[test]
    fn vector_ops() {
        assert_eq!(eval("length", &["3,4"]).unwrap(), Value::Scalar(5.0));
        assert_eq!(eval("dot", &["1,2,3", "4,5,6"]).unwrap(), Value::Scalar(32.0));
        assert_eq!(
            eval("add", &["1,2", "3,4"]).unwrap(),
            Value::Vec2(vec2(4.0, 6.0))
        );
        assert_eq!(
            eval("sub", &["1,2,3", "1"]).unwrap(),
            Value::Vec3(vec3(0.0, 1.0, 2.0))
        );
        assert_eq!(
            eval("cross", &["1,0,0", "0,1,0"]).unwrap(),
            Value::Vec3(vec3(0.0, 0.0, 1.0))
        );
        assert_eq!(
            eval("clamp-length", &["3,4", "0", "2.5"]).unwrap(),
            Value::Vec2(vec2(1.5, 2.0))
        );
        assert_eq!(
            eval("move-towards", &["0,0", "10,0", "4"]).unwrap(),
            Value::Vec2(vec2(4.0, 0.0))
        );
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(eval("clamp", &["15", "1", "10"]).unwrap(), Value::Scalar(10.0));
        assert_eq!(eval("clamp", &["5", "10", "1"]).unwrap(), Value::Scalar(5.0));
        assert_eq!(eval("wrap", &["370", "0", "360"]).unwrap(), Value::Scalar(10.0));
        assert_eq!(eval("lerp", &["2", "4", "0.5"]).unwrap(), Value::Scalar(3.0));
        assert_eq!(
            eval("remap", &["5", "0", "10", "100", "200"]).unwrap(),
            Value::Scalar(150.0)
        );
        assert_eq!(eval("degrees", &["0"]).unwrap(), Value::Scalar(0.0));
    }

    #[test]
    fn matrix_ops() {
        assert_eq!(eval("determinant", &["1,2;3,4"]).unwrap(), Value::Scalar(-2.0));
        assert_eq!(eval("trace", &["1,2;3,4"]).unwrap(), Value::Scalar(5.0));
        assert_eq!(
            eval("transpose", &["1,2;3,4"]).unwrap(),
            Value::Mat2(Matrix::from_rows([[1.0, 3.0], [2.0, 4.0]]))
        );
        assert_eq!(
            eval("inverse", &["1,2;3,4"]).unwrap(),
            Value::Mat2(Matrix::from_rows([[-2.0, 1.0], [1.5, -0.5]]))
        );
        assert_eq!(
            eval("mul", &["0,1;2,3", "4,5"]).unwrap(),
            Value::Vec2(vec2(5.0, 23.0))
        );
    }

    #[test]
    fn degenerate_inputs_are_not_errors() {
        assert_eq!(
            eval("normalize", &["0,0,0"]).unwrap(),
            Value::Vec3(vec3(0.0, 0.0, 0.0))
        );
        let inverse = eval("inverse", &["1,2;2,4"]).unwrap();
        assert!(!inverse.is_finite());
    }

    #[test]
    fn operand_mismatch() {
        let err = eval("cross", &["1,2", "3,4"]).unwrap_err();
        assert!(err.to_string().contains("(vec2, vec2)"), "{}", err);

        let err = eval("dot", &["1,2", "3,4,5"]).unwrap_err();
        assert!(err.to_string().starts_with("`dot` does not accept"), "{}", err);

        assert!(eval("determinant", &["1,0,0,0;0,1,0,0;0,0,1,0;0,0,0,1"]).is_err());
        assert!(eval("length", &[]).is_err());
    }
}
