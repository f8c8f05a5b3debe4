use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::RangeInclusive;
use std::slice;

use crate::accel::{self, BinaryOp, UnaryOp};
use crate::approx::{self, approx_eq};
use crate::errors::*;

/// Immutable, fixed-length sequence of `f64` values.
///
/// Every operation returns a new `Vector`; the dimension is the number of values.
#[derive(Debug, Clone)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    pub fn new(values: Vec<f64>) -> Vector {
        Vector { values: values }
    }
    pub fn zeros(count: usize) -> Vector {
        Vector::new(vec![0.0; count])
    }
    pub fn ones(count: usize) -> Vector {
        Vector::new(vec![1.0; count])
    }
    /// Values drawn uniformly from `[0, 4095]`.
    pub fn rand(count: usize) -> Vector {
        Vector::new(accel::backend().uniform_random(0.0..=4095.0, count))
    }
    pub fn random_within(count: usize, range: RangeInclusive<f64>) -> Result<Vector> {
        accel::check_range(&range)?;
        Ok(Vector::new(accel::backend().uniform_random(range, count)))
    }

    pub fn dimension(&self) -> usize { self.values.len() }
    pub fn as_slice(&self) -> &[f64] { &self.values[..] }
    pub fn into_vec(self) -> Vec<f64> { self.values }
    pub fn iter(&self) -> slice::Iter<'_, f64> { self.values.iter() }

    pub fn get(&self, i: usize) -> Result<f64> {
        self.values.get(i).cloned()
            .ok_or_else(|| Error::from_kind(ErrorKind::IndexOutOfBounds(i, self.dimension())))
    }

    fn check_dims(&self, other: &Vector, op: &str) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("{}: vector dimensions {} and {} differ", op, self.dimension(),
                    other.dimension()))));
        }
        Ok(())
    }
    fn binary(&self, other: &Vector, op: BinaryOp, name: &str) -> Result<Vector> {
        self.check_dims(other, name)?;
        Ok(Vector::new(accel::backend().binary(op, self.as_slice(), other.as_slice())))
    }
    pub(crate) fn unary(&self, op: UnaryOp) -> Vector {
        Vector::new(accel::backend().unary(op, self.as_slice()))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.binary(other, BinaryOp::Add, "add")
    }
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.binary(other, BinaryOp::Sub, "subtract")
    }
    /// Elementwise (Hadamard) product.
    pub fn multiply(&self, other: &Vector) -> Result<Vector> {
        self.binary(other, BinaryOp::Mul, "multiply")
    }
    pub fn divide(&self, other: &Vector) -> Result<Vector> {
        self.binary(other, BinaryOp::Div, "divide")
    }

    pub fn add_scalar(&self, s: f64) -> Vector { self.unary(UnaryOp::Shift(s)) }
    pub fn subtract_scalar(&self, s: f64) -> Vector { self.unary(UnaryOp::Shift(-s)) }
    pub fn multiply_scalar(&self, s: f64) -> Vector { self.unary(UnaryOp::Scale(s)) }
    pub fn divide_scalar(&self, s: f64) -> Vector { self.unary(UnaryOp::DivideBy(s)) }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dims(other, "dot")?;
        Ok(accel::backend().dot(self.as_slice(), other.as_slice()))
    }

    /// Euclidean norm. The accelerator scales before squaring, so huge or tiny components do not
    /// overflow or vanish.
    pub fn magnitude(&self) -> f64 {
        accel::backend().norm(self.as_slice())
    }
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with `DegenerateVector` when the magnitude is zero or not finite (an infinite or NaN
    /// component).
    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(Error::from_kind(ErrorKind::DegenerateVector(
                "cannot normalize a zero-magnitude vector")));
        }
        if !magnitude.is_finite() {
            return Err(Error::from_kind(ErrorKind::DegenerateVector(
                "cannot normalize a vector with non-finite magnitude")));
        }
        Ok(self.divide_scalar(magnitude))
    }

    pub fn absolute(&self) -> Vector { self.unary(UnaryOp::Abs) }
    pub fn negate(&self) -> Vector { self.unary(UnaryOp::Negate) }
    /// Keeps values `>= t` and replaces everything below `t` with zero.
    pub fn threshold(&self, t: f64) -> Vector { self.unary(UnaryOp::Threshold(t)) }
    pub fn power(&self, p: f64) -> Vector { self.unary(UnaryOp::Power(p)) }
    pub fn square(&self) -> Vector { self.unary(UnaryOp::Square) }
    pub fn square_root(&self) -> Vector { self.unary(UnaryOp::SquareRoot) }
    pub fn exp(&self) -> Vector { self.unary(UnaryOp::Exp) }
    pub fn log(&self) -> Vector { self.unary(UnaryOp::Log) }
    pub fn log2(&self) -> Vector { self.unary(UnaryOp::Log2) }
    pub fn log10(&self) -> Vector { self.unary(UnaryOp::Log10) }

    pub fn orthogonal_to(&self, other: &Vector) -> Result<bool> {
        Ok(approx_eq(self.dot(other)?, 0.0))
    }

    /// Zero vectors are parallel to everything.
    pub fn parallel_to(&self, other: &Vector) -> Result<bool> {
        self.check_dims(other, "parallel")?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let cos = self.normalize()?.dot(&other.normalize()?)?;
        Ok(approx_eq(cos.abs(), 1.0))
    }

    /// Projection onto `basis`, taken through the unit basis so large components do not overflow.
    pub fn project(&self, basis: &Vector) -> Result<Vector> {
        self.component_parallel(basis)
    }

    /// `(self . b) * b` for the unit basis `b`.
    pub fn component_parallel(&self, basis: &Vector) -> Result<Vector> {
        let normalized = basis.normalize()?;
        let weight = self.dot(&normalized)?;
        Ok(normalized.multiply_scalar(weight))
    }

    pub fn component_orthogonal(&self, basis: &Vector) -> Result<Vector> {
        let parallel = self.component_parallel(basis)?;
        self.subtract(&parallel)
    }

    pub fn angle_to(&self, other: &Vector) -> Result<f64> {
        angle(self, other)
    }
}

/// Angle in radians between two vectors, from the dot product of their unit vectors.
///
/// Fails with `DegenerateVector` if either vector has zero magnitude or a non-finite component;
/// a NaN cosine is never clamped into a result.
pub fn angle(lhs: &Vector, rhs: &Vector) -> Result<f64> {
    lhs.check_dims(rhs, "angle")?;
    let cos = lhs.normalize()?.dot(&rhs.normalize()?)?;
    if cos.is_nan() {
        return Err(Error::from_kind(ErrorKind::DegenerateVector(
            "angle is undefined for vectors with NaN components")));
    }
    // rounding can push the cosine just past +/-1
    Ok(cos.max(-1.0).min(1.0).acos())
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        approx::slices_approx_eq(self.as_slice(), other.as_slice())
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Vector) -> Option<Ordering> {
        approx::partial_cmp_slices(self.as_slice(), other.as_slice())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", v)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Vector {
        Vector::new(values)
    }
}
impl<'a> From<&'a [f64]> for Vector {
    fn from(values: &'a [f64]) -> Vector {
        Vector::new(values.to_vec())
    }
}
impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Vector {
        Vector::new(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> slice::Iter<'a, f64> {
        self.values.iter()
    }
}
