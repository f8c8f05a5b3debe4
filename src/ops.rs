use std::ops::{Add, Div, Mul, Neg, Sub};

use tracing::trace;

use crate::accel::{self, BinaryOp, UnaryOp};
use crate::errors::*;
use crate::{Matrix, Vector};

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, op: &str) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("{}: {}x{} and {}x{} shapes differ", op, self.nrows(), self.ncols(),
                    other.nrows(), other.ncols()))));
        }
        Ok(())
    }
    fn binary(&self, other: &Matrix, op: BinaryOp, name: &str) -> Result<Matrix> {
        self.check_same_shape(other, name)?;
        let out = accel::backend().binary(op, self.as_slice(), other.as_slice());
        Ok(Matrix::from_parts(out, self.nrows(), self.ncols()))
    }
    // combines every row with `v`
    fn broadcast(&self, v: &Vector, op: BinaryOp, name: &str) -> Result<Matrix> {
        if v.dimension() != self.ncols() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("{}: vector of dimension {} against {} columns", name, v.dimension(),
                    self.ncols()))));
        }
        let tiled: Vec<f64> = v.iter().cycle().take(self.length()).cloned().collect();
        let out = accel::backend().binary(op, self.as_slice(), &tiled);
        Ok(Matrix::from_parts(out, self.nrows(), self.ncols()))
    }
    pub(crate) fn unary(&self, op: UnaryOp) -> Matrix {
        Matrix::from_parts(accel::backend().unary(op, self.as_slice()), self.nrows(), self.ncols())
    }

    /// Linear-algebra product `self * other`; requires `self.ncols() == other.nrows()`.
    pub fn matrix_multiply(&self, other: &Matrix) -> Result<Matrix> {
        let (m, k, n) = (self.nrows(), self.ncols(), other.ncols());
        if k != other.nrows() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("matrix_multiply: {}x{} by {}x{}", m, k, other.nrows(), n))));
        }
        let backend = accel::backend();
        trace!(backend = backend.name(), m, k, n, "matrix multiply");
        Ok(Matrix::from_parts(backend.matrix_multiply(self.as_slice(), other.as_slice(), m, k, n),
            m, n))
    }

    /// Hadamard (elementwise) product.
    pub fn elementwise_multiply(&self, other: &Matrix) -> Result<Matrix> {
        self.binary(other, BinaryOp::Mul, "elementwise_multiply")
    }
    pub fn elementwise_divide(&self, other: &Matrix) -> Result<Matrix> {
        self.binary(other, BinaryOp::Div, "elementwise_divide")
    }
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.binary(other, BinaryOp::Add, "add")
    }
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.binary(other, BinaryOp::Sub, "subtract")
    }

    pub fn add_vector(&self, v: &Vector) -> Result<Matrix> {
        self.broadcast(v, BinaryOp::Add, "add_vector")
    }
    pub fn subtract_vector(&self, v: &Vector) -> Result<Matrix> {
        self.broadcast(v, BinaryOp::Sub, "subtract_vector")
    }
    pub fn multiply_vector(&self, v: &Vector) -> Result<Matrix> {
        self.broadcast(v, BinaryOp::Mul, "multiply_vector")
    }
    pub fn divide_vector(&self, v: &Vector) -> Result<Matrix> {
        self.broadcast(v, BinaryOp::Div, "divide_vector")
    }

    pub fn add_scalar(&self, s: f64) -> Matrix { self.unary(UnaryOp::Shift(s)) }
    pub fn subtract_scalar(&self, s: f64) -> Matrix { self.unary(UnaryOp::Shift(-s)) }
    pub fn multiply_scalar(&self, s: f64) -> Matrix { self.unary(UnaryOp::Scale(s)) }
    pub fn divide_scalar(&self, s: f64) -> Matrix { self.unary(UnaryOp::DivideBy(s)) }

    pub fn abs(&self) -> Matrix { self.unary(UnaryOp::Abs) }
    pub fn negate(&self) -> Matrix { self.unary(UnaryOp::Negate) }
    /// Keeps values `>= t`, zeroes the rest.
    pub fn threshold(&self, t: f64) -> Matrix { self.unary(UnaryOp::Threshold(t)) }
    pub fn exp(&self) -> Matrix { self.unary(UnaryOp::Exp) }
    pub fn log(&self) -> Matrix { self.unary(UnaryOp::Log) }
    pub fn square_root(&self) -> Matrix { self.unary(UnaryOp::SquareRoot) }
    /// Elementwise power. For the matrix power see `raise`.
    pub fn power(&self, p: f64) -> Matrix { self.unary(UnaryOp::Power(p)) }
}

fn or_panic<T>(res: Result<T>) -> T {
    match res {
        Ok(out) => out,
        Err(e) => panic!("{}", e),
    }
}

// inherent method called through `<$t>::` so it is never confused with the operator trait
macro_rules! bin_inner {
    ($rhs:ty, $t:ty, $name:ident, $method:ident) => {
        type Output = $t;

        fn $name(self, rhs: $rhs) -> $t {
            or_panic(<$t>::$method(&self, &rhs))
        }
    }
}
macro_rules! implement_binary {
    ($(#[$attr:meta])* $tr:ident, $name:ident, $method:ident, $t:ty) => {
        $(#[$attr])*
        impl $tr<$t> for $t {
            bin_inner!($t, $t, $name, $method);
        }
        $(#[$attr])*
        impl<'a> $tr<&'a $t> for $t {
            bin_inner!(&'a $t, $t, $name, $method);
        }
        $(#[$attr])*
        impl<'a> $tr<$t> for &'a $t {
            bin_inner!($t, $t, $name, $method);
        }
        $(#[$attr])*
        impl<'a, 'b> $tr<&'b $t> for &'a $t {
            bin_inner!(&'b $t, $t, $name, $method);
        }
    }
}

implement_binary!(
    /// # Panics
    /// Panics if the shapes differ.
    Add, add, add, Matrix);
implement_binary!(
    /// # Panics
    /// Panics if the shapes differ.
    Sub, sub, subtract, Matrix);
implement_binary!(
    /// Linear-algebra product.
    ///
    /// # Panics
    /// Panics if the inner dimensions differ.
    Mul, mul, matrix_multiply, Matrix);

implement_binary!(
    /// # Panics
    /// Panics if the dimensions differ.
    Add, add, add, Vector);
implement_binary!(
    /// # Panics
    /// Panics if the dimensions differ.
    Sub, sub, subtract, Vector);

// scalar on either side; `$rhs_op` builds the op for `x op s`, `$lhs_op` for `s op x`
macro_rules! implement_scalar {
    ($tr:ident, $name:ident, $t:ty, $rhs_op:expr, $lhs_op:expr) => {
        impl $tr<f64> for $t {
            type Output = $t;

            fn $name(self, rhs: f64) -> $t {
                self.unary(($rhs_op)(rhs))
            }
        }
        impl<'a> $tr<f64> for &'a $t {
            type Output = $t;

            fn $name(self, rhs: f64) -> $t {
                self.unary(($rhs_op)(rhs))
            }
        }
        impl $tr<$t> for f64 {
            type Output = $t;

            fn $name(self, rhs: $t) -> $t {
                rhs.unary(($lhs_op)(self))
            }
        }
        impl<'a> $tr<&'a $t> for f64 {
            type Output = $t;

            fn $name(self, rhs: &'a $t) -> $t {
                rhs.unary(($lhs_op)(self))
            }
        }
    }
}

implement_scalar!(Add, add, Matrix, UnaryOp::Shift, UnaryOp::Shift);
implement_scalar!(Sub, sub, Matrix, |s: f64| UnaryOp::Shift(-s), UnaryOp::ScalarMinus);
implement_scalar!(Mul, mul, Matrix, UnaryOp::Scale, UnaryOp::Scale);
implement_scalar!(Div, div, Matrix, UnaryOp::DivideBy, UnaryOp::ScalarOver);

implement_scalar!(Add, add, Vector, UnaryOp::Shift, UnaryOp::Shift);
implement_scalar!(Sub, sub, Vector, |s: f64| UnaryOp::Shift(-s), UnaryOp::ScalarMinus);
implement_scalar!(Mul, mul, Vector, UnaryOp::Scale, UnaryOp::Scale);
implement_scalar!(Div, div, Vector, UnaryOp::DivideBy, UnaryOp::ScalarOver);

// negation
impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}
impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}
impl<'a> Neg for &'a Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}
