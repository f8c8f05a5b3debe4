//! Binding to the dense linear-algebra kernels that back `Vector` and `Matrix`.
//!
//! All buffers are row-major. Implementations receive immutable inputs and hand back a freshly
//! allocated output; any scratch space they need lives only for the duration of one call.
//! Callers validate shapes before dispatching, so kernels only `debug_assert!` them.

use std::ops::RangeInclusive;

use crate::errors::*;

pub mod native;
#[cfg(feature = "openblas")]
pub mod openblas;

pub use self::native::Native;
#[cfg(feature = "openblas")]
pub use self::openblas::OpenBlas;

/// Elementwise operation over two equal-length buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    /// `x - y`
    Sub,
    Mul,
    /// `x / y`
    Div,
}
impl BinaryOp {
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match *self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div => x / y,
        }
    }
}

/// Elementwise operation over one buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Abs,
    Negate,
    /// keep values `>= t`, zero the rest
    Threshold(f64),
    Power(f64),
    Square,
    SquareRoot,
    Exp,
    Log,
    Log2,
    Log10,
    /// `x + s`
    Shift(f64),
    /// `x * s`
    Scale(f64),
    /// `x / s`
    DivideBy(f64),
    /// `s - x`
    ScalarMinus(f64),
    /// `s / x`
    ScalarOver(f64),
}
impl UnaryOp {
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            UnaryOp::Abs            => x.abs(),
            UnaryOp::Negate         => -x,
            UnaryOp::Threshold(t)   => if x >= t { x } else { 0.0 },
            UnaryOp::Power(p)       => x.powf(p),
            UnaryOp::Square         => x * x,
            UnaryOp::SquareRoot     => x.sqrt(),
            UnaryOp::Exp            => x.exp(),
            UnaryOp::Log            => x.ln(),
            UnaryOp::Log2           => x.log2(),
            UnaryOp::Log10          => x.log10(),
            UnaryOp::Shift(s)       => x + s,
            UnaryOp::Scale(s)       => x * s,
            UnaryOp::DivideBy(s)    => x / s,
            UnaryOp::ScalarMinus(s) => s - x,
            UnaryOp::ScalarOver(s)  => s / x,
        }
    }
}

/// Dense linear-algebra compute provider.
pub trait Accelerator: Send + Sync {
    /// Short name of the backend, used in log events.
    fn name(&self) -> &'static str;

    /// `(m x k) * (k x n)`, returning the `m x n` product.
    fn matrix_multiply(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64>;

    /// Transpose of a `rows x cols` buffer, returned as `cols x rows`.
    fn transpose(&self, a: &[f64], rows: usize, cols: usize) -> Vec<f64>;

    /// LU-factorize (partial pivoting) the `n x n` buffer and invert from the factors.
    ///
    /// Fails with `NonInvertible` on a zero pivot or a non-finite result.
    fn factor_and_invert(&self, a: &[f64], n: usize) -> Result<Vec<f64>>;

    fn dot(&self, x: &[f64], y: &[f64]) -> f64;

    /// Euclidean norm, computed without overflow or underflow of the intermediate squares.
    fn norm(&self, x: &[f64]) -> f64;

    /// `count` samples, uniformly distributed over `range`.
    fn uniform_random(&self, range: RangeInclusive<f64>, count: usize) -> Vec<f64>;

    fn binary(&self, op: BinaryOp, x: &[f64], y: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), y.len());
        x.iter().zip(y.iter()).map(|(&l, &r)| op.apply(l, r)).collect()
    }

    fn unary(&self, op: UnaryOp, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| op.apply(v)).collect()
    }
}

static NATIVE: Native = Native;
#[cfg(feature = "openblas")]
static OPENBLAS: OpenBlas = OpenBlas;

/// The accelerator selected at compile time: OpenBLAS with the `openblas` feature, otherwise the
/// native backend.
#[cfg(not(feature = "openblas"))]
pub fn backend() -> &'static dyn Accelerator {
    &NATIVE
}
#[cfg(feature = "openblas")]
pub fn backend() -> &'static dyn Accelerator {
    &OPENBLAS
}

/// The native backend, regardless of feature selection.
pub fn native() -> &'static dyn Accelerator {
    &NATIVE
}

/// Rejects inverse results carrying NaN or infinity.
pub(crate) fn check_finite(inv: Vec<f64>) -> Result<Vec<f64>> {
    if inv.iter().all(|v| v.is_finite()) {
        Ok(inv)
    } else {
        Err(Error::from_kind(ErrorKind::NonInvertible(
            "inverse has non-finite entries".to_string())))
    }
}

/// Rejects empty, reversed or non-finite random ranges.
pub(crate) fn check_range(range: &RangeInclusive<f64>) -> Result<()> {
    let (low, high) = (*range.start(), *range.end());
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(Error::from_kind(ErrorKind::InvalidRange(low, high)));
    }
    Ok(())
}
