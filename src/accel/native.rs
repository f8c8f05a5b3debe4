use std::ops::RangeInclusive;

use nalgebra::{DMatrix, DVector};
use rand::distributions::{Distribution, Uniform};
use tracing::{debug, trace};

use crate::errors::*;
use super::{check_finite, Accelerator};

/// Pure Rust backend built on `nalgebra` kernels and the `rand` thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

// nalgebra stores column-major, so the column-major slice of a matrix read from row-major data is
// the row-major layout of its transpose.
#[inline]
fn from_row_major(data: &[f64], nrows: usize, ncols: usize) -> DMatrix<f64> {
    DMatrix::from_row_slice(nrows, ncols, data)
}
#[inline]
fn to_row_major(mat: &DMatrix<f64>) -> Vec<f64> {
    mat.transpose().as_slice().to_vec()
}

impl Accelerator for Native {
    fn name(&self) -> &'static str { "native" }

    fn matrix_multiply(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        trace!(m, k, n, "native matrix multiply");

        let product = from_row_major(a, m, k) * from_row_major(b, k, n);
        to_row_major(&product)
    }

    fn transpose(&self, a: &[f64], rows: usize, cols: usize) -> Vec<f64> {
        debug_assert_eq!(a.len(), rows * cols);
        from_row_major(a, rows, cols).as_slice().to_vec()
    }

    fn factor_and_invert(&self, a: &[f64], n: usize) -> Result<Vec<f64>> {
        debug_assert_eq!(a.len(), n * n);
        trace!(n, "native LU factorization");

        match from_row_major(a, n, n).lu().try_inverse() {
            Some(inv) => check_finite(to_row_major(&inv)),
            None => {
                debug!(n, "LU factorization found a zero pivot");
                Err(Error::from_kind(ErrorKind::NonInvertible(
                    "matrix is singular".to_string())))
            }
        }
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), y.len());
        DVector::from_vec(x.to_vec()).dot(&DVector::from_vec(y.to_vec()))
    }

    // largest magnitude factored out before squaring
    fn norm(&self, x: &[f64]) -> f64 {
        if x.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }
        let scale = x.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let scaled = DVector::from_iterator(x.len(), x.iter().map(|v| v / scale));
        scale * scaled.norm()
    }

    fn uniform_random(&self, range: RangeInclusive<f64>, count: usize) -> Vec<f64> {
        let dist = Uniform::new_inclusive(*range.start(), *range.end());
        let mut rng = rand::thread_rng();
        dist.sample_iter(&mut rng).take(count).collect()
    }
}
