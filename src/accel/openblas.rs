use std::ops::RangeInclusive;

use rand::{self, Rng};
use tracing::{debug, trace};

use crate::errors::*;
use super::{check_finite, Accelerator, BinaryOp, UnaryOp};

/// BLAS/LAPACK backend linked against OpenBLAS.
///
/// The Fortran routines are column-major. A row-major buffer read column-major is its
/// transpose, so products are computed as `C' = B' * A'` and inversion uses
/// `inv(A') = inv(A)'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenBlas;

impl Accelerator for OpenBlas {
    fn name(&self) -> &'static str { "openblas" }

    fn matrix_multiply(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        trace!(m, k, n, "dgemm");

        let mut out = vec![0.0; m * n];
        let (m, k, n) = (m as i32, k as i32, n as i32);
        unsafe {
            blas::dgemm(b'N', b'N', n, m, k, 1.0,
                b, n,
                a, k, 0.0,
                &mut out[..], n);
        }
        out
    }

    fn transpose(&self, a: &[f64], rows: usize, cols: usize) -> Vec<f64> {
        debug_assert_eq!(a.len(), rows * cols);
        let mut out = vec![0.0; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                out[c * rows + r] = a[r * cols + c];
            }
        }
        out
    }

    fn factor_and_invert(&self, a: &[f64], n: usize) -> Result<Vec<f64>> {
        debug_assert_eq!(a.len(), n * n);
        trace!(n, "dgetrf");

        let mut inout = a.to_vec();
        let mut ipiv = vec![0i32; n];
        let mut work = vec![0.0; n];
        let (n, mut info) = (n as i32, 0i32);

        unsafe {
            lapack::dgetrf(n, n, &mut inout[..], n, &mut ipiv[..], &mut info);
        }
        if info < 0 {
            return Err(Error::from_kind(ErrorKind::Backend(
                format!("invalid call to dgetrf in argument {}", -info))));
        } else if info > 0 {
            debug!(n, pivot = info, "LU factorization found a zero pivot");
            return Err(Error::from_kind(ErrorKind::NonInvertible(
                "matrix is singular".to_string())));
        }

        unsafe {
            lapack::dgetri(n, &mut inout[..], n, &ipiv[..], &mut work[..], n, &mut info);
        }
        if info < 0 {
            Err(Error::from_kind(ErrorKind::Backend(
                format!("invalid call to dgetri in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::NonInvertible(
                "matrix is singular".to_string())))
        } else {
            check_finite(inout)
        }
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), y.len());
        unsafe { blas::ddot(x.len() as i32, x, 1, y, 1) }
    }

    fn norm(&self, x: &[f64]) -> f64 {
        unsafe { blas::dnrm2(x.len() as i32, x, 1) }
    }

    fn uniform_random(&self, range: RangeInclusive<f64>, count: usize) -> Vec<f64> {
        // dlarnv wants four seed words in 0..4096 with an odd last word
        let mut rng = rand::thread_rng();
        let mut seed = [0i32; 4];
        for word in seed.iter_mut() {
            *word = rng.gen_range(0..4096);
        }
        seed[3] |= 1;

        let mut out = vec![0.0; count];
        unsafe {
            lapack::dlarnv(&[1], &mut seed, count as i32, &mut out[..]);
        }

        let (low, high) = (*range.start(), *range.end());
        out.iter().map(|&u| low + (high - low) * u).collect()
    }

    fn binary(&self, op: BinaryOp, x: &[f64], y: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), y.len());
        let alpha = match op {
            BinaryOp::Add => 1.0,
            BinaryOp::Sub => -1.0,
            _ => return x.iter().zip(y.iter()).map(|(&l, &r)| op.apply(l, r)).collect(),
        };
        // out = x + alpha * y
        let mut out = x.to_vec();
        unsafe {
            blas::daxpy(x.len() as i32, alpha, y, 1, &mut out[..], 1);
        }
        out
    }

    fn unary(&self, op: UnaryOp, x: &[f64]) -> Vec<f64> {
        match op {
            UnaryOp::Scale(s) => {
                let mut out = x.to_vec();
                unsafe {
                    blas::dscal(x.len() as i32, s, &mut out[..], 1);
                }
                out
            }
            _ => x.iter().map(|&v| op.apply(v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dgemm_row_major() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];

        let out = OpenBlas.matrix_multiply(&a, &b, 2, 3, 4);
        assert_eq!(out, vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
    }

    #[test]
    fn test_invert() {
        let inv = OpenBlas.factor_and_invert(&[2.0, 1.0, 4.0, 3.0], 2)
            .expect("inverse failed unexpectedly");
        assert_eq!(inv, vec![1.5, -0.5, -2.0, 1.0]);
        assert!(OpenBlas.factor_and_invert(&[0.0; 4], 2).is_err());
    }

    #[test]
    fn test_axpy_ops() {
        assert_eq!(OpenBlas.binary(BinaryOp::Sub, &[4.0, 6.0], &[1.0, 2.0]), vec![3.0, 4.0]);
        assert_eq!(OpenBlas.unary(UnaryOp::Scale(2.0), &[4.0, 6.0]), vec![8.0, 12.0]);
    }

    #[test]
    fn test_dnrm2_scaled() {
        assert_fp_eq!(OpenBlas.norm(&[3.0, 4.0]), 5.0, 1e-12);
        assert_fp_eq!(OpenBlas.norm(&[1e200, 0.0]) / 1e200, 1.0, 1e-12);
        assert_fp_eq!(OpenBlas.norm(&[1e-170, 0.0]) / 1e-170, 1.0, 1e-12);
    }

    #[test]
    fn test_dlarnv_range() {
        let v = OpenBlas.uniform_random(10.0..=20.0, 500);
        assert_eq!(v.len(), 500);
        assert!(v.iter().all(|&f| f >= 10.0 && f <= 20.0));
    }
}
