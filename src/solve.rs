use tracing::trace;

use crate::accel;
use crate::errors::*;
use crate::Matrix;

impl Matrix {
    /// Inverse through LU factorization with partial pivoting.
    ///
    /// Fails with `NonInvertible` when the matrix is not square, when the factorization hits a
    /// zero pivot, or when the result would contain non-finite values.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::from_kind(ErrorKind::NonInvertible(
                format!("inverse called with non-square {}x{} matrix", self.nrows(),
                    self.ncols()))));
        }

        let n = self.nrows();
        let backend = accel::backend();
        trace!(backend = backend.name(), n, "inverse");
        let inv = backend.factor_and_invert(self.as_slice(), n)?;
        Ok(Matrix::from_parts(inv, n, n))
    }

    /// Integer matrix power.
    ///
    /// `raise(1)` is a copy, `raise(-1)` the inverse, `raise(n)` for `n > 1` multiplies by `self`
    /// `n - 1` times, and `raise(-n)` raises the inverse to `n`. Zero is rejected with
    /// `InvalidExponent`.
    pub fn raise(&self, exponent: i32) -> Result<Matrix> {
        match exponent {
            0 => {
                trace!(exponent, "zero power rejected");
                Err(Error::from_kind(ErrorKind::InvalidExponent(exponent)))
            }
            1 => Ok(self.clone()),
            -1 => self.inverse(),
            n if n > 1 => {
                trace!(exponent, "multiply chain");
                let mut out = self.clone();
                for _ in 1..n {
                    out = out.matrix_multiply(self)?;
                }
                Ok(out)
            }
            n => {
                trace!(exponent, "power of the inverse");
                let positive = n.checked_neg()
                    .ok_or_else(|| Error::from_kind(ErrorKind::InvalidExponent(n)))?;
                self.inverse()?.raise(positive)
            }
        }
    }
}
