use crate::errors::*;
use crate::{Matrix, Vector};

/// Direction along which `reduce` collapses a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// one result per row
    Row,
    /// one result per column
    Column,
}

impl Matrix {
    /// Elementwise transform; the shape is preserved.
    pub fn map<F>(&self, f: F) -> Matrix where F: Fn(f64) -> f64 {
        Matrix::from_parts(self.as_slice().iter().cloned().map(f).collect(), self.nrows(),
            self.ncols())
    }

    /// Row-wise transform. Every row is handed to `f` as a `Vector` and the results are stacked
    /// back into a matrix, so they must all have the same non-zero dimension.
    pub fn map_rows<F>(&self, f: F) -> Result<Matrix> where F: Fn(Vector) -> Vector {
        let rows: Vec<Vector> = self.iter().map(|row| f(Vector::from(row))).collect();
        Matrix::from_vectors(&rows)
    }

    /// Collapses each row (or each column) to a scalar through `f`.
    ///
    /// The result has `nrows()` values for `Axis::Row` and `ncols()` values for
    /// `Axis::Column`.
    pub fn reduce<F>(&self, f: F, axis: Axis) -> Vector where F: Fn(&Vector) -> f64 {
        match axis {
            Axis::Row => self.iter().map(|row| f(&Vector::from(row))).collect(),
            Axis::Column => self.transpose().reduce(f, Axis::Row),
        }
    }
}
