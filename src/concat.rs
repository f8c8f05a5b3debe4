use crate::errors::*;
use crate::{Matrix, Vector};

impl Matrix {
    /// Inserts the rows of `block` before row `index`, shifting the following rows down.
    ///
    /// `index` may equal `nrows()` to insert after the last row.
    pub fn insert(&self, block: &Matrix, index: usize) -> Result<Matrix> {
        if block.ncols() != self.ncols() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("insert: block of {} columns into a matrix of {} columns", block.ncols(),
                    self.ncols()))));
        }
        if index > self.nrows() {
            return Err(Error::from_kind(ErrorKind::IndexOutOfBounds(index, self.nrows() + 1)));
        }

        let split = index * self.ncols();
        let mut values = Vec::with_capacity(self.length() + block.length());
        values.extend_from_slice(&self.as_slice()[..split]);
        values.extend_from_slice(block.as_slice());
        values.extend_from_slice(&self.as_slice()[split..]);
        Ok(Matrix::from_parts(values, self.nrows() + block.nrows(), self.ncols()))
    }

    /// Adds a single-row block after the last row.
    pub fn append(&self, row: &Matrix) -> Result<Matrix> {
        check_single_row(row, "append")?;
        self.insert(row, self.nrows())
    }
    /// Adds a single-row block before the first row.
    pub fn prepend(&self, row: &Matrix) -> Result<Matrix> {
        check_single_row(row, "prepend")?;
        self.insert(row, 0)
    }

    pub fn insert_row(&self, row: &Vector, index: usize) -> Result<Matrix> {
        self.insert(&Matrix::from_row(row)?, index)
    }
    pub fn append_row(&self, row: &Vector) -> Result<Matrix> {
        self.insert_row(row, self.nrows())
    }
    pub fn prepend_row(&self, row: &Vector) -> Result<Matrix> {
        self.insert_row(row, 0)
    }

    /// Stacks `other` below `self`.
    pub fn vcat(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.ncols() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("vcat: {} and {} columns", self.ncols(), other.ncols()))));
        }
        self.insert(other, self.nrows())
    }

    /// Places `other` to the right of `self`.
    pub fn hcat(&self, other: &Matrix) -> Result<Matrix> {
        if self.nrows() != other.nrows() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("hcat: {} and {} rows", self.nrows(), other.nrows()))));
        }

        let mut values = Vec::with_capacity(self.length() + other.length());
        for (left, right) in self.iter().zip(other.iter()) {
            values.extend_from_slice(left);
            values.extend_from_slice(right);
        }
        Ok(Matrix::from_parts(values, self.nrows(), self.ncols() + other.ncols()))
    }
}

fn check_single_row(row: &Matrix, op: &str) -> Result<()> {
    if row.nrows() != 1 {
        return Err(Error::from_kind(ErrorKind::DimensionMismatch(
            format!("{}: expected a single row, got {}", op, row.nrows()))));
    }
    Ok(())
}
