use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use crate::accel;
use crate::approx;
use crate::errors::*;
use crate::Vector;

/// Dense `rows x cols` matrix of `f64`, stored row-major.
///
/// Matrices are values: nothing mutates one in place, every operation returns a new matrix.
/// Both dimensions are always positive.
#[derive(Debug, Clone)]
pub struct Matrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from a row-major buffer.
    pub fn from_vec(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::from_kind(ErrorKind::InvalidShape(
                format!("matrix dimensions must be positive, got {}x{}", nrows, ncols))));
        }
        if data.len() != nrows * ncols {
            return Err(Error::from_kind(ErrorKind::InvalidShape(
                format!("{} values cannot fill a {}x{} matrix", data.len(), nrows, ncols))));
        }
        Ok(Matrix::from_parts(data, nrows, ncols))
    }

    /// Builds a matrix from nested rows. Every row must have the same length.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(
                format!("row of length {} does not match first row length {}", bad.len(),
                    ncols))));
        }
        let data = rows.into_iter().flat_map(|r| r.into_iter()).collect();
        Matrix::from_vec(data, nrows, ncols)
    }

    /// Builds a matrix with one row per vector.
    pub fn from_vectors(vectors: &[Vector]) -> Result<Matrix> {
        Matrix::new(vectors.iter().map(|v| v.as_slice().to_vec()).collect())
    }
    /// `1 x n` matrix holding `v`.
    pub fn from_row(v: &Vector) -> Result<Matrix> {
        Matrix::from_vec(v.as_slice().to_vec(), 1, v.dimension())
    }
    /// `n x 1` matrix holding `v`.
    pub fn from_column(v: &Vector) -> Result<Matrix> {
        Matrix::from_vec(v.as_slice().to_vec(), v.dimension(), 1)
    }

    #[inline]
    pub(crate) fn from_parts(values: Vec<f64>, rows: usize, cols: usize) -> Matrix {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(values.len(), rows * cols);
        Matrix { values: values, rows: rows, cols: cols }
    }

    fn filled(nrows: usize, ncols: usize, value: f64) -> Matrix {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be positive");
        Matrix::from_parts(vec![value; nrows * ncols], nrows, ncols)
    }

    /// # Panics
    /// Panics if either dimension is zero.
    pub fn ones(nrows: usize, ncols: usize) -> Matrix {
        Matrix::filled(nrows, ncols, 1.0)
    }
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Matrix {
        Matrix::filled(nrows, ncols, 0.0)
    }
    /// Ones on the main diagonal, zeros elsewhere; `nrows` and `ncols` need not match.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn eye(nrows: usize, ncols: usize) -> Matrix {
        let mut m = Matrix::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            m.values[i * ncols + i] = 1.0;
        }
        m
    }
    pub fn identity(n: usize) -> Matrix {
        Matrix::eye(n, n)
    }
    /// Values drawn uniformly from `[0, 4096]`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn rand(nrows: usize, ncols: usize) -> Matrix {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be positive");
        let v = accel::backend().uniform_random(0.0..=4096.0, nrows * ncols);
        Matrix::from_parts(v, nrows, ncols)
    }
    pub fn random_within(nrows: usize, ncols: usize, range: RangeInclusive<f64>)
            -> Result<Matrix> {
        accel::check_range(&range)?;
        Matrix::from_vec(accel::backend().uniform_random(range, nrows * ncols), nrows, ncols)
    }

    pub fn nrows(&self) -> usize { self.rows }
    pub fn ncols(&self) -> usize { self.cols }
    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn length(&self) -> usize { self.values.len() }
    pub fn is_square(&self) -> bool { self.rows == self.cols }

    /// Row-major view of the values.
    pub fn as_slice(&self) -> &[f64] { &self.values[..] }
    pub fn into_vec(self) -> Vec<f64> { self.values }

    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        self.check_row(r)?;
        self.check_col(c)?;
        Ok(self.values[self.index(r, c)])
    }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Result<Vector> {
        self.check_row(r)?;
        Ok(Vector::from(self.row_slice(r)))
    }
    /// Copy of column `c`.
    pub fn column(&self, c: usize) -> Result<Vector> {
        self.check_col(c)?;
        Ok((0..self.rows).map(|r| self.values[self.index(r, c)]).collect())
    }
    pub fn to_vectors(&self) -> Vec<Vector> {
        self.iter().map(Vector::from).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let v = accel::backend().transpose(self.as_slice(), self.rows, self.cols);
        Matrix::from_parts(v, self.cols, self.rows)
    }
    #[inline]
    pub fn t(&self) -> Matrix { self.transpose() }

    /// Iterates over the rows as slices, top to bottom. Each call starts from the first row.
    pub fn iter(&self) -> MatrixIter<'_> {
        MatrixIter {
            mat: self,
            next_row: 0,
        }
    }

    /// Equality with an explicit absolute tolerance instead of one ulp.
    pub fn approx_eq_within(&self, other: &Matrix, tol: f64) -> bool {
        self.dims() == other.dims()
            && approx::count_pairs(self.as_slice(), other.as_slice(),
                |l, r| !approx::approx_eq_within(l, r, tol)) == 0
    }

    #[inline]
    pub(crate) fn row_slice(&self, r: usize) -> &[f64] {
        &self.values[r * self.cols..(r + 1) * self.cols]
    }
    #[inline]
    fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }
    fn check_row(&self, r: usize) -> Result<()> {
        if r >= self.rows {
            return Err(Error::from_kind(ErrorKind::IndexOutOfBounds(r, self.rows)));
        }
        Ok(())
    }
    fn check_col(&self, c: usize) -> Result<()> {
        if c >= self.cols {
            return Err(Error::from_kind(ErrorKind::IndexOutOfBounds(c, self.cols)));
        }
        Ok(())
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.dims() == other.dims()
            && approx::count_pairs(self.as_slice(), other.as_slice(), approx::approx_ne) == 0
    }
}

impl PartialOrd for Matrix {
    fn partial_cmp(&self, other: &Matrix) -> Option<Ordering> {
        if self.dims() != other.dims() {
            return None;
        }
        approx::partial_cmp_slices(self.as_slice(), other.as_slice())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "\n")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{:?}", v)?;
            }
        }
        Ok(())
    }
}

pub struct MatrixIter<'a> {
    mat: &'a Matrix,
    next_row: usize,
}
impl<'a> Iterator for MatrixIter<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]> {
        if self.next_row >= self.mat.nrows() { return None }

        let row = self.mat.row_slice(self.next_row);
        self.next_row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.mat.nrows() - self.next_row;
        (left, Some(left))
    }
}
impl<'a> ExactSizeIterator for MatrixIter<'a> {}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a [f64];
    type IntoIter = MatrixIter<'a>;

    fn into_iter(self) -> MatrixIter<'a> {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::f64;

    #[test]
    fn test_ones() {
        let (m,n) = (5, 10);
        let a = Matrix::ones(m, n);

        assert_eq!(a.dims(), (m, n));
        assert_eq!(a.as_slice().iter().fold(f64::NEG_INFINITY, |acc, &f| acc.max(f)), 1.0);
        assert_eq!(a.as_slice().iter().fold(f64::INFINITY, |acc, &f| acc.min(f)), 1.0);
    }

    #[test]
    fn test_zeros() {
        let (m,n) = (5, 10);
        let a = Matrix::zeros(m, n);

        assert_eq!(a.dims(), (m, n));
        assert_eq!(a.as_slice().iter().fold(f64::NEG_INFINITY, |acc, &f| acc.max(f)), 0.0);
        assert_eq!(a.as_slice().iter().fold(f64::INFINITY, |acc, &f| acc.min(f)), 0.0);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zeros_empty() {
        Matrix::zeros(0, 3);
    }

    #[test]
    fn test_from_vec() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(a.dims(), (2, 3));
        assert_eq!(a.get(0, 2).unwrap(), 3.0);
        assert_eq!(a.get(1, 0).unwrap(), 4.0);

        assert_error!(Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2), ErrorKind::InvalidShape);
        assert_error!(Matrix::from_vec(vec![], 0, 2), ErrorKind::InvalidShape);
    }

    #[test]
    fn test_new() {
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![6.0, 5.0, 4.0]]).unwrap();
        assert_eq!(a.dims(), (2, 3));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 6.0, 5.0, 4.0]);

        assert_error!(Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]), ErrorKind::DimensionMismatch);
        assert_error!(Matrix::new(vec![]), ErrorKind::InvalidShape);
        assert_error!(Matrix::new(vec![vec![], vec![]]), ErrorKind::InvalidShape);
    }

    #[test]
    fn test_from_vectors() {
        let a = Matrix::from_vectors(&[vector![1.0, 2.0], vector![3.0, 4.0], vector![5.0, 6.0]])
            .unwrap();
        assert_eq!(a, mat![1, 2; 3, 4; 5, 6]);

        assert_error!(Matrix::from_vectors(&[vector![1.0, 2.0], vector![3.0]]),
            ErrorKind::DimensionMismatch);

        let r = Matrix::from_row(&vector![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.dims(), (1, 3));
        let c = Matrix::from_column(&vector![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(c.dims(), (3, 1));
        assert_eq!(c.t(), r);
    }

    #[test]
    fn test_get() {
        let a = mat![1, 2; 3, 4];
        assert_eq!(a.dims(), (2, 2));
        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_eq!(a.get(0, 1).unwrap(), 2.0);
        assert_eq!(a.get(1, 0).unwrap(), 3.0);
        assert_eq!(a.get(1, 1).unwrap(), 4.0);

        assert_error!(a.get(2, 0), ErrorKind::IndexOutOfBounds);
        assert_error!(a.get(0, 2), ErrorKind::IndexOutOfBounds);
    }

    #[test]
    fn test_row_column() {
        let a = mat![1, 2, 3; 4, 5, 6];
        assert_eq!(a.row(1).unwrap(), vector![4.0, 5.0, 6.0]);
        assert_eq!(a.column(2).unwrap(), vector![3.0, 6.0]);
        assert_error!(a.row(2), ErrorKind::IndexOutOfBounds);
        assert_error!(a.column(3), ErrorKind::IndexOutOfBounds);

        let vs = a.to_vectors();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs[0], vector![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_eye() {
        let a = Matrix::eye(5, 5);

        assert_eq!(a.dims(), (5, 5));

        for i in 0..5 {
            for j in 0..5 {
                if i == j {
                    assert_eq!(a.get(i, j).unwrap(), 1.0);
                } else {
                    assert_eq!(a.get(i, j).unwrap(), 0.0);
                }
            }
        }
        assert_eq!(Matrix::identity(5), a);
    }

    #[test]
    fn test_eye_nonsquare() {
        assert_eq!(Matrix::eye(2, 3), mat![1, 0, 0; 0, 1, 0]);
        assert_eq!(Matrix::eye(3, 2), mat![1, 0; 0, 1; 0, 0]);
    }

    #[test]
    fn test_rand() {
        let (m, n) = (100, 100);
        let a = Matrix::rand(m, n);

        assert_eq!(a.dims(), (m, n));

        assert!(a.as_slice().iter().fold(f64::NEG_INFINITY, |acc, &f| acc.max(f)) <= 4096.0);
        assert!(a.as_slice().iter().fold(f64::INFINITY, |acc, &f| acc.min(f)) >= 0.0);

        let b = Matrix::random_within(10, 20, -5.0..=5.0).unwrap();
        assert_eq!(b.dims(), (10, 20));
        assert!(b.as_slice().iter().all(|&f| f >= -5.0 && f <= 5.0));

        assert_error!(Matrix::random_within(2, 2, 1.0..=0.0), ErrorKind::InvalidRange);
        assert_error!(Matrix::random_within(0, 2, 0.0..=1.0), ErrorKind::InvalidShape);
    }

    #[test]
    fn test_transpose() {
        let (m, n) = (2, 5);
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0, 30.0, 40.0, 50.0], m, n)
            .unwrap();
        let b = a.t();

        assert_eq!(b.as_slice(), &[1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0, 5.0, 50.0]);

        assert_eq!(a.dims(), (m, n));
        assert_eq!(b.dims(), (n, m));

        assert_eq!(a.get(1, 2).unwrap(), 30.0);
        assert_eq!(a.get(0, 4).unwrap(), 5.0);
        assert_eq!(b.get(2, 1).unwrap(), 30.0);
        assert_eq!(b.get(4, 0).unwrap(), 5.0);

        assert_eq!(b.t(), a);
    }

    #[test]
    fn test_iter_rows() {
        let a = mat![1, 2; 3, 4; 5, 6];
        let rows: Vec<&[f64]> = a.iter().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
        assert_eq!(a.iter().len(), 3);

        // restartable
        assert_eq!(a.iter().count(), 3);
        let mut n = 0;
        for row in &a {
            assert_eq!(row.len(), 2);
            n += 1;
        }
        assert_eq!(n, 3);
    }

    #[test]
    fn test_equality() {
        let a = mat![1, 2; 3, 4];
        assert_eq!(a, mat![1.0, 2.0; 3.0, 4.0]);
        assert!(a != mat![1, 2; 3, 5]);
        assert!(a != mat![1, 2, 3, 4]);
        assert!(a != Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0 + 1e-12], 2, 2).unwrap());
        assert!(a.approx_eq_within(&mat![1, 2; 3, 4.0 + 1e-12], 1e-9));
    }

    #[test]
    fn test_ordering() {
        let a = mat![1, 2; 3, 4];
        let b = mat![2, 3; 4, 5];
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
        assert!(!(a < a.clone()));

        let c = mat![0, 3; 3, 4];
        assert_eq!(a.partial_cmp(&c), None);
        assert_eq!(a.partial_cmp(&a.t()), None);
        assert_eq!(a.partial_cmp(&mat![1, 2, 3, 4]), None);
    }

    #[test]
    fn test_display() {
        let a = mat![1, 2.5; -3, 4];
        assert_eq!(format!("{}", a), "1.0\t2.5\n-3.0\t4.0");
    }
}
