use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use std::slice::Iter;

use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MathError;
use crate::vector::{dot_kernel, Vector};

/// Row-major matrix stored as equal-length row [`Vector`]s.
///
/// Row and column counts are derived from the stored rows, never kept
/// separately. Every constructor and mutating operation preserves the
/// invariant that all rows share one length and that at least one row and
/// one column exist.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T> Matrix<T> {
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self, MathError> {
        let ncols = match rows.first() {
            Some(row) => row.len(),
            None => return Err(MathError::EmptyMatrix),
        };
        if ncols == 0 {
            return Err(MathError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != ncols {
                log::debug!(
                    "rejecting ragged matrix: row {} has length {}, expected {}",
                    i,
                    row.len(),
                    ncols
                );
                return Err(MathError::RaggedRows {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn from_nested(rows: Vec<Vec<T>>) -> Result<Self, MathError> {
        Self::from_rows(rows.into_iter().map(Vector::from_vec).collect())
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    pub fn get_row(&self, index: usize) -> Result<&Vector<T>, MathError> {
        self.rows.get(index).ok_or(MathError::IndexOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }

    pub fn set_row(&mut self, index: usize, row: Vector<T>) -> Result<(), MathError> {
        if row.len() != self.ncols() {
            return Err(MathError::LengthMismatch {
                expected: self.ncols(),
                found: row.len(),
            });
        }
        let len = self.rows.len();
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                Ok(())
            }
            None => Err(MathError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows.iter().map(|row| row.mapv(&mut f)).collect(),
        }
    }

    fn check_shape(&self, other: &Matrix<T>) -> Result<(), MathError> {
        if self.shape() != other.shape() {
            return Err(MathError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn from_elem(nrows: usize, ncols: usize, value: T) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be non-zero"
        );
        Self {
            rows: vec![Vector::from_elem(ncols, value); nrows],
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_elem(nrows, ncols, T::zero())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T> Matrix<T>
where
    T: Copy + Add<Output = T>,
{
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MathError> {
        self.check_shape(other)?;
        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .zip(other.rows.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Sub<Output = T>,
{
    pub fn try_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MathError> {
        self.check_shape(other)?;
        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .zip(other.rows.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + AddAssign,
{
    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<&mut Self, MathError> {
        self.check_shape(other)?;
        for (a, b) in self.rows.iter_mut().zip(other.rows.iter()) {
            *a += b;
        }
        Ok(self)
    }
}

impl<T> Matrix<T>
where
    T: Copy + SubAssign,
{
    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<&mut Self, MathError> {
        self.check_shape(other)?;
        for (a, b) in self.rows.iter_mut().zip(other.rows.iter()) {
            *a -= b;
        }
        Ok(self)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        Matrix {
            rows: self.rows.iter().map(|row| row.scale(scalar)).collect(),
        }
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    pub fn transpose(&self) -> Matrix<T> {
        let (nrows, ncols) = self.shape();
        let mut rows = Vec::with_capacity(ncols);
        for j in 0..ncols {
            let mut data = Vec::with_capacity(nrows);
            for i in 0..nrows {
                data.push(self.rows[i][j]);
            }
            rows.push(Vector::from_vec(data));
        }
        Matrix { rows }
    }

    pub fn column(&self, index: usize) -> Result<Vector<T>, MathError> {
        if index >= self.ncols() {
            return Err(MathError::IndexOutOfBounds {
                index,
                len: self.ncols(),
            });
        }
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// Matrix-vector product: element i of the result is the dot product of
    /// row i with `other`. `other` must have `ncols()` elements.
    pub fn mul_vector(&self, other: &Vector<T>) -> Result<Vector<T>, MathError> {
        if other.len() != self.ncols() {
            return Err(MathError::LengthMismatch {
                expected: self.ncols(),
                found: other.len(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| dot_kernel(row.as_slice(), other.as_slice()))
            .collect())
    }

    /// Matrix product. Requires `self.ncols() == other.nrows()`; the result
    /// is `self.nrows() × other.ncols()`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MathError> {
        if self.ncols() != other.nrows() {
            return Err(MathError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        log::trace!("matrix product: {:?} x {:?}", self.shape(), other.shape());
        let rhs = other.transpose();
        let rows: Vec<Vector<T>> = self
            .rows
            .iter()
            .map(|row| {
                rhs.rows
                    .iter()
                    .map(|col| dot_kernel(row.as_slice(), col.as_slice()))
                    .collect()
            })
            .collect();
        Ok(Matrix { rows })
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MathError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::from_nested(value)
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = Vector<T>;
    type IntoIter = std::vec::IntoIter<Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a Vector<T>;
    type IntoIter = Iter<'a, Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// No IndexMut<usize>: swapping in a row of a different length would break
// the shape invariant, so row replacement goes through set_row.
impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl<'a, 'b, T> Add<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Matrix addition requires equal shapes"
        );
        Matrix {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl<'a, 'b, T> Sub<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Matrix subtraction requires equal shapes"
        );
        Matrix {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl<'a, T> Mul<T> for &'a Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<'a, 'b, T> Mul<&'b Vector<T>> for &'a Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Vector<T>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.ncols(),
            rhs.len(),
            "Matrix-vector product requires vector length to match columns"
        );
        self.rows
            .iter()
            .map(|row| dot_kernel(row.as_slice(), rhs.as_slice()))
            .collect()
    }
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "Matrix product requires left columns to match right rows"
        );
        let rhs_t = rhs.transpose();
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| {
                    rhs_t
                        .rows
                        .iter()
                        .map(|col| dot_kernel(row.as_slice(), col.as_slice()))
                        .collect()
                })
                .collect(),
        }
    }
}

impl<T> AddAssign<&Matrix<T>> for Matrix<T>
where
    T: Copy + AddAssign,
{
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Matrix addition requires equal shapes"
        );
        for (a, b) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            *a += b;
        }
    }
}

impl<T> SubAssign<&Matrix<T>> for Matrix<T>
where
    T: Copy + SubAssign,
{
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Matrix subtraction requires equal shapes"
        );
        for (a, b) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            *a -= b;
        }
    }
}

impl<T> MulAssign<T> for Matrix<T>
where
    T: Copy + MulAssign,
{
    fn mul_assign(&mut self, rhs: T) {
        for row in self.rows.iter_mut() {
            *row *= rhs;
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vector<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
