use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use std::slice::{Iter, IterMut};

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::error::MathError;

/// Fixed-length numeric vector. Cloning always copies the backing storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, index: usize) -> Result<&T, MathError> {
        self.data.get(index).ok_or(MathError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), MathError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MathError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn check_len(&self, other: &Vector<T>) -> Result<(), MathError> {
        if self.len() != other.len() {
            return Err(MathError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T>,
{
    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>, MathError> {
        self.check_len(other)?;
        Ok(Vector::from_vec(
            self.iter().zip(other.iter()).map(|(&a, &b)| a + b).collect(),
        ))
    }
}

impl<T> Vector<T>
where
    T: Copy + Sub<Output = T>,
{
    pub fn try_sub(&self, other: &Vector<T>) -> Result<Vector<T>, MathError> {
        self.check_len(other)?;
        Ok(Vector::from_vec(
            self.iter().zip(other.iter()).map(|(&a, &b)| a - b).collect(),
        ))
    }
}

impl<T> Vector<T>
where
    T: Copy + AddAssign,
{
    pub fn try_add_assign(&mut self, other: &Vector<T>) -> Result<&mut Self, MathError> {
        self.check_len(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.iter()) {
            *a += b;
        }
        Ok(self)
    }
}

impl<T> Vector<T>
where
    T: Copy + SubAssign,
{
    pub fn try_sub_assign(&mut self, other: &Vector<T>) -> Result<&mut Self, MathError> {
        self.check_len(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.iter()) {
            *a -= b;
        }
        Ok(self)
    }
}

impl<T> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&self, scalar: T) -> Vector<T> {
        Vector::from_vec(self.iter().map(|&v| v * scalar).collect())
    }
}

impl<T> Vector<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    pub fn dot(&self, other: &Vector<T>) -> Result<T, MathError> {
        self.check_len(other)?;
        Ok(dot_kernel(self.as_slice(), other.as_slice()))
    }

    pub fn magnitude_sq(&self) -> T {
        dot_kernel(self.as_slice(), self.as_slice())
    }
}

impl<T> Vector<T>
where
    T: Float,
{
    pub fn magnitude(&self) -> T {
        self.magnitude_sq().sqrt()
    }
}

pub(crate) fn dot_kernel<T>(lhs: &[T], rhs: &[T]) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a, 'b, T> Add<&'b Vector<T>> for &'a Vector<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Vector<T>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector addition requires equal length vectors"
        );
        Vector::from_vec(self.iter().zip(rhs.iter()).map(|(&a, &b)| a + b).collect())
    }
}

impl<'a, 'b, T> Sub<&'b Vector<T>> for &'a Vector<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector subtraction requires equal length vectors"
        );
        Vector::from_vec(self.iter().zip(rhs.iter()).map(|(&a, &b)| a - b).collect())
    }
}

impl<'a, T> Mul<T> for &'a Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T> AddAssign<&Vector<T>> for Vector<T>
where
    T: Copy + AddAssign,
{
    fn add_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector addition requires equal length vectors"
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl<T> SubAssign<&Vector<T>> for Vector<T>
where
    T: Copy + SubAssign,
{
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector subtraction requires equal length vectors"
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

impl<T> MulAssign<T> for Vector<T>
where
    T: Copy + MulAssign,
{
    fn mul_assign(&mut self, rhs: T) {
        for a in self.data.iter_mut() {
            *a *= rhs;
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
