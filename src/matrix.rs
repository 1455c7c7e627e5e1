//! Fixed-size matrix type.
//!
//! [`Matrix<T, N, M>`] stores an `N`-column by `M`-row grid of
//! floating-point elements inline, with both dimensions carried in the
//! type. The element at column `i`, row `j` lives at flat offset
//! `i + N * j`, so the flat view walks row by row.
//!
//! # Quick Start
//!
//! ```
//! use lineal::{Matrix, Vector};
//!
//! // 3 columns x 2 rows.
//! let m = Matrix::from_rows([
//!     [1.0_f32, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//! ]);
//! let v = Vector::from_array([1.0_f32, 1.0, 1.0]);
//!
//! assert_eq!(m * v, Vector::from_array([6.0, 15.0]));
//! ```

use std::array;
use std::fmt;
use std::iter;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice;

use crate::error::{LinealError, Result};
use crate::traits::{approx_eq, Scalar};
use crate::vector::Vector;

/// A fixed-size matrix with `N` columns and `M` rows of floating-point
/// elements.
///
/// Storage is row-major: row `j` is a contiguous `[T; N]`, and the flat
/// element order matches the `i + N * j` addressing used by
/// [`entry`](Matrix::entry) and the unchecked accessors. Equality is
/// approximate with the same per-element rule as
/// [`Vector`](crate::Vector): bit-identical or within
/// [`Scalar::TOLERANCE`].
///
/// # Examples
///
/// ```
/// use lineal::Matrix;
///
/// let m = Matrix::from_rows([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.entry(0, 1), Ok(&3.0));
/// assert_eq!(m[(0, 1)], m[2]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Matrix<T: Scalar, const N: usize, const M: usize> {
    data: [[T; N]; M],
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Creates a matrix with every element set to zero.
    #[must_use]
    pub fn zeros() -> Self {
        Self::full(T::zero())
    }

    /// Creates a matrix with every element set to one.
    #[must_use]
    pub fn ones() -> Self {
        Self::full(T::one())
    }

    /// Creates a matrix by broadcasting `value` into every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let m = Matrix::<f32, 3, 2>::full(0.5);
    /// assert!(m.iter().all(|&x| x == 0.5));
    /// ```
    #[must_use]
    pub fn full(value: T) -> Self {
        Self {
            data: [[value; N]; M],
        }
    }

    /// Creates a matrix from `M` rows of `N` elements each.
    #[must_use]
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self { data: rows }
    }

    /// Creates a matrix by evaluating `f` at every (column, row) pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// // Identity: 1 on the diagonal, 0 elsewhere.
    /// let eye = Matrix::<f64, 3, 3>::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(eye.entry(1, 1), Ok(&1.0));
    /// assert_eq!(eye.entry(2, 0), Ok(&0.0));
    /// ```
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: array::from_fn(|j| array::from_fn(|i| f(i, j))),
        }
    }

    /// Creates a matrix from a flat slice of exactly `N * M` elements in
    /// `i + N * j` order.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::LengthMismatch`] if `slice.len() != N * M`.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        if slice.len() != N * M {
            return Err(LinealError::length_mismatch(N * M, slice.len()));
        }
        Ok(Self::from_fn(|i, j| slice[i + N * j]))
    }

    /// Returns the total number of elements, `N * M`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N * M
    }

    /// Returns `true` if the matrix holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N * M == 0
    }

    /// Returns the shape as `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (M, N)
    }

    /// Returns the number of rows, `M`.
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        M
    }

    /// Returns the number of columns, `N`.
    #[must_use]
    pub const fn n_cols(&self) -> usize {
        N
    }

    /// Returns a reference to the element at flat `index`, verifying the
    /// bound.
    ///
    /// The flat order is row by row: `index = i + N * j` for column `i`,
    /// row `j`. The indexing operator (`m[n]`) performs the same bound
    /// check but panics instead of returning an error.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfBounds`] if `index >= N * M`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(LinealError::IndexOutOfBounds { index, len: N * M })
    }

    /// Returns a mutable reference to the element at flat `index`,
    /// verifying the bound.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfBounds`] if `index >= N * M`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(LinealError::IndexOutOfBounds { index, len: N * M })
    }

    /// Returns a reference to the element at column `i`, row `j`, verifying
    /// both axes.
    ///
    /// The indexing operator (`m[(i, j)]`) performs the same checks but
    /// panics instead of returning an error.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EntryOutOfBounds`] if `i >= N` or `j >= M`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.entry(1, 0), Ok(&2.0));
    /// assert!(m.entry(2, 0).is_err());
    /// ```
    pub fn entry(&self, i: usize, j: usize) -> Result<&T> {
        if i >= N || j >= M {
            return Err(LinealError::entry_out_of_bounds(i, j, N, M));
        }
        Ok(&self.data[j][i])
    }

    /// Returns a mutable reference to the element at column `i`, row `j`,
    /// verifying both axes.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EntryOutOfBounds`] if `i >= N` or `j >= M`.
    pub fn entry_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        if i >= N || j >= M {
            return Err(LinealError::entry_out_of_bounds(i, j, N, M));
        }
        Ok(&mut self.data[j][i])
    }

    /// Returns a reference to the element at flat `index` without any bound
    /// check.
    ///
    /// # Safety
    ///
    /// Calling this method with `index >= N * M` is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < N * M.
        unsafe { self.data.as_flattened().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at flat `index` without
    /// any bound check.
    ///
    /// # Safety
    ///
    /// Calling this method with `index >= N * M` is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < N * M.
        unsafe { self.data.as_flattened_mut().get_unchecked_mut(index) }
    }

    /// Returns a reference to the element at column `i`, row `j` through
    /// the flat offset `i + N * j`, without any bound check.
    ///
    /// # Safety
    ///
    /// The flat offset `i + N * j` must be below `N * M`. A column index
    /// `i >= N` whose offset still lands inside the storage reads from a
    /// neighboring row rather than failing.
    #[must_use]
    pub unsafe fn entry_unchecked(&self, i: usize, j: usize) -> &T {
        // SAFETY: the caller guarantees i + N * j < N * M.
        unsafe { self.data.as_flattened().get_unchecked(i + N * j) }
    }

    /// Returns a mutable reference to the element at column `i`, row `j`
    /// through the flat offset `i + N * j`, without any bound check.
    ///
    /// # Safety
    ///
    /// The flat offset `i + N * j` must be below `N * M`. A column index
    /// `i >= N` whose offset still lands inside the storage writes into a
    /// neighboring row rather than failing.
    pub unsafe fn entry_unchecked_mut(&mut self, i: usize, j: usize) -> &mut T {
        // SAFETY: the caller guarantees i + N * j < N * M.
        unsafe { self.data.as_flattened_mut().get_unchecked_mut(i + N * j) }
    }

    /// Returns an iterator over the elements in flat order.
    ///
    /// Every call starts a fresh traversal over the same storage.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.as_flattened().iter()
    }

    /// Returns an iterator yielding mutable references in flat order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.as_flattened_mut().iter_mut()
    }

    /// Returns the elements as a flat slice in `i + N * j` order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Returns the elements as a flat mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Returns row `j` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `j >= M`.
    #[must_use]
    pub fn row(&self, j: usize) -> Vector<T, N> {
        Vector::from_array(self.data[j])
    }

    /// Returns column `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn column(&self, i: usize) -> Vector<T, M> {
        assert!(i < N, "column index {i} out of bounds (cols={N})");
        Vector::from_fn(|j| self.data[j][i])
    }

    /// Returns the transpose, an `M`-column by `N`-row matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.entry(1, 2), m.entry(2, 1));
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, M, N> {
        Matrix::from_fn(|i, j| self.data[i][j])
    }
}

impl<T: Scalar, const N: usize, const M: usize> Default for Matrix<T, N, M> {
    /// The zero matrix.
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<[[T; N]; M]> for Matrix<T, N, M> {
    fn from(rows: [[T; N]; M]) -> Self {
        Self { data: rows }
    }
}

/// Approximate equality: element pairs must be bit-identical or within
/// [`Scalar::TOLERANCE`] of each other. `NaN` elements never compare equal.
impl<T: Scalar, const N: usize, const M: usize> PartialEq for Matrix<T, N, M> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Scalar, const N: usize, const M: usize> Index<usize> for Matrix<T, N, M> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data.as_flattened()[index]
    }
}

impl<T: Scalar, const N: usize, const M: usize> IndexMut<usize> for Matrix<T, N, M> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data.as_flattened_mut()[index]
    }
}

impl<T: Scalar, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    /// `m[(i, j)]` addresses column `i`, row `j` with both axes checked.
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < N, "column index {i} out of bounds (cols={N})");
        &self.data[j][i]
    }
}

impl<T: Scalar, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < N, "column index {i} out of bounds (cols={N})");
        &mut self.data[j][i]
    }
}

impl<T: Scalar, const N: usize, const M: usize> IntoIterator for Matrix<T, N, M> {
    type Item = T;
    type IntoIter = iter::Flatten<array::IntoIter<[T; N], M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter().flatten()
    }
}

impl<'a, T: Scalar, const N: usize, const M: usize> IntoIterator for &'a Matrix<T, N, M> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar, const N: usize, const M: usize> IntoIterator for &'a mut Matrix<T, N, M> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for Matrix<T, N, M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.data[j][i] + rhs.data[j][i])
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn add(self, rhs: Self) -> Matrix<T, N, M> {
        Matrix::from_fn(|i, j| self.data[j][i] + rhs.data[j][i])
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign for Matrix<T, N, M> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.as_slice().iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for Matrix<T, N, M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.data[j][i] - rhs.data[j][i])
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn sub(self, rhs: Self) -> Matrix<T, N, M> {
        Matrix::from_fn(|i, j| self.data[j][i] - rhs.data[j][i])
    }
}

impl<T: Scalar, const N: usize, const M: usize> SubAssign for Matrix<T, N, M> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.iter_mut().zip(rhs.as_slice().iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Neg for Matrix<T, N, M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_fn(|i, j| -self.data[j][i])
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for Matrix<T, N, M> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|i, j| self.data[j][i] * rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn mul(self, rhs: T) -> Matrix<T, N, M> {
        Matrix::from_fn(|i, j| self.data[j][i] * rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for Matrix<T, N, M> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.iter_mut() {
            *a = *a * rhs;
        }
    }
}

// Coherence forbids `impl Mul<Matrix<T, N, M>> for T` with a generic scalar
// on the left, so each supported float type gets the commuted form spelled
// out.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize, const M: usize> Mul<Matrix<$t, N, M>> for $t {
            type Output = Matrix<$t, N, M>;

            fn mul(self, rhs: Matrix<$t, N, M>) -> Matrix<$t, N, M> {
                rhs * self
            }
        }

        impl<const N: usize, const M: usize> Mul<&Matrix<$t, N, M>> for $t {
            type Output = Matrix<$t, N, M>;

            fn mul(self, rhs: &Matrix<$t, N, M>) -> Matrix<$t, N, M> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64);

/// Matrix on the left: `result[j]` is the dot of row `j` with the vector.
///
/// Each output element starts from zero and accumulates its products in
/// ascending column order.
impl<T: Scalar, const N: usize, const M: usize> Mul<&Vector<T, N>> for &Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: &Vector<T, N>) -> Vector<T, M> {
        Vector::from_fn(|j| {
            self.data[j]
                .iter()
                .zip(rhs.iter())
                .fold(T::zero(), |acc, (&m, &v)| acc + m * v)
        })
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<Vector<T, N>> for Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, M> {
        &self * &rhs
    }
}

/// Vector on the left: `result[i]` is the dot of column `i` with the
/// vector, so `v * m` equals `m.transpose() * v` element for element.
///
/// Each output element starts from zero and accumulates its products in
/// ascending row order.
impl<T: Scalar, const N: usize, const M: usize> Mul<&Matrix<T, N, M>> for &Vector<T, M> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: &Matrix<T, N, M>) -> Vector<T, N> {
        Vector::from_fn(|i| {
            (0..M).fold(T::zero(), |acc, j| acc + self[j] * rhs.data[j][i])
        })
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<Matrix<T, N, M>> for Vector<T, M> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Matrix<T, N, M>) -> Vector<T, N> {
        &self * &rhs
    }
}

/// Renders the flat element count, a blank line, then one bracketed row per
/// line in the same `[a,b,...]` form [`Vector`](crate::Vector) uses.
impl<T: Scalar, const N: usize, const M: usize> fmt::Display for Matrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", N * M)?;
        writeln!(f)?;
        for row in &self.data {
            write!(f, "[")?;
            for (i, x) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{x}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
