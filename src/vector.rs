//! Fixed-length vector type.
//!
//! [`Vector<T, N>`] stores exactly `N` elements of a floating-point type
//! inline, with the length carried in the type. Operations between vectors
//! of different lengths do not compile, so there is no runtime
//! dimension-mismatch error path.
//!
//! # Quick Start
//!
//! ```
//! use lineal::Vector;
//!
//! let v = Vector::from_array([1.0_f32, 2.0, 3.0]);
//! let w = Vector::full(1.0);
//!
//! assert_eq!(v + w, Vector::from_array([2.0, 3.0, 4.0]));
//! assert_eq!(v.dot(&v), 14.0);
//! ```

use std::array;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice;

use crate::error::{LinealError, Result};
use crate::traits::{approx_eq, Scalar};

/// A fixed-length vector of `N` floating-point elements.
///
/// The element array lives inline, so the type is `Copy` and never
/// allocates. Equality is approximate: two vectors compare equal when every
/// element pair is bit-identical or within [`Scalar::TOLERANCE`] of each
/// other, which makes results of different but algebraically equivalent
/// computations interchangeable.
///
/// # Examples
///
/// ```
/// use lineal::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v * 2.0, Vector::from_array([6.0, 8.0]));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Vector<T: Scalar, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Vector;
    ///
    /// let v = Vector::<f64, 3>::zeros();
    /// assert_eq!(v.sum(), 0.0);
    /// ```
    #[must_use]
    pub fn zeros() -> Self {
        Self::full(T::zero())
    }

    /// Creates a vector with every element set to one.
    #[must_use]
    pub fn ones() -> Self {
        Self::full(T::one())
    }

    /// Creates a vector by broadcasting `value` into every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Vector;
    ///
    /// let v = Vector::<f32, 4>::full(2.5);
    /// assert!(v.iter().all(|&x| x == 2.5));
    /// ```
    #[must_use]
    pub fn full(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Creates a vector from an explicit element array.
    #[must_use]
    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Creates a vector by evaluating `f` at every index in `0..N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Vector;
    ///
    /// let v = Vector::<f64, 4>::from_fn(|i| i as f64);
    /// assert_eq!(v, Vector::from_array([0.0, 1.0, 2.0, 3.0]));
    /// ```
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: array::from_fn(f),
        }
    }

    /// Creates a vector from a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::LengthMismatch`] if `slice.len() != N`.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        let data: [T; N] = slice
            .try_into()
            .map_err(|_| LinealError::length_mismatch(N, slice.len()))?;
        Ok(Self { data })
    }

    /// Returns the number of elements, `N`.
    ///
    /// The length is a property of the type, not of the contents.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`, verifying the bound.
    ///
    /// The indexing operator (`v[i]`) performs the same bound check but
    /// panics instead of returning an error.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfBounds`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Vector;
    ///
    /// let v = Vector::from_array([1.0_f32, 2.0]);
    /// assert_eq!(v.at(1), Ok(&2.0));
    /// assert!(v.at(2).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(LinealError::IndexOutOfBounds { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, verifying the
    /// bound.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfBounds`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(LinealError::IndexOutOfBounds { index, len: N })
    }

    /// Returns a reference to the element at `index` without any bound
    /// check.
    ///
    /// # Safety
    ///
    /// Calling this method with `index >= N` is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < N.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any
    /// bound check.
    ///
    /// # Safety
    ///
    /// Calling this method with `index >= N` is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < N.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// Every call starts a fresh traversal over the same storage.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator yielding mutable references in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the elements as a plain array.
    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Dot product, accumulated in ascending index order so that equal
    /// inputs always produce bit-identical results.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Vector;
    ///
    /// let a = Vector::from_array([1.0_f64, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0_f64, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Sum of all elements, accumulated in ascending index order.
    #[must_use]
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Euclidean norm, `sqrt(self · self)`.
    #[must_use]
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    /// The zero vector.
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

/// Approximate equality: element pairs must be bit-identical or within
/// [`Scalar::TOLERANCE`] of each other. `NaN` elements never compare equal.
impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(&self.data, &other.data)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.data[i] + rhs.data[i])
    }
}

impl<T: Scalar, const N: usize> Add for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn add(self, rhs: Self) -> Vector<T, N> {
        Vector::from_fn(|i| self.data[i] + rhs.data[i])
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.data[i] - rhs.data[i])
    }
}

impl<T: Scalar, const N: usize> Sub for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Vector<T, N> {
        Vector::from_fn(|i| self.data[i] - rhs.data[i])
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_fn(|i| -self.data[i])
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|i| self.data[i] * rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: T) -> Vector<T, N> {
        Vector::from_fn(|i| self.data[i] * rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.data.iter_mut() {
            *a = *a * rhs;
        }
    }
}

// Coherence forbids `impl Mul<Vector<T, N>> for T` with a generic scalar on
// the left, so each supported float type gets the commuted form spelled out.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }

        impl<const N: usize> Mul<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64);

/// Renders as `[v0,v1,...,vN-1]` followed by a line break.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{x}")?;
        }
        writeln!(f, "]")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
