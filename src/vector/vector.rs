//! Fixed-length numeric vectors.

use crate::{
    errors::{DimensionMismatch, IndexOutOfRange},
    scalar::Scalar,
};
use std::fmt::{self, Display, Formatter};

/// A fixed-length numeric vector.
///
/// The length is set when the vector is built and never changes afterwards.
/// Every positional access is bounds checked and reports [`IndexOutOfRange`]
/// instead of panicking.
///
/// # Examples
///
/// ```
/// use linalg_lib::vector::Vector;
///
/// let vector = Vector::new(vec![1.0, 2.0, 3.0]);
/// let scaled = &vector * 2.0;
/// assert_eq!(scaled, Vector::new(vec![2.0, 4.0, 6.0]));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T: Scalar> {
    /// The elements in positional order.
    elements: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Creates a vector that owns the given elements.
    pub fn new(elements: Vec<T>) -> Vector<T> {
        Vector { elements }
    }

    /// Creates a vector of the given length filled with zeros.
    pub fn zero(len: usize) -> Vector<T> {
        Vector { elements: vec![T::zero(); len] }
    }

    /// Creates a unit vector: one at `index`, zero everywhere else.
    pub fn one(len: usize, index: usize) -> Result<Vector<T>, IndexOutOfRange> {
        let mut vector = Vector::zero(len);
        *vector.get_mut(index)? = T::one();
        Ok(vector)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.elements.get(index).ok_or(IndexOutOfRange { index, bound: self.elements.len() })
    }

    /// Get the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let bound = self.elements.len();
        self.elements.get_mut(index).ok_or(IndexOutOfRange { index, bound })
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterates over the elements in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements as a slice.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// The elements as a `Vec`, consuming the vector.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Applies `f` to every element, producing a new vector.
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Vector<U> {
        Vector { elements: self.elements.iter().map(|element| f(*element)).collect() }
    }

    /// Dot product of two equal length vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_lib::vector::Vector;
    ///
    /// # fn test() -> anyhow::Result<()> {
    /// let left = Vector::new(vec![1.0, 2.0, 3.0]);
    /// let right = Vector::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(left.dot(&right)?, 32.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn dot(&self, other: &Vector<T>) -> Result<T, DimensionMismatch> {
        if self.len() != other.len() {
            return Err(DimensionMismatch { expected: self.len(), found: other.len() });
        }
        let products = self.iter().zip(other.iter()).map(|(left, right)| *left * *right);
        Ok(products.fold(T::zero(), |acc, product| acc + product))
    }
}

/// A vector of 64 bit signed integers.
pub type IntVector = Vector<i64>;

/// A vector of 64 bit floats.
pub type RealVector = Vector<f64>;

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Vector { elements }
    }
}

impl<T: Scalar> From<&[T]> for Vector<T> {
    fn from(elements: &[T]) -> Self {
        Vector { elements: elements.to_vec() }
    }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector { elements: iter.into_iter().collect() }
    }
}

impl<T: Scalar> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Scalar> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
