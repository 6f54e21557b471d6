//! Vector operations.

use crate::{errors::DimensionMismatch, scalar::Scalar, vector::Vector};
use std::ops::{Add, Div, Mul, Sub};

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Result<Vector<T>, DimensionMismatch>;

    fn add(self, other: &Vector<T>) -> Self::Output {
        (&self).add(other)
    }
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Result<Vector<T>, DimensionMismatch>;

    /// Elementwise sum of two equal length vectors.
    fn add(self, other: &Vector<T>) -> Self::Output {
        check_same_length(self, other)?;
        let elements = self.iter().zip(other.iter()).map(|(left, right)| *left + *right).collect();
        Ok(Vector::new(elements))
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Result<Vector<T>, DimensionMismatch>;

    fn sub(self, other: &Vector<T>) -> Self::Output {
        (&self).sub(other)
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Result<Vector<T>, DimensionMismatch>;

    /// Elementwise difference of two equal length vectors.
    fn sub(self, other: &Vector<T>) -> Self::Output {
        check_same_length(self, other)?;
        let elements = self.iter().zip(other.iter()).map(|(left, right)| *left - *right).collect();
        Ok(Vector::new(elements))
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Vector<T> {
    type Output = Result<T, DimensionMismatch>;

    fn mul(self, other: &Vector<T>) -> Self::Output {
        (&self).mul(other)
    }
}

impl<T: Scalar> Mul for &Vector<T> {
    type Output = Result<T, DimensionMismatch>;

    /// Dot product, see [`Vector::dot`].
    fn mul(self, other: &Vector<T>) -> Self::Output {
        self.dot(other)
    }
}

impl<T: Scalar> Add<T> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, scalar: T) -> Self::Output {
        (&self).add(scalar)
    }
}

impl<T: Scalar> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Adds the scalar to every element.
    fn add(self, scalar: T) -> Self::Output {
        self.map(|element| element + scalar)
    }
}

impl<T: Scalar> Sub<T> for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, scalar: T) -> Self::Output {
        (&self).sub(scalar)
    }
}

impl<T: Scalar> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Subtracts the scalar from every element.
    fn sub(self, scalar: T) -> Self::Output {
        self.map(|element| element - scalar)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Self::Output {
        (&self).mul(scalar)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Multiplies every element by the scalar.
    fn mul(self, scalar: T) -> Self::Output {
        self.map(|element| element * scalar)
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, scalar: T) -> Self::Output {
        (&self).div(scalar)
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    /// Divides every element by the scalar, with the element type's own
    /// division semantics.
    fn div(self, scalar: T) -> Self::Output {
        self.map(|element| element / scalar)
    }
}

fn check_same_length<T: Scalar>(
    left: &Vector<T>,
    right: &Vector<T>,
) -> Result<(), DimensionMismatch> {
    if left.len() != right.len() {
        return Err(DimensionMismatch { expected: left.len(), found: right.len() });
    }
    Ok(())
}

// Coherence: a generic `impl Add<&Vector<T>> for T` would collide with the
// standard library's scalar impls, so each element kind gets its own set.
macro_rules! impl_scalar_lhs_vector_ops {
    ($scalar:ty) => {
        impl Add<&Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn add(self, vector: &Vector<$scalar>) -> Self::Output {
                vector.map(|element| self + element)
            }
        }

        impl Add<Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn add(self, vector: Vector<$scalar>) -> Self::Output {
                self.add(&vector)
            }
        }

        impl Sub<&Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn sub(self, vector: &Vector<$scalar>) -> Self::Output {
                vector.map(|element| self - element)
            }
        }

        impl Sub<Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn sub(self, vector: Vector<$scalar>) -> Self::Output {
                self.sub(&vector)
            }
        }

        impl Mul<&Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn mul(self, vector: &Vector<$scalar>) -> Self::Output {
                vector.map(|element| self * element)
            }
        }

        impl Mul<Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn mul(self, vector: Vector<$scalar>) -> Self::Output {
                self.mul(&vector)
            }
        }
    };
}

impl_scalar_lhs_vector_ops!(i64);
impl_scalar_lhs_vector_ops!(f64);
