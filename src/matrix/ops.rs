//! Matrix operations.

use crate::{
    errors::DimensionMismatch,
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
    vector::Vector,
};
use std::ops::{Add, Div, Mul, Sub};

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        (&self).add(other)
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Elementwise sum of two equal shape matrices.
    fn add(self, other: &Matrix<T>) -> Self::Output {
        check_same_shape(self, other)?;
        let data =
            self.data.iter().zip(other.data.iter()).map(|(left, right)| *left + *right).collect();
        Ok(Matrix { data, nrows: self.nrows, ncols: self.ncols })
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, other: &Matrix<T>) -> Self::Output {
        (&self).sub(other)
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Elementwise difference of two equal shape matrices.
    fn sub(self, other: &Matrix<T>) -> Self::Output {
        check_same_shape(self, other)?;
        let data =
            self.data.iter().zip(other.data.iter()).map(|(left, right)| *left - *right).collect();
        Ok(Matrix { data, nrows: self.nrows, ncols: self.ncols })
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        (&self).mul(other)
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Naive row-by-column product, `A: NxM * B: MxP -> C: NxP`, `O(NMP)`.
    fn mul(self, other: &Matrix<T>) -> Self::Output {
        if self.ncols != other.nrows {
            return Err(DimensionMismatch { expected: self.ncols, found: other.nrows }.into());
        }
        let mut data = Vec::with_capacity(self.nrows.saturating_mul(other.ncols));
        for row in 0..self.nrows {
            let left = self.row(row)?;
            for col in 0..other.ncols {
                data.push(left.dot(&other.col(col)?)?);
            }
        }
        Ok(Matrix { data, nrows: self.nrows, ncols: other.ncols })
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Result<Vector<T>, MatrixError>;

    fn mul(self, vector: &Vector<T>) -> Self::Output {
        (&self).mul(vector)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Result<Vector<T>, MatrixError>;

    /// Matrix-vector product, entry `i` is the dot product of row `i` with
    /// the vector.
    fn mul(self, vector: &Vector<T>) -> Self::Output {
        if self.ncols != vector.len() {
            return Err(DimensionMismatch { expected: self.ncols, found: vector.len() }.into());
        }
        let mut elements = Vec::with_capacity(self.nrows);
        for row in 0..self.nrows {
            elements.push(self.row(row)?.dot(vector)?);
        }
        Ok(Vector::new(elements))
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Vector<T> {
    type Output = Result<Vector<T>, MatrixError>;

    fn mul(self, matrix: &Matrix<T>) -> Self::Output {
        (&self).mul(matrix)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Vector<T> {
    type Output = Result<Vector<T>, MatrixError>;

    /// Vector-matrix product, entry `j` is the dot product of the vector with
    /// column `j`.
    fn mul(self, matrix: &Matrix<T>) -> Self::Output {
        if matrix.nrows != self.len() {
            return Err(DimensionMismatch { expected: matrix.nrows, found: self.len() }.into());
        }
        let mut elements = Vec::with_capacity(matrix.ncols);
        for col in 0..matrix.ncols {
            elements.push(self.dot(&matrix.col(col)?)?);
        }
        Ok(Vector::new(elements))
    }
}

impl<T: Scalar> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, scalar: T) -> Self::Output {
        (&self).add(scalar)
    }
}

impl<T: Scalar> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Adds the scalar to every entry.
    fn add(self, scalar: T) -> Self::Output {
        map_entries(self, |entry| entry + scalar)
    }
}

impl<T: Scalar> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, scalar: T) -> Self::Output {
        (&self).sub(scalar)
    }
}

impl<T: Scalar> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Subtracts the scalar from every entry.
    fn sub(self, scalar: T) -> Self::Output {
        map_entries(self, |entry| entry - scalar)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Self::Output {
        (&self).mul(scalar)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Multiplies every entry by the scalar.
    fn mul(self, scalar: T) -> Self::Output {
        map_entries(self, |entry| entry * scalar)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, scalar: T) -> Self::Output {
        (&self).div(scalar)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Divides every entry by the scalar, with the entry type's own division
    /// semantics.
    fn div(self, scalar: T) -> Self::Output {
        map_entries(self, |entry| entry / scalar)
    }
}

fn map_entries<T: Scalar>(matrix: &Matrix<T>, f: impl Fn(T) -> T) -> Matrix<T> {
    let data = matrix.data.iter().map(|entry| f(*entry)).collect();
    Matrix { data, nrows: matrix.nrows, ncols: matrix.ncols }
}

fn check_same_shape<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
) -> Result<(), DimensionMismatch> {
    if left.nrows != right.nrows {
        return Err(DimensionMismatch { expected: left.nrows, found: right.nrows });
    }
    if left.ncols != right.ncols {
        return Err(DimensionMismatch { expected: left.ncols, found: right.ncols });
    }
    Ok(())
}

// Coherence: a generic `impl Add<&Matrix<T>> for T` would collide with the
// standard library's scalar impls, so each element kind gets its own set.
macro_rules! impl_scalar_lhs_matrix_ops {
    ($scalar:ty) => {
        impl Add<&Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn add(self, matrix: &Matrix<$scalar>) -> Self::Output {
                map_entries(matrix, |entry| self + entry)
            }
        }

        impl Add<Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn add(self, matrix: Matrix<$scalar>) -> Self::Output {
                self.add(&matrix)
            }
        }

        impl Sub<&Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn sub(self, matrix: &Matrix<$scalar>) -> Self::Output {
                map_entries(matrix, |entry| self - entry)
            }
        }

        impl Sub<Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn sub(self, matrix: Matrix<$scalar>) -> Self::Output {
                self.sub(&matrix)
            }
        }

        impl Mul<&Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn mul(self, matrix: &Matrix<$scalar>) -> Self::Output {
                map_entries(matrix, |entry| self * entry)
            }
        }

        impl Mul<Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            fn mul(self, matrix: Matrix<$scalar>) -> Self::Output {
                self.mul(&matrix)
            }
        }
    };
}

impl_scalar_lhs_matrix_ops!(i64);
impl_scalar_lhs_matrix_ops!(f64);
