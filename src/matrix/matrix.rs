//! Fixed-shape numeric matrices.

use crate::{
    accessor::{IndexedAccessor, NoAccess},
    errors::{DimensionMismatch, IndexOutOfRange},
    scalar::Scalar,
    vector::Vector,
};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A fixed-shape numeric matrix, stored in row-major order.
///
/// The shape is set when the matrix is built and never changes afterwards.
/// Every entry, row, and column access is bounds checked and reports
/// [`IndexOutOfRange`] instead of panicking.
///
/// Rows and columns are read out as detached [`Vector`] copies: mutating a
/// copy never touches the matrix it came from, writes go through
/// [`Matrix::set_row`] and [`Matrix::set_col`] instead.
///
/// # Examples
///
/// ```
/// use linalg_lib::matrix::Matrix;
///
/// # fn test() -> anyhow::Result<()> {
/// let matrix = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
/// let product = (&matrix * &Matrix::one(2))?;
/// assert_eq!(product, matrix);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix<T>"))]
pub struct Matrix<T: Scalar> {
    /// Entries in row-major order.
    pub(crate) data: Vec<T>,

    /// Number of rows.
    pub(crate) nrows: usize,

    /// Number of columns.
    pub(crate) ncols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from entries laid out in row-major order.
    pub fn new(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Matrix<T>, DimensionMismatch> {
        let expected = nrows.saturating_mul(ncols);
        if data.len() != expected {
            return Err(DimensionMismatch { expected, found: data.len() });
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Creates a matrix from rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Matrix<T>, DimensionMismatch> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or_default();
        for row in &rows {
            if row.len() != ncols {
                return Err(DimensionMismatch { expected: ncols, found: row.len() });
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix { data, nrows, ncols })
    }

    /// Creates a matrix from columns, which must all have the same length.
    pub fn from_cols<I: IntoIterator<Item = Vector<T>>>(
        cols: I,
    ) -> Result<Matrix<T>, DimensionMismatch> {
        let cols: Vec<Vector<T>> = cols.into_iter().collect();
        let nrows = match cols.first() {
            Some(first) => first.len(),
            None => return Err(DimensionMismatch { expected: 1, found: 0 }),
        };
        for col in &cols {
            if col.len() != nrows {
                return Err(DimensionMismatch { expected: nrows, found: col.len() });
            }
        }
        let ncols = cols.len();
        let mut data = Vec::with_capacity(nrows.saturating_mul(ncols));
        for row in 0..nrows {
            for col in &cols {
                data.extend(col.get(row).ok().copied());
            }
        }
        Matrix::new(data, nrows, ncols)
    }

    /// Creates a matrix of the given shape filled with zeros.
    pub fn zero(nrows: usize, ncols: usize) -> Matrix<T> {
        let data = vec![vec![T::zero(); ncols]; nrows].into_iter().flatten().collect();
        Matrix { data, nrows, ncols }
    }

    /// Creates the identity matrix of the given size.
    pub fn one(size: usize) -> Matrix<T> {
        let data = (0..size)
            .flat_map(|row| (0..size).map(move |col| if row == col { T::one() } else { T::zero() }))
            .collect();
        Matrix { data, nrows: size, ncols: size }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The entries as a slice, in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get the entry at `M[row, col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T, IndexOutOfRange> {
        self.check_row(row)?;
        self.check_col(col)?;
        let index = row * self.ncols + col;
        self.data.get(index).ok_or(IndexOutOfRange { index, bound: self.data.len() })
    }

    /// Get the entry at `M[row, col]` mutably.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_row(row)?;
        self.check_col(col)?;
        let index = row * self.ncols + col;
        let bound = self.data.len();
        self.data.get_mut(index).ok_or(IndexOutOfRange { index, bound })
    }

    /// The row at `row`, as a detached copy.
    pub fn row(&self, row: usize) -> Result<Vector<T>, IndexOutOfRange> {
        self.check_row(row)?;
        let start = row * self.ncols;
        let end = start + self.ncols;
        let elements =
            self.data.get(start..end).ok_or(IndexOutOfRange { index: row, bound: self.nrows })?;
        Ok(Vector::new(elements.to_vec()))
    }

    /// The column at `col`, as a detached copy.
    ///
    /// Columns are the canonical single-index view of a matrix: iterating a
    /// matrix yields its columns in index order.
    pub fn col(&self, col: usize) -> Result<Vector<T>, IndexOutOfRange> {
        self.check_col(col)?;
        // col < ncols here, so the step is never zero.
        let elements = self.data.iter().skip(col).step_by(self.ncols).copied().collect();
        Ok(Vector::new(elements))
    }

    /// Overwrites the row at `row` with the given values.
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> Result<(), MatrixError> {
        self.check_row(row)?;
        if values.len() != self.ncols {
            return Err(DimensionMismatch { expected: self.ncols, found: values.len() }.into());
        }
        let start = row * self.ncols;
        let end = start + self.ncols;
        let target = self
            .data
            .get_mut(start..end)
            .ok_or(IndexOutOfRange { index: row, bound: self.nrows })?;
        for (entry, value) in target.iter_mut().zip(values.iter()) {
            *entry = *value;
        }
        Ok(())
    }

    /// Overwrites the column at `col` with the given values.
    pub fn set_col(&mut self, col: usize, values: &Vector<T>) -> Result<(), MatrixError> {
        self.check_col(col)?;
        if values.len() != self.nrows {
            return Err(DimensionMismatch { expected: self.nrows, found: values.len() }.into());
        }
        let step = self.ncols;
        // col < ncols here, so the step is never zero.
        for (entry, value) in self.data.iter_mut().skip(col).step_by(step).zip(values.iter()) {
            *entry = *value;
        }
        Ok(())
    }

    /// A read access point over the rows of the matrix.
    pub fn rows(&self) -> IndexedAccessor<impl Fn(usize) -> Result<Vector<T>, IndexOutOfRange> + '_> {
        IndexedAccessor::read_only(move |row| self.row(row))
    }

    /// A read access point over the columns of the matrix.
    pub fn cols(&self) -> IndexedAccessor<impl Fn(usize) -> Result<Vector<T>, IndexOutOfRange> + '_> {
        IndexedAccessor::read_only(move |col| self.col(col))
    }

    /// A write access point over the rows of the matrix.
    pub fn rows_mut(
        &mut self,
    ) -> IndexedAccessor<NoAccess, impl FnMut(usize, &Vector<T>) -> Result<(), MatrixError> + '_> {
        IndexedAccessor::write_only(move |row, values: &Vector<T>| self.set_row(row, values))
    }

    /// A write access point over the columns of the matrix.
    pub fn cols_mut(
        &mut self,
    ) -> IndexedAccessor<NoAccess, impl FnMut(usize, &Vector<T>) -> Result<(), MatrixError> + '_> {
        IndexedAccessor::write_only(move |col, values: &Vector<T>| self.set_col(col, values))
    }

    /// Iterates over the columns of the matrix, in index order.
    pub fn iter(&self) -> Columns<'_, T> {
        Columns { matrix: self, index: 0 }
    }

    fn check_row(&self, row: usize) -> Result<(), IndexOutOfRange> {
        if row >= self.nrows {
            return Err(IndexOutOfRange { index: row, bound: self.nrows });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), IndexOutOfRange> {
        if col >= self.ncols {
            return Err(IndexOutOfRange { index: col, bound: self.ncols });
        }
        Ok(())
    }
}

/// A matrix of 64 bit signed integers.
pub type IntMatrix = Matrix<i64>;

/// A matrix of 64 bit floats.
pub type RealMatrix = Matrix<f64>;

/// Iterator over the columns of a [`Matrix`], in index order.
pub struct Columns<'a, T: Scalar> {
    matrix: &'a Matrix<T>,
    index: usize,
}

impl<T: Scalar> Iterator for Columns<'_, T> {
    type Item = Vector<T>;

    fn next(&mut self) -> Option<Vector<T>> {
        let column = self.matrix.col(self.index).ok()?;
        self.index += 1;
        Some(column)
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = Vector<T>;
    type IntoIter = Columns<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for index in 0..self.nrows {
            if index > 0 {
                write!(f, ", ")?;
            }
            let row = self.row(index).map_err(|_| fmt::Error)?;
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}

/// Errors for matrix operations that can fail in more than one way.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// A row or column index was out of range.
    #[error(transparent)]
    Index(#[from] IndexOutOfRange),

    /// An operand or input had an incompatible dimension.
    #[error(transparent)]
    Dimension(#[from] DimensionMismatch),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = DimensionMismatch;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        Matrix::new(raw.data, raw.nrows, raw.ncols)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rstest::rstest;

    fn make_matrix(nrows: usize, ncols: usize, values: &[i64]) -> IntMatrix {
        Matrix::new(values.to_vec(), nrows, ncols).unwrap()
    }

    #[test]
    fn build_validates_entry_count() {
        let result = IntMatrix::new(vec![1, 2, 3, 4, 5], 2, 3);
        assert_eq!(result, Err(DimensionMismatch { expected: 6, found: 5 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_conversion_validates_entry_count() {
        let consistent = RawMatrix { data: vec![1, 2, 3, 4], nrows: 2, ncols: 2 };
        assert_eq!(IntMatrix::try_from(consistent), Ok(make_matrix(2, 2, &[1, 2, 3, 4])));

        let inconsistent = RawMatrix { data: vec![1, 2, 3], nrows: 2, ncols: 2 };
        assert_eq!(IntMatrix::try_from(inconsistent), Err(DimensionMismatch { expected: 4, found: 3 }));
    }

    #[test]
    fn zero_matrix() {
        let matrix = RealMatrix::zero(2, 3);
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 3);
        assert!(matrix.data().iter().all(|entry| *entry == 0.0));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 5)]
    #[case(4, 1)]
    fn zero_has_requested_shape(#[case] nrows: usize, #[case] ncols: usize) {
        let matrix = IntMatrix::zero(nrows, ncols);
        assert_eq!(matrix.nrows(), nrows);
        assert_eq!(matrix.ncols(), ncols);
        assert_eq!(matrix.data().len(), nrows * ncols);
    }

    #[test]
    fn identity_is_one_on_the_diagonal() {
        let matrix = IntMatrix::one(3);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1 } else { 0 };
                assert_eq!(*matrix.entry(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn entry_access() {
        let matrix = make_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(*matrix.entry(0, 0).unwrap(), 1);
        assert_eq!(*matrix.entry(1, 2).unwrap(), 6);
        assert_eq!(matrix.entry(2, 0), Err(IndexOutOfRange { index: 2, bound: 2 }));
        assert_eq!(matrix.entry(0, 3), Err(IndexOutOfRange { index: 3, bound: 3 }));
    }

    #[test]
    fn entry_mut_writes() {
        let mut matrix = make_matrix(2, 2, &[1, 2, 3, 4]);
        *matrix.entry_mut(1, 0).unwrap() = 30;
        assert_eq!(matrix.data(), &[1, 2, 30, 4]);
    }

    #[test]
    fn row_copies_are_detached() {
        let matrix = make_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        let mut row = matrix.row(0).unwrap();
        assert_eq!(row, Vector::new(vec![1, 2, 3]));
        row.set(0, 100).unwrap();
        assert_eq!(*matrix.entry(0, 0).unwrap(), 1);
    }

    #[test]
    fn col_reads_down_the_rows() {
        let matrix = make_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(matrix.col(0).unwrap(), Vector::new(vec![1, 4]));
        assert_eq!(matrix.col(2).unwrap(), Vector::new(vec![3, 6]));
        assert_eq!(matrix.col(3), Err(IndexOutOfRange { index: 3, bound: 3 }));
    }

    #[test]
    fn row_length_matches_ncols() {
        let matrix = IntMatrix::zero(4, 7);
        assert_eq!(matrix.row(3).unwrap().len(), 7);
        assert_eq!(matrix.col(6).unwrap().len(), 4);
    }

    #[test]
    fn set_row_round_trip() {
        let mut matrix = IntMatrix::zero(2, 3);
        let values = Vector::new(vec![7, 8, 9]);
        matrix.set_row(1, &values).unwrap();
        assert_eq!(matrix.row(1).unwrap(), values);
        assert_eq!(matrix.row(0).unwrap(), Vector::zero(3));
    }

    #[test]
    fn set_col_round_trip() {
        let mut matrix = IntMatrix::zero(3, 2);
        let values = Vector::new(vec![7, 8, 9]);
        matrix.set_col(0, &values).unwrap();
        assert_eq!(matrix.col(0).unwrap(), values);
        assert_eq!(matrix.col(1).unwrap(), Vector::zero(3));
    }

    #[test]
    fn set_row_rejects_bad_index() {
        let mut matrix = IntMatrix::zero(2, 2);
        let result = matrix.set_row(5, &Vector::zero(2));
        assert_eq!(result, Err(MatrixError::Index(IndexOutOfRange { index: 5, bound: 2 })));
    }

    #[test]
    fn set_row_rejects_bad_length() {
        let mut matrix = IntMatrix::zero(2, 2);
        let result = matrix.set_row(0, &Vector::zero(3));
        assert_eq!(result, Err(MatrixError::Dimension(DimensionMismatch { expected: 2, found: 3 })));
    }

    #[test]
    fn from_rows_lays_out_row_major() {
        let matrix = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = IntMatrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(result, Err(DimensionMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn from_cols_places_columns() {
        let cols = vec![
            Vector::new(vec![1, 2]),
            Vector::new(vec![3, 4]),
            Vector::new(vec![5, 6]),
        ];
        let matrix = IntMatrix::from_cols(cols).unwrap();
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix.data(), &[1, 3, 5, 2, 4, 6]);
        assert_eq!(matrix.col(1).unwrap(), Vector::new(vec![3, 4]));
    }

    #[test]
    fn from_cols_rejects_empty_input() {
        let result = IntMatrix::from_cols(Vec::new());
        assert_eq!(result, Err(DimensionMismatch { expected: 1, found: 0 }));
    }

    #[test]
    fn from_cols_rejects_ragged_input() {
        let cols = vec![Vector::new(vec![1, 2]), Vector::new(vec![3])];
        let result = IntMatrix::from_cols(cols);
        assert_eq!(result, Err(DimensionMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn iteration_yields_columns_in_order() {
        let matrix = make_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        let columns: Vec<_> = matrix.iter().collect();
        let expected =
            vec![Vector::new(vec![1, 4]), Vector::new(vec![2, 5]), Vector::new(vec![3, 6])];
        assert_eq!(columns, expected);
    }

    #[test]
    fn iteration_rereads_current_state() {
        let mut matrix = make_matrix(2, 2, &[1, 2, 3, 4]);
        let before: Vec<_> = matrix.iter().collect();
        matrix.set_col(0, &Vector::new(vec![10, 30])).unwrap();
        let after: Vec<_> = matrix.iter().collect();
        assert_eq!(before, vec![Vector::new(vec![1, 3]), Vector::new(vec![2, 4])]);
        assert_eq!(after, vec![Vector::new(vec![10, 30]), Vector::new(vec![2, 4])]);
    }

    #[test]
    fn row_accessor_reads() {
        let matrix = make_matrix(2, 2, &[1, 2, 3, 4]);
        let rows = matrix.rows();
        assert_eq!(rows.get(1), Ok(Vector::new(vec![3, 4])));
        assert_eq!(rows.get(2), Err(IndexOutOfRange { index: 2, bound: 2 }));
        let cols = matrix.cols();
        assert_eq!(cols.get(0), Ok(Vector::new(vec![1, 3])));
    }

    #[test]
    fn row_accessor_writes() {
        let mut matrix = IntMatrix::zero(2, 2);
        let mut rows = matrix.rows_mut();
        rows.set(0, &Vector::new(vec![1, 2])).unwrap();
        rows.set(1, &Vector::new(vec![3, 4])).unwrap();
        drop(rows);
        assert_eq!(matrix.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn col_accessor_writes() {
        let mut matrix = IntMatrix::zero(2, 2);
        let mut cols = matrix.cols_mut();
        cols.set(1, &Vector::new(vec![2, 4])).unwrap();
        drop(cols);
        assert_eq!(matrix.data(), &[0, 2, 0, 4]);
    }

    #[test]
    fn display_renders_rows() {
        let matrix = make_matrix(2, 2, &[1, 2, 3, 4]);
        assert_eq!(matrix.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn default_is_empty() {
        let matrix = IntMatrix::default();
        assert_eq!(matrix.nrows(), 0);
        assert_eq!(matrix.ncols(), 0);
        assert!(matrix.data().is_empty());
    }
}
