//! # Rows, columns, and copy semantics
//!
//! A [Matrix][crate::matrix::Matrix] stores its entries in a single flat
//! `Vec`, laid out row by row. Rows and columns are the things you constantly
//! want to pull out of it, so the shape of that access API matters more than
//! anything else in the crate. One could define a row as a live view that
//! borrows the matrix:
//!
//! ```rust
//! // Assume a matrix of floats stored in row-major order...
//! struct Matrix {
//!     data: Vec<f64>,
//!     nrows: usize,
//!     ncols: usize,
//! }
//!
//! struct RowView<'a> {
//!     matrix: &'a mut Matrix,
//!     row: usize,
//! }
//! ```
//!
//! The definition above has a few issues:
//! 1. The view borrows the matrix for as long as it lives. Holding a row
//!    while touching any other part of the matrix is rejected by the borrow
//!    checker, even when the two accesses could never alias:
//!
//!    ```rust,ignore
//!    let row = matrix.row_view(0);
//!    matrix.set_entry(1, 0, 42.0); // error: `matrix` is already borrowed
//!    println!("{row:?}");
//!    ```
//! 2. Two mutable views can never coexist, so something as simple as swapping
//!    two rows can't be written in terms of views at all.
//! 3. Rows are contiguous in row-major storage but columns are not, so a
//!    column view can't hand out a slice. You'd end up with two differently
//!    shaped view types for what should be symmetric operations.
//!
//! Because of the problems listed above, this crate goes in a different
//! direction: reading a row or a column hands back a detached
//! [Vector][crate::vector::Vector] copy. The copy owns its elements and
//! borrows nothing, so it outlives any later change to the matrix, and
//! mutating it never touches the matrix it came from. Writing back is a
//! separate, explicit step through [set_row][crate::matrix::Matrix::set_row]
//! and [set_col][crate::matrix::Matrix::set_col]:
//!
//! ```rust
//! # use linalg_lib::matrix::Matrix;
//! # fn test() -> anyhow::Result<()> {
//! let mut matrix = Matrix::new(vec![1, 2, 3, 4], 2, 2)?;
//!
//! let mut row = matrix.row(0)?;
//! row.set(0, 10)?;
//! // The matrix still holds the original entry.
//! assert_eq!(*matrix.entry(0, 0)?, 1);
//!
//! // Writing back is explicit.
//! matrix.set_row(0, &row)?;
//! assert_eq!(*matrix.entry(0, 0)?, 10);
//! # Ok(())
//! # }
//! ```
//!
//! Copies cost an allocation per access. For the matrix sizes this crate is
//! aimed at that is a fine trade for an access API that composes with
//! everything else, including iterating the columns of a matrix you are
//! mutating as you go.
//!
//! # Access points
//!
//! Row and column access also comes packaged as
//! [IndexedAccessor][crate::accessor::IndexedAccessor] values, built by
//! [rows][crate::matrix::Matrix::rows], [cols][crate::matrix::Matrix::cols]
//! and their `_mut` counterparts. An accessor bundles lookups keyed by an
//! index, and what you can do with it is spelled out in its type: each
//! capability slot either holds a closure or the zero sized
//! [NoAccess][crate::accessor::NoAccess] placeholder.
//!
//! ```rust
//! # use linalg_lib::matrix::Matrix;
//! # fn test() -> anyhow::Result<()> {
//! let matrix = Matrix::new(vec![1, 2, 3, 4], 2, 2)?;
//!
//! let rows = matrix.rows();
//! assert_eq!(rows.get(1)?, matrix.row(1)?);
//! # Ok(())
//! # }
//! ```
//!
//! [get][crate::accessor::IndexedAccessor::get] is only callable when the
//! getter slot holds a closure, and the same goes for
//! [set][crate::accessor::IndexedAccessor::set]. Calling `set` on the
//! accessor above is a compile error, not a runtime one:
//!
//! ```rust,ignore
//! let rows = matrix.rows();
//! rows.set(0, &values); // error: `NoAccess` is not a closure
//! ```
//!
//! A write access point works the same way around:
//!
//! ```rust
//! # use linalg_lib::{matrix::Matrix, vector::Vector};
//! # fn test() -> anyhow::Result<()> {
//! let mut matrix = Matrix::zero(2, 2);
//!
//! let mut rows = matrix.rows_mut();
//! rows.set(0, &Vector::new(vec![1, 2]))?;
//! rows.set(1, &Vector::new(vec![3, 4]))?;
//! drop(rows);
//!
//! assert_eq!(*matrix.entry(1, 0)?, 3);
//! # Ok(())
//! # }
//! ```
//!
//! Accessors are plain values over closures, nothing in them is specific to
//! matrices. [read_only][crate::accessor::IndexedAccessor::read_only],
//! [write_only][crate::accessor::IndexedAccessor::write_only] and
//! [read_write][crate::accessor::IndexedAccessor::read_write] accept any
//! closures, so the same shape works for any indexed collection you want to
//! hand out a capability scoped handle to.
//!
//! # Error kinds
//!
//! Fallible access reports one of two error kinds:
//!
//! * [IndexOutOfRange][crate::errors::IndexOutOfRange] when a position does
//!   not exist: an element index past the end of a vector, or a row or
//!   column index past the edge of a matrix.
//! * [DimensionMismatch][crate::errors::DimensionMismatch] when two shapes
//!   disagree: adding vectors of different lengths, multiplying matrices
//!   with incompatible inner dimensions, or building a matrix from the wrong
//!   number of entries.
//!
//! Operations that can fail in both ways, like
//! [set_row][crate::matrix::Matrix::set_row] or the matrix product, return
//! [MatrixError][crate::matrix::MatrixError], which wraps both kinds and
//! converts from either with `?`:
//!
//! ```rust
//! # use linalg_lib::{errors::DimensionMismatch, matrix::{Matrix, MatrixError}};
//! let left = Matrix::<f64>::zero(2, 3);
//! let right = Matrix::<f64>::zero(2, 2);
//!
//! let result = &left * &right;
//! assert_eq!(
//!     result,
//!     Err(MatrixError::Dimension(DimensionMismatch { expected: 3, found: 2 }))
//! );
//! ```
