//! Matrix types and operations.

pub mod matrix;
pub mod ops;

pub use matrix::{Columns, IntMatrix, Matrix, MatrixError, RealMatrix};

#[allow(unused_imports)]
pub use ops::*;
