//! Crate errors.

use thiserror::Error;

/// An index fell outside the valid range of the container it was applied to.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("index {index} out of range 0..{bound}")]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,

    /// The exclusive upper bound the index was checked against.
    pub bound: usize,
}

/// Two operands, or a constructor input, had incompatible dimensions.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("dimension mismatch: expected {expected}, found {found}")]
pub struct DimensionMismatch {
    /// The dimension the operation required.
    pub expected: usize,

    /// The dimension actually supplied.
    pub found: usize,
}
