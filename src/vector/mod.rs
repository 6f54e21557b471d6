//! Vector types and operations.

pub mod ops;
pub mod vector;

pub use vector::{IntVector, RealVector, Vector};

#[allow(unused_imports)]
pub use ops::*;
