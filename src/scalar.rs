//! Definitions for scalar element types.

use num_traits::{One, Zero};
use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Sub},
};

/// An element type that vectors and matrices can be built over.
///
/// The trait bundles the arithmetic the containers rely on: closed addition,
/// subtraction, multiplication and division, plus the additive and
/// multiplicative identities from [`Zero`] and [`One`]. Elements are plain
/// copyable values.
///
/// Division keeps the element type's native semantics: `f64` produces
/// infinities or NaN for a zero divisor while `i64` panics, and no extra
/// checks are layered on top.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl Scalar for i64 {}

impl Scalar for f64 {}
