//! Linear algebra library for fixed-size numeric vectors and matrices
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod _tutorial;
pub mod accessor;
pub mod errors;
pub mod matrix;
pub mod scalar;
pub mod vector;
