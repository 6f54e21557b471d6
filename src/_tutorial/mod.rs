//! Walkthroughs of the design decisions behind this crate.
//!
//! Nothing in here is meant to be used directly, these modules exist only for
//! their documentation.

pub mod copy_semantics;
