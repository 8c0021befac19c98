//! Primitive types
//!
//! Fixed-size, dependency-free building blocks with well-defined
//! semantics. They do not attempt to replicate a full-featured big-integer
//! library.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer, the output type of the
//!   big-integer samplers in [`crate::rng`]

mod u256;

pub use u256::U256;
