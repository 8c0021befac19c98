//! Integer conversion utilities
//!
//! Explicit conversions between `U256` and native representations, split
//! by width:
//! - explicit big-endian semantics
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information

mod u64;
mod u8;
