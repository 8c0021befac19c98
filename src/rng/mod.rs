//! Random number generation module
//!
//! Two families of randomness live here:
//!
//! - [`Pcg32`]: a fast, reproducible PCG generator seeded from the OS,
//!   with an unbiased bounded sampler and a rejection-sampled 256-bit
//!   integer sampler for curve scalars.
//! - [`crypto_random_scalar`] and the other `entropy` functions: direct OS
//!   entropy with the same output ranges, for callers that need
//!   cryptographic strength.
//!
//! Design goals:
//! - Exact, bit-for-bit reproducible PCG output for a given state
//! - No modulo bias in any bounded sampler
//! - Explicit ownership of generator state
pub mod entropy;

mod bounded;
mod pcg32;
mod scalar;
mod shared;

pub use entropy::{
    crypto_random_below, crypto_random_scalar, fill_random_bytes, generate_random_bytes,
};
pub use pcg32::{INCREMENT, MULTIPLIER, Pcg32};
pub use shared::SharedPcg32;
