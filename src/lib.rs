//! Fast and secure scalar randomness
//!
//! This crate supplies the randomness primitives used by threshold and
//! signing protocols that need random secp256k1 scalars: nonces, blinding
//! factors, polynomial coefficients.
//!
//! Two paths produce the same ranges with different guarantees:
//!
//! - **PCG32** ([`rng::Pcg32`]): a 64-bit-state permuted congruential
//!   generator seeded from the operating system. It is fast and exactly
//!   reproducible for a given state, which makes test runs repeatable, but
//!   it is not cryptographically secure.
//! - **OS entropy** ([`rng::crypto_random_scalar`]): every value is drawn
//!   directly from the kernel's secure random source.
//!
//! Every bounded sampler in the crate uses rejection sampling, never a
//! plain modulo, so results are exactly uniform.
//!
//! # Module overview
//!
//! - `os`
//!   Platform access to the operating system's secure random source.
//!
//! - `primitives`
//!   `U256`, the fixed-size 256-bit integer returned by the big-integer
//!   samplers.
//!
//! - `curves`
//!   Group order constants used as sampling bounds.
//!
//! - `rng`
//!   The PCG32 engine, its bounded and 256-bit samplers, a thread-safe
//!   handle, and the OS-entropy samplers.
//!
//! # Example
//!
//! ```
//! use pcg_scalar::curves::SECP256K1_ORDER;
//! use pcg_scalar::rng::Pcg32;
//!
//! let mut rng = Pcg32::from_state(0x853c_49e6_748f_ea9b);
//! let die = rng.bounded(6);
//! let scalar = rng.random_scalar();
//!
//! assert!(die < 6);
//! assert!(scalar < SECP256K1_ORDER);
//! ```
//!
//! # Features
//!
//! - `log`: emit diagnostics through the [`log`](https://docs.rs/log)
//!   facade (seeding, entropy failures, rejection retries).

#[macro_use]
mod log_macros;

mod error;
mod os;

pub mod curves;
pub mod primitives;
pub mod rng;

pub use error::RandomError;
