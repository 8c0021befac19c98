//! Elliptic-curve group constants
//!
//! Only the constants needed to bound random scalars live here. No curve
//! arithmetic is performed by this crate.

pub mod secp256k1;

pub use secp256k1::ORDER as SECP256K1_ORDER;
