//! PCG32 engine
//!
//! A single-stream permuted congruential generator with 64-bit state and
//! 32-bit output (XSH-RR output permutation).
//!
//! The generator is fast and statistically strong, and it is seeded from
//! the operating system by default. It is **not** cryptographically secure:
//! its full state can be recovered from a handful of outputs. Use
//! [`crypto_random_scalar`](crate::rng::crypto_random_scalar) where an
//! adversary may observe results.

use rand_core::{RngCore, SeedableRng, impls};

use crate::error::RandomError;
use crate::rng::entropy::fill_random_bytes;

/// LCG multiplier, shared with the reference `pcg32` implementation.
pub const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

/// LCG increment. Must be odd for the LCG to reach its full period.
pub const INCREMENT: u64 = 0xda3e_39cb_94b9_5bdb;

/// PCG32 random number generator.
///
/// The whole generator is one 64-bit state word. It is owned by the caller,
/// so two generators never interfere; see
/// [`SharedPcg32`](crate::rng::SharedPcg32) for a lockable instance that can
/// be shared across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    /// Creates a generator seeded with 8 bytes of OS entropy.
    ///
    /// The bytes are interpreted as a big-endian `u64`.
    ///
    /// # Errors
    /// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
    pub fn new() -> Result<Self, RandomError> {
        let mut seed = [0u8; 8];
        fill_random_bytes(&mut seed)?;

        debug!("pcg32 seeded from operating system entropy");

        Ok(Self::from_seed(seed))
    }

    /// Creates a generator with an explicit state word.
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Returns the current state word.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Replaces the state word, e.g. to restore a snapshot taken with
    /// [`Pcg32::state`].
    pub fn set_state(&mut self, state: u64) {
        self.state = state;
    }

    /// Returns the next 32-bit output and advances the state.
    ///
    /// The output is a permutation of the state *before* the step.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        output(old)
    }
}

/// XSH-RR permutation: xorshift high, then rotate right by the top 5 bits.
#[inline(always)]
fn output(state: u64) -> u32 {
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;

    xorshifted.rotate_right(rot)
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    /// Big-endian encoding of the initial state word.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_state(u64::from_be_bytes(seed))
    }
}
