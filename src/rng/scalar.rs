//! Big-integer sampling from PCG32 output
//!
//! Eight consecutive outputs make one 256-bit candidate. Each output is
//! written as four little-endian bytes, first output first, and the
//! resulting 32-byte buffer is read as a big-endian integer. Existing
//! protocol participants depend on this exact layout.

use crate::curves::SECP256K1_ORDER;
use crate::primitives::U256;
use crate::rng::Pcg32;

impl Pcg32 {
    /// Draws one raw 256-bit candidate (eight outputs).
    pub fn next_u256(&mut self) -> U256 {
        let mut buf = [0u8; 32];

        for chunk in buf.chunks_exact_mut(4) {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }

        U256::from(buf)
    }

    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// Each round draws a full candidate, keeps its low `bits(bound - 1)`
    /// bits, and discards it whole if it is still at or above `bound`. No
    /// modular reduction is applied, and a round succeeds with probability
    /// above one half. For a 256-bit bound such as the secp256k1 order the
    /// mask is a no-op.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn random_below(&mut self, bound: &U256) -> U256 {
        assert!(!bound.is_zero(), "Pcg32::random_below: bound must be non-zero");

        let bits = (*bound - U256::ONE).bits();

        loop {
            let candidate = self.next_u256().low_bits(bits);

            if candidate < *bound {
                return candidate;
            }

            trace!("pcg32 random_below: rejected candidate at or above bound");
        }
    }

    /// Returns a secp256k1 scalar uniformly distributed in `[0, n)`.
    ///
    /// Fast and reproducible for a fixed state, but not cryptographically
    /// secure. See [`crypto_random_scalar`](crate::rng::crypto_random_scalar).
    pub fn random_scalar(&mut self) -> U256 {
        self.random_below(&SECP256K1_ORDER)
    }
}
