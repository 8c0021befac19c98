//! Unbiased bounded sampling
//!
//! Lemire's multiply-and-reject method: the high half of `r * bound` is the
//! result, and the low half tells whether `r` fell in the short final
//! interval that would make some results more likely than others.

use crate::rng::Pcg32;

impl Pcg32 {
    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// Usually consumes one output; retries are needed with probability
    /// `(2³² mod bound) / 2³²`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn bounded(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "Pcg32::bounded: bound must be non-zero");

        let bound64 = u64::from(bound);
        let mut m = u64::from(self.next_u32()) * bound64;
        let mut leftover = m as u32;

        if leftover < bound {
            // 2^32 mod bound
            let threshold = bound.wrapping_neg() % bound;

            while leftover < threshold {
                m = u64::from(self.next_u32()) * bound64;
                leftover = m as u32;
            }
        }

        (m >> 32) as u32
    }
}
