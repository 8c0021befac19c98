//! Operating system entropy
//!
//! Thin, safe front for the platform layer in [`crate::os`], plus the
//! cryptographically strong big-integer sampler. Nothing here holds
//! mutable state, so every function is safe to call concurrently.

use crate::curves::SECP256K1_ORDER;
use crate::error::RandomError;
use crate::os::sys_random;
use crate::primitives::U256;

/// Fills `buf` with bytes from the operating system's secure random source.
///
/// # Errors
/// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
pub fn fill_random_bytes(buf: &mut [u8]) -> Result<(), RandomError> {
    if buf.is_empty() {
        return Ok(());
    }

    sys_random(buf).map_err(|err| {
        warn!("secure random source failed: {}", err);
        RandomError::from(err)
    })
}

/// Returns exactly `n` securely generated random bytes.
///
/// # Errors
/// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>, RandomError> {
    let mut out = vec![0u8; n];
    fill_random_bytes(&mut out)?;

    Ok(out)
}

/// Returns a value uniformly distributed in `[0, bound)` using OS entropy.
///
/// Only as many bytes as `bound - 1` needs are read, and the excess bits of
/// the top byte are masked off. Candidates at or above `bound` are
/// discarded, so no modular reduction bias is introduced and each attempt
/// succeeds with probability above one half.
///
/// # Panics
/// Panics if `bound` is zero.
///
/// # Errors
/// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
pub fn crypto_random_below(bound: &U256) -> Result<U256, RandomError> {
    assert!(!bound.is_zero(), "crypto_random_below: bound must be non-zero");

    let bits = (*bound - U256::ONE).bits();

    if bits == 0 {
        return Ok(U256::ZERO);
    }

    let len = bits.div_ceil(8) as usize;
    let offset = 32 - len;
    let mut buf = [0u8; 32];

    loop {
        fill_random_bytes(&mut buf[offset..])?;

        let candidate = U256::from(buf).low_bits(bits);

        if candidate < *bound {
            return Ok(candidate);
        }

        trace!("crypto_random_below: rejected candidate at or above bound");
    }
}

/// Returns a secp256k1 scalar uniformly distributed in `[0, n)` using OS
/// entropy.
///
/// This is the cryptographically strong counterpart of
/// [`Pcg32::random_scalar`](crate::rng::Pcg32::random_scalar).
///
/// # Errors
/// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
pub fn crypto_random_scalar() -> Result<U256, RandomError> {
    crypto_random_below(&SECP256K1_ORDER)
}
