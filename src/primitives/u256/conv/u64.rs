//! Conversions between `U256` and 64-bit integer representations

use crate::primitives::U256;

/// Converts a `u64` into a `U256`.
///
/// The value occupies the least significant 64 bits.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(24);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 8];
        buf.copy_from_slice(low);

        Ok(u64::from_be_bytes(buf))
    }
}
