//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used as the output type of the big-integer samplers.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. It carries exactly what range reduction
//! needs: ordering, bit length, bit masking, and a wrapping subtraction.
//!
//! The internal representation is big-endian, so the derived lexicographic
//! ordering on the byte array is also the numeric ordering.

mod conv;
mod ops;

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Parses a 64-digit big-endian hexadecimal string at compile time.
    ///
    /// Intended for compiled-in constants such as curve group orders.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) if the string is not
    /// exactly 64 hexadecimal digits.
    pub const fn from_be_hex(hex: &str) -> Self {
        let digits = hex.as_bytes();
        assert!(digits.len() == 64, "expected 64 hex digits");

        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 32 {
            out[i] = (hex_nibble(digits[2 * i]) << 4) | hex_nibble(digits[2 * i + 1]);
            i += 1;
        }

        U256(out)
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Minimum number of bits needed to represent the value.
    ///
    /// Zero has a bit length of zero.
    pub fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Keeps the lowest `bits` bits and clears everything above them.
    pub fn low_bits(&self, bits: u32) -> Self {
        if bits >= 256 {
            return *self;
        }

        let keep = bits.div_ceil(8) as usize;
        let cut = 32 - keep;

        let mut out = self.0;
        out[..cut].fill(0);

        let partial = bits % 8;
        if partial != 0 {
            out[cut] &= 0xFF >> (8 - partial);
        }

        U256(out)
    }
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
    }
}
