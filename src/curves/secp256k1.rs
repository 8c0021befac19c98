//! secp256k1 domain constants

use crate::primitives::U256;

/// Order `n` of the secp256k1 base point `G`.
///
/// Valid scalars for the curve lie in `[0, n)`.
pub const ORDER: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
