//! Low-level byte-order utilities used by the rest of the crate.
//!
//! Both BLAKE2b and the Argon2 block algebra are specified over
//! little-endian 64-bit words; these helpers centralize the conversions.

/// Reads a little-endian `u64` from the first 8 bytes of `bytes`.
#[inline(always)]
pub(crate) fn load64_le(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes[..8].try_into().unwrap())
}

/// Writes `word` into the first 8 bytes of `bytes` in little-endian order.
#[inline(always)]
pub(crate) fn store64_le(bytes: &mut [u8], word: u64) {
    bytes[..8].copy_from_slice(&word.to_le_bytes());
}
