//! BLAKE2b hash function (RFC 7693).
//!
//! BLAKE2b is a cryptographic hash function optimized for 64-bit platforms,
//! producing digests of 1 to 64 bytes. It is the sole hash primitive of the
//! Argon2 key derivation function, which uses it in three roles:
//!
//! 1. Computing the 64-byte initial hash H0 over all derivation inputs.
//! 2. Expanding H0 into the first blocks of each memory lane through the
//!    variable-length construction H'.
//! 3. Squeezing the final 1024-byte block down to the requested tag length,
//!    again through H'.
//!
//! The streaming surface accepts input in arbitrary chunks: feeding the same
//! bytes in any chunking produces the same digest.

pub mod core;
pub mod long;
