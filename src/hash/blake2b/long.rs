//! Variable-length derivation H' (RFC 9106 §3.3).
//!
//! BLAKE2b caps its digest at 64 bytes; Argon2 needs both 1024-byte memory
//! blocks and tags of arbitrary length. H' bridges the gap: short outputs
//! are a single length-prefixed BLAKE2b call, long outputs chain 64-byte
//! digests and concatenate their first halves, closing with a final digest
//! emitted in full.

use super::core::{blake2b, Blake2b};

/// Computes H'(out_len, input): `out_len` bytes derived from `input`.
///
/// The requested length is prepended to the input as a little-endian 32-bit
/// integer, so outputs of different lengths are domain-separated.
///
/// # Panics
///
/// Panics if `out_len` is 0 or does not fit in a `u32`.
pub fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    assert!(out_len >= 1, "H' output length must be at least 1");
    let prefix = u32::try_from(out_len)
        .expect("H' output length must fit in 32 bits")
        .to_le_bytes();

    if out_len <= 64 {
        let mut ctx = Blake2b::new(out_len);
        ctx.update(&prefix);
        ctx.update(input);
        return ctx.finalize()[..out_len].to_vec();
    }

    let mut out = vec![0u8; out_len];

    // V1 = H^64(LE32(T) || X); emit its first 32 bytes.
    let mut ctx = Blake2b::new(64);
    ctx.update(&prefix);
    ctx.update(input);
    let mut v = ctx.finalize();
    out[..32].copy_from_slice(&v[..32]);

    // V_{i+1} = H^64(V_i) while more than 64 bytes remain; emit 32 each.
    let mut pos = 32;
    while out_len - pos > 64 {
        let mut ctx = Blake2b::new(64);
        ctx.update(&v);
        v = ctx.finalize();
        out[pos..pos + 32].copy_from_slice(&v[..32]);
        pos += 32;
    }

    // Final digest sized to the remainder (33..=64 bytes), emitted in full.
    let tail = blake2b(out_len - pos, &v);
    out[pos..].copy_from_slice(&tail);

    out
}
