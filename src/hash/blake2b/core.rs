//! BLAKE2b core hashing functions.
//!
//! This module implements the BLAKE2b cryptographic hash function as defined
//! in RFC 7693: 12 rounds of the G mixing function over a 16-word state,
//! driven by the sigma message schedule.
//!
//! It provides:
//! - a streaming context (`init` / `update` / `finalize`) that accepts input
//!   in arbitrary chunks
//! - a one-shot convenience function for hashing a complete message
//!
//! Keyed hashing, salts, and personalization are not used by this crate and
//! are not implemented; the parameter block is reduced to the output length,
//! fanout 1, and depth 1.

use crate::utils::{load64_le, store64_le};

/// BLAKE2b initialization vector (RFC 7693 §2.6).
const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule (RFC 7693 §2.7). Rounds 10 and 11 reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Number of mixing rounds for the 64-bit flavor (RFC 7693 §3.2).
const ROUNDS: usize = 12;

/// Block size in bytes.
const BLOCK_BYTES: usize = 128;

/// Streaming BLAKE2b context.
///
/// Created with a fixed output length between 1 and 64 bytes; the output
/// length participates in the parameter block, so digests of different
/// lengths are unrelated (not truncations of one another).
#[derive(Clone)]
pub struct Blake2b {
    h: [u64; 8],
    t: u128,
    buf: [u8; BLOCK_BYTES],
    buf_len: usize,
    out_len: usize,
    last_node: bool,
}

impl Blake2b {
    /// Creates a new context producing a digest of `out_len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `out_len` is 0 or greater than 64.
    pub fn new(out_len: usize) -> Self {
        assert!(out_len >= 1 && out_len <= 64, "BLAKE2b output length must be 1..=64");

        // Parameter block folded into h[0]: digest length, key length 0,
        // fanout 1, depth 1 (RFC 7693 §2.5).
        let mut h = IV;
        h[0] ^= 0x0101_0000 ^ (out_len as u64);

        Self {
            h,
            t: 0,
            buf: [0u8; BLOCK_BYTES],
            buf_len: 0,
            out_len,
            last_node: false,
        }
    }

    /// Digest length this context was created with.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Absorbs `data` into the hash state.
    ///
    /// May be called any number of times; the digest depends only on the
    /// concatenation of all inputs, not on how they were chunked.
    pub fn update(&mut self, data: &[u8]) {
        let mut input = data;

        while !input.is_empty() {
            // A full buffer is compressed only once further input arrives,
            // so the final block is always available for the last-block flag.
            if self.buf_len == BLOCK_BYTES {
                self.t += BLOCK_BYTES as u128;
                self.compress(false);
                self.buf_len = 0;
            }

            let take = input.len().min(BLOCK_BYTES - self.buf_len);
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
            self.buf_len += take;
            input = &input[take..];
        }
    }

    /// Completes the hash and returns the serialized 64-byte state.
    ///
    /// The digest is the first `out_len` bytes of the returned array; the
    /// remaining bytes are meaningless when `out_len < 64`.
    pub fn finalize(mut self) -> [u8; 64] {
        self.t += self.buf_len as u128;
        self.buf[self.buf_len..].fill(0);
        self.compress(true);

        let mut out = [0u8; 64];
        for (i, word) in self.h.iter().enumerate() {
            store64_le(&mut out[i * 8..], *word);
        }
        out
    }

    /// Compresses the buffered block into the state (RFC 7693 §3.2).
    fn compress(&mut self, last: bool) {
        let mut m = [0u64; 16];
        for (slot, chunk) in m.iter_mut().zip(self.buf.chunks_exact(8)) {
            *slot = load64_le(chunk);
        }

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(&self.h);
        v[8..].copy_from_slice(&IV);

        v[12] ^= self.t as u64;
        v[13] ^= (self.t >> 64) as u64;
        if last {
            v[14] = !v[14];
            if self.last_node {
                v[15] = !v[15];
            }
        }

        for round in 0..ROUNDS {
            let s = &SIGMA[round % 10];

            g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

            g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            self.h[i] ^= v[i] ^ v[i + 8];
        }
    }
}

/// The G mixing function (RFC 7693 §3.1).
#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Computes the BLAKE2b digest of `data` in one call.
///
/// # Panics
///
/// Panics if `out_len` is 0 or greater than 64.
pub fn blake2b(out_len: usize, data: &[u8]) -> Vec<u8> {
    let mut ctx = Blake2b::new(out_len);
    ctx.update(data);
    let mut out = ctx.finalize().to_vec();
    out.truncate(out_len);
    out
}
