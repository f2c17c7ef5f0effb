//! Block operations for Argon2.
//!
//! Everything the fill loop touches lives here: the 1024-byte block type,
//! the compression function G built from a message-less BLAKE2b round
//! whose additions are hardened with 32×32-bit multiplications, and the
//! counter-driven generator behind data-independent addressing.

use crate::utils::{load64_le, store64_le};

use super::variant::Variant;

/// Number of 64-bit pseudo-random words held by one address block.
pub(crate) const ADDRESSES_IN_BLOCK: u32 = 128;

/// Low-32-bit mask used by the multiplicative mixing step.
const TRUNC: u64 = u32::MAX as u64;

/// A 1024-byte memory block (128 × 64-bit little-endian words).
///
/// The whole algorithm is phrased over these: the matrix is an array of
/// them, and every fill step combines two of them through G into a third.
#[derive(Clone)]
pub(crate) struct Block(pub(crate) [u64; 128]);

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    /// Size of a serialized block in bytes.
    pub(crate) const SIZE: usize = 1024;

    pub(crate) fn xor_assign(&mut self, other: &Block) {
        for (word, rhs) in self.0.iter_mut().zip(other.0) {
            *word ^= rhs;
        }
    }

    pub(crate) fn from_bytes(bytes: &[u8; Block::SIZE]) -> Self {
        let words = std::array::from_fn(|i| load64_le(&bytes[i * 8..]));
        Block(words)
    }

    pub(crate) fn to_bytes(&self) -> [u8; Block::SIZE] {
        let mut out = [0u8; Block::SIZE];
        for (i, word) in self.0.iter().enumerate() {
            store64_le(&mut out[i * 8..], *word);
        }
        out
    }

    /// Argon2's compression function G (RFC 9106 §3.5).
    ///
    /// Computes G(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y, where P is the
    /// BLAKE2b-style round permutation over 16 words. The block is viewed
    /// as an 8×8 grid of 16-byte registers: the first round layer permutes
    /// each row of the grid (16 consecutive words), the second permutes
    /// each column (adjacent word pairs gathered at stride 16).
    ///
    /// On passes after the first, the caller XORs the result into the
    /// existing block instead of overwriting it.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = x.clone();
        r.xor_assign(y);

        // Working copy; r is kept for the final feed-forward XOR.
        let mut z = r.clone();

        for row in z.0.chunks_exact_mut(16) {
            permute(row.try_into().unwrap());
        }

        // Gather each column into a contiguous view, permute, scatter back.
        // Column `col` consists of the word pairs (16*row + 2*col, +1).
        let mut v = [0u64; 16];
        for col in 0..8 {
            for row in 0..8 {
                let src = 16 * row + 2 * col;
                v[2 * row] = z.0[src];
                v[2 * row + 1] = z.0[src + 1];
            }

            permute(&mut v);

            for row in 0..8 {
                let dst = 16 * row + 2 * col;
                z.0[dst] = v[2 * row];
                z.0[dst + 1] = v[2 * row + 1];
            }
        }

        z.xor_assign(&r);
        z
    }
}

/// Per-segment state for data-independent addressing.
///
/// In data-independent mode (all of Argon2i, and the first two slices of
/// the first pass of Argon2id), reference indices are drawn from address
/// blocks derived from position counters rather than from memory contents,
/// providing resistance against timing side channels.
pub(crate) struct AddressGenerator {
    input_block: Block,
    address_block: Block,
}

impl AddressGenerator {
    /// Seeds the generator with the position parameters of one segment.
    ///
    /// The input block layout is fixed by RFC 9106 §3.4.1.2: pass, lane,
    /// slice, total block count, pass count, variant tag, then a counter
    /// in word 6 that `refresh` advances.
    pub(crate) fn new(
        pass: u32,
        lane: u32,
        slice: u32,
        total_blocks: u32,
        time_cost: u32,
        variant: Variant,
    ) -> Self {
        let mut input_block = Block::ZERO;
        input_block.0[0] = pass as u64;
        input_block.0[1] = lane as u64;
        input_block.0[2] = slice as u64;
        input_block.0[3] = total_blocks as u64;
        input_block.0[4] = time_cost as u64;
        input_block.0[5] = variant.as_u64();

        Self {
            input_block,
            address_block: Block::ZERO,
        }
    }

    /// Produces the next batch of 128 pseudo-random words as
    /// G(0, G(0, input)) after advancing the block counter.
    pub(crate) fn refresh(&mut self) {
        self.input_block.0[6] += 1;
        self.address_block = Block::compress(&Block::ZERO, &self.input_block);
        self.address_block = Block::compress(&Block::ZERO, &self.address_block);
    }

    /// The pseudo-random word for position `index` within the segment.
    pub(crate) fn word(&self, index: u32) -> u64 {
        self.address_block.0[(index % ADDRESSES_IN_BLOCK) as usize]
    }
}

/// The multiplicative half-step shared by every quarter-round position:
/// `x + y + 2·lo32(x)·lo32(y)`, where BLAKE2b proper would compute
/// `x + y + message`. The extra product of the low halves is what makes
/// the permutation expensive to shortcut in hardware.
#[inline(always)]
fn blamka(x: u64, y: u64) -> u64 {
    let product = ((x & TRUNC) * (y & TRUNC)).wrapping_mul(2);
    x.wrapping_add(y).wrapping_add(product)
}

/// Rotation amounts of the four quarter-round steps (RFC 9106 §3.5).
const ROTATIONS: [u32; 4] = [32, 24, 16, 63];

/// One BLAKE2b-style quarter round over the grid cells `a, b, c, d`,
/// with the additive step replaced by [`blamka`]. Even steps mix the
/// (a, b) pair into d, odd steps mix (c, d) into b, alternating through
/// the four rotations.
#[inline(always)]
fn quarter_round(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize) {
    for (step, &rot) in ROTATIONS.iter().enumerate() {
        let (mixed, with, rotated) = if step % 2 == 0 { (a, b, d) } else { (c, d, b) };
        v[mixed] = blamka(v[mixed], v[with]);
        v[rotated] = (v[rotated] ^ v[mixed]).rotate_right(rot);
    }
}

/// Index schedule of the round permutation P: quarter rounds run down the
/// four columns of the 4×4 word grid, then along its four diagonals,
/// exactly as in one message-less BLAKE2b round.
const COLUMNS: [[usize; 4]; 4] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
];
const DIAGONALS: [[usize; 4]; 4] = [
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// The round permutation P applied to 16 words in place.
#[inline(always)]
fn permute(v: &mut [u64; 16]) {
    for [a, b, c, d] in COLUMNS {
        quarter_round(v, a, b, c, d);
    }
    for [a, b, c, d] in DIAGONALS {
        quarter_round(v, a, b, c, d);
    }
}
