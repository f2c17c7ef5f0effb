//! Initialization and finalization for Argon2.
//!
//! This module handles the boundary operations of the Argon2 algorithm:
//! computing the initial hash H0 from all inputs, expanding H0 into the
//! first two blocks of every lane, and deriving the final tag from the
//! filled memory.

use crate::hash::blake2b::core::Blake2b;
use crate::hash::blake2b::long::blake2b_long;

use super::block::Block;
use super::memory::MemoryLayout;
use super::params::Params;
use super::variant::{Variant, Version};

/// Computes the initial hash H0 seeding the whole derivation.
///
/// Every parameter and input is fed into one 64-byte BLAKE2b digest, the
/// variable-length fields each preceded by a little-endian length word,
/// in the fixed order of RFC 9106 §3.2:
///
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// A change to any field, including the lengths of absent ones (which
/// still contribute a zero length word), changes H0 and with it every
/// block of the matrix. The memory cost hashed here is the caller's
/// request, not the value rounded to a multiple of `4 * lanes`.
pub(crate) fn initial_hash(
    variant: Variant,
    version: Version,
    params: &Params,
    password: &[u8],
    salt: &[u8],
) -> [u8; 64] {
    let mut digest = Blake2b::new(64);

    digest.update(&params.lanes.to_le_bytes());
    digest.update(&params.hash_length.to_le_bytes());
    digest.update(&params.mem_cost.to_le_bytes());
    digest.update(&params.time_cost.to_le_bytes());
    digest.update(&version.as_u32().to_le_bytes());
    digest.update(&variant.as_u32().to_le_bytes());

    digest.update(&(password.len() as u32).to_le_bytes());
    digest.update(password);

    digest.update(&(salt.len() as u32).to_le_bytes());
    digest.update(salt);

    if let Some(ref secret) = params.secret {
        digest.update(&(secret.len() as u32).to_le_bytes());
        digest.update(secret);
    } else {
        digest.update(&0u32.to_le_bytes());
    }

    if let Some(ref ad) = params.associated_data {
        digest.update(&(ad.len() as u32).to_le_bytes());
        digest.update(ad);
    } else {
        digest.update(&0u32.to_le_bytes());
    }

    digest.finalize()
}

/// Expands H0 into the first two blocks of every lane:
/// `B[i][j] = H'^(1024)(H0 || LE32(j) || LE32(i))` for `j` in 0..2.
///
/// The hash input is carried in a single 72-byte buffer whose last eight
/// bytes are rewritten between invocations.
pub(crate) fn initialize_lanes(memory: &mut [Block], layout: &MemoryLayout, h0: &[u8; 64]) {
    let mut seed = [0u8; 72];
    seed[..64].copy_from_slice(h0);

    for lane in 0..layout.lanes {
        seed[68..72].copy_from_slice(&lane.to_le_bytes());
        for j in 0..2u32 {
            seed[64..68].copy_from_slice(&j.to_le_bytes());
            let bytes = blake2b_long(Block::SIZE, &seed);
            memory[layout.index(lane, j)] =
                Block::from_bytes(bytes.as_slice().try_into().unwrap());
        }
    }
}

/// Derives the output tag from the filled matrix.
///
/// The last column of the matrix is folded into one 1024-byte block by
/// XOR, then squeezed through H' to `tag_len` bytes. Because every lane's
/// final block feeds the fold, no lane's work can be skipped without
/// changing the tag.
pub(crate) fn finalize(memory: &[Block], layout: &MemoryLayout, tag_len: u32) -> Vec<u8> {
    let mut final_block = Block::ZERO;

    for lane in 0..layout.lanes {
        final_block.xor_assign(&memory[layout.index(lane, layout.lane_len - 1)]);
    }

    blake2b_long(tag_len as usize, &final_block.to_bytes())
}
