//! The Argon2 memory matrix and its fill loop.
//!
//! The matrix holds `lanes` rows of 1024-byte blocks, and filling it is
//! where nearly all derivation time is spent. Within a slice the lanes
//! are mutually independent; this implementation walks them in lane
//! order, which produces the same digest as any parallel scheduling
//! because cross-lane references only ever reach blocks of earlier
//! slices.

use super::block::{AddressGenerator, Block, ADDRESSES_IN_BLOCK};
use super::params::SYNC_POINTS;
use super::reference::index_alpha;
use super::variant::Variant;

/// Memory layout parameters for Argon2: `lanes` independent rows of
/// `lane_len` blocks each, every row split into 4 equal slices of
/// `segment_len` blocks that act as synchronization points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MemoryLayout {
    pub total_blocks: u32,
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
}

impl MemoryLayout {
    /// Builds the layout from an already-rounded block count: `total_blocks`
    /// must be a multiple of `4 * lanes`.
    pub(crate) fn new(total_blocks: u32, lanes: u32) -> Self {
        debug_assert_eq!(total_blocks % (SYNC_POINTS * lanes), 0);
        let lane_len = total_blocks / lanes;

        Self {
            total_blocks,
            lanes,
            lane_len,
            segment_len: lane_len / SYNC_POINTS,
        }
    }

    /// Flat arena position of block `index_in_lane` of `lane`.
    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        lane as usize * self.lane_len as usize + index_in_lane as usize
    }

    /// Runs `time_cost` full passes over the matrix, slice by slice.
    ///
    /// Slices are strictly ordered; the lanes inside one slice carry no
    /// ordering constraints among themselves because their segments only
    /// read blocks finished in earlier slices (or their own lane).
    pub(crate) fn fill(&self, memory: &mut [Block], variant: Variant, time_cost: u32) {
        for pass in 0..time_cost {
            for slice in 0..SYNC_POINTS {
                for lane in 0..self.lanes {
                    self.fill_segment(memory, variant, pass, slice, lane, time_cost);
                }
            }
        }
    }

    /// Fills one segment: the part of `lane` lying in `slice`.
    ///
    /// Per position: source the pseudo-random word J (address generator
    /// or previous block, depending on variant and position), resolve it
    /// to a reference block, then write G(previous, reference), XORing
    /// into the existing block on passes after the first.
    fn fill_segment(
        &self,
        memory: &mut [Block],
        variant: Variant,
        pass: u32,
        slice: u32,
        lane: u32,
        time_cost: u32,
    ) {
        let data_independent = match variant {
            Variant::Argon2d => false,
            Variant::Argon2i => true,
            Variant::Argon2id => pass == 0 && slice < SYNC_POINTS / 2,
        };

        let mut addresses = if data_independent {
            Some(AddressGenerator::new(
                pass,
                lane,
                slice,
                self.total_blocks,
                time_cost,
                variant,
            ))
        } else {
            None
        };

        // The first two blocks of each lane are produced by the bootstrap.
        let start_index = if pass == 0 && slice == 0 { 2 } else { 0 };

        if start_index != 0 {
            if let Some(gen) = addresses.as_mut() {
                gen.refresh();
            }
        }

        for i in start_index..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;

            // The previous block trails the current one, wrapping to the
            // end of the lane at the start of slice 0 on later passes;
            // re-derived per position rather than carried as a cursor.
            let prev_in_lane = index_in_lane
                .checked_sub(1)
                .unwrap_or(self.lane_len - 1);

            let rand = match addresses.as_mut() {
                Some(gen) => {
                    if i % ADDRESSES_IN_BLOCK == 0 {
                        gen.refresh();
                    }
                    gen.word(i)
                }
                None => memory[self.index(lane, prev_in_lane)].0[0],
            };

            // The upper half of J picks the lane; cross-lane references
            // are forbidden while the first slice is being bootstrapped.
            let ref_lane = if pass == 0 && slice == 0 {
                lane
            } else {
                ((rand >> 32) as u32) % self.lanes
            };

            let ref_index = index_alpha(pass, slice, i, ref_lane == lane, self, rand as u32);

            let compressed = Block::compress(
                &memory[self.index(lane, prev_in_lane)],
                &memory[self.index(ref_lane, ref_index)],
            );

            let current = self.index(lane, index_in_lane);
            if pass == 0 {
                memory[current] = compressed;
            } else {
                memory[current].xor_assign(&compressed);
            }
        }
    }
}
