//! Reference block selection for the Argon2 fill loop.
//!
//! Each position mixes its predecessor with one previously written block.
//! Which block is admissible depends on where the fill currently stands:
//! earlier positions of the same lane during the first slice of the first
//! pass, synchronized slices of any lane afterwards. The pseudo-random
//! word J1 is folded through a non-uniform quadratic map so that recent
//! blocks are favored, which strengthens time-memory trade-off resistance.

use super::memory::MemoryLayout;
use super::params::SYNC_POINTS;

/// Maps the pseudo-random word J1 to an in-lane block index (the
/// `index_alpha` mapping of RFC 9106 §3.4.1.3).
///
/// The caller has already fixed the reference lane from J2;
/// `same_lane` says whether it is the lane currently being filled. The
/// returned index respects the admissibility rules:
///
/// - never the block immediately preceding the one being written,
/// - within the current segment only positions already rewritten,
/// - on foreign lanes only fully synchronized slices.
pub(crate) fn index_alpha(
    pass: u32,
    slice: u32,
    index: u32,
    same_lane: bool,
    layout: &MemoryLayout,
    j1: u32,
) -> u32 {
    let MemoryLayout {
        lane_len,
        segment_len,
        ..
    } = *layout;

    let first_pass = pass == 0;

    // Blocks finished before this segment began: the earlier slices of
    // this pass, or everything but one slice once the matrix is full.
    let completed = if first_pass {
        slice * segment_len
    } else {
        lane_len - segment_len
    };

    // Window size. Own-lane references may additionally reach the
    // positions this segment has already rewritten; the predecessor is
    // excluded, as is the youngest foreign block when nothing of the
    // current segment exists yet. Never zero: segments hold at least two
    // blocks and the first slice starts filling at index 2.
    let window = if first_pass && slice == 0 {
        index - 1
    } else if same_lane {
        completed + index - 1
    } else if index == 0 {
        completed - 1
    } else {
        completed
    };

    // J1 is squeezed quadratically into [0, window): x = J1²/2³², then
    // relative = window - 1 - window·x/2³², biasing toward recent blocks.
    let window = window as u64;
    let x = ((j1 as u64) * (j1 as u64)) >> 32;
    let relative = window - 1 - ((window * x) >> 32);

    // On later passes the window begins right after the segment under
    // rewrite and wraps around the lane.
    let window_start = if first_pass || slice == SYNC_POINTS - 1 {
        0
    } else {
        (slice + 1) * segment_len
    };

    ((window_start as u64 + relative) % lane_len as u64) as u32
}
