//! Positional-equality scoring over aligned raw blocks.
//!
//! Operates directly on two raw byte buffers under the equality-chunking
//! policy: block `i` of the left buffer is compared byte-for-byte against
//! block `i` of the right buffer, up to the shorter buffer's block count.
//! The score is the fraction of matching indices, as a percentage.

use crate::fingerprint::equality;
use crate::similarity::Similarity;

/// Score two buffers by aligned block equality.
///
/// `min_blocks = min(block_count(a), block_count(b))` under the fixed
/// 1 KiB block size; indices `[0, min_blocks)` are compared and the result
/// is `matches / min_blocks * 100`. Bytes beyond the last full block of
/// either buffer never participate.
///
/// Returns [`Similarity::Undefined`] when `min_blocks == 0`, i.e. when
/// either buffer is shorter than one full block.
#[must_use]
pub fn positional_similarity(a: &[u8], b: &[u8]) -> Similarity {
    let min_blocks = equality::block_count(a.len()).min(equality::block_count(b.len()));
    if min_blocks == 0 {
        return Similarity::Undefined;
    }

    let matches = equality::blocks(a)
        .zip(equality::blocks(b))
        .take(min_blocks)
        .filter(|(left, right)| left == right)
        .count();

    Similarity::Percent(matches as f64 / min_blocks as f64 * 100.0)
}
