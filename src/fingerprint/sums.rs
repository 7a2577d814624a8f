//! Sum-chunking policy: fixed windows reduced to unsigned byte-sums.
//!
//! Content is read sequentially in 100-byte windows; every window, including
//! a final short one, contributes one `u64` digest equal to the sum of its
//! byte values. The same reduction applied to the whole file at once backs
//! the duplicate-sum heuristic.

/// Nominal chunk size for sum fingerprints, in bytes.
pub const CHUNK_SIZE: usize = 100;

/// Compute the sum fingerprint of `content`.
///
/// Returns one digest per window of [`CHUNK_SIZE`] bytes, in order. The
/// final window is included even if shorter than the nominal size, summed
/// over whatever bytes remain. Empty content yields an empty sequence.
#[must_use]
pub fn chunk_sums(content: &[u8]) -> Vec<u64> {
    content.chunks(CHUNK_SIZE).map(sum_bytes).collect()
}

/// Sum of every byte value in `content`, with no chunking.
///
/// `u64` cannot overflow here for any realistic file: the sum grows at most
/// 255 per byte read.
#[must_use]
pub fn byte_total(content: &[u8]) -> u64 {
    sum_bytes(content)
}

fn sum_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().map(|&b| u64::from(b)).sum()
}
