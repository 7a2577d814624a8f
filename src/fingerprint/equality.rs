//! Equality-chunking policy: aligned fixed-size blocks of raw bytes.
//!
//! This policy does not reduce a block to a scalar. Equality is tested on
//! the raw byte sub-sequences, so the "digest" for block `i` is the block
//! itself. Only full blocks participate: content shorter than one block
//! yields no blocks at all, and trailing bytes beyond the last full block
//! are ignored.

/// Fixed block size for positional comparison, in bytes.
pub const BLOCK_SIZE: usize = 1024;

/// Number of full blocks in content of the given length.
///
/// Remainder bytes beyond `len / BLOCK_SIZE` blocks are not counted.
/// A 2000-byte file has exactly one block; a 1023-byte file has none.
#[must_use]
pub fn block_count(len: usize) -> usize {
    len / BLOCK_SIZE
}

/// Iterate over the full aligned blocks of `content`.
///
/// Yields exactly [`block_count`]`(content.len())` slices of exactly
/// [`BLOCK_SIZE`] bytes each, in order. The trailing partial block, if
/// any, is never yielded.
pub fn blocks(content: &[u8]) -> std::slice::ChunksExact<'_, u8> {
    content.chunks_exact(BLOCK_SIZE)
}
