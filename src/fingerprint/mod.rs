//! Fingerprinting module: reduce file content to chunk digest sequences.
//!
//! # Overview
//!
//! A fingerprint is an ordered sequence of per-chunk digests derived from a
//! file's raw bytes. Two chunking policies coexist and are never mixed within
//! one comparison:
//!
//! - [`equality`]: fixed 1 KiB blocks whose "digest" is the raw block bytes
//!   themselves; a trailing partial block is dropped. Consumed by the
//!   positional scorer, which tests blocks at matching indices for exact
//!   equality.
//! - [`sums`]: fixed 100-byte windows reduced to unsigned byte-sums; the
//!   final window is kept even when short. Consumed by the overlap scorer,
//!   which matches digests regardless of position.
//!
//! Both policies are pure functions of the content: empty content yields an
//! empty digest sequence, and chunk order is preserved (significant for
//! positional comparison, irrelevant for overlap).
//!
//! # Example
//!
//! ```
//! use filesim::fingerprint::{equality, sums};
//!
//! let content = vec![1u8; 250];
//!
//! // No full 1 KiB block fits in 250 bytes.
//! assert_eq!(equality::block_count(content.len()), 0);
//!
//! // 100 + 100 + 50 bytes: three sum digests, the last over 50 bytes.
//! let digests = sums::chunk_sums(&content);
//! assert_eq!(digests, vec![100, 100, 50]);
//! ```

pub mod equality;
pub mod sums;

pub use equality::{block_count, blocks, BLOCK_SIZE};
pub use sums::{byte_total, chunk_sums, CHUNK_SIZE};
