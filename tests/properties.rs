//! Property-based tests for the fingerprint and similarity laws.

use proptest::prelude::*;

use filesim::fingerprint::{byte_total, chunk_sums, BLOCK_SIZE, CHUNK_SIZE};
use filesim::similarity::{overlap_similarity, positional_similarity, Similarity};

proptest! {
    /// Any buffer with at least one full block is 100% similar to itself.
    #[test]
    fn positional_self_similarity_is_full(
        blocks in 1usize..8,
        seed in any::<u8>(),
    ) {
        let content: Vec<u8> = (0..blocks * BLOCK_SIZE)
            .map(|i| (i as u8).wrapping_add(seed))
            .collect();
        prop_assert_eq!(
            positional_similarity(&content, &content),
            Similarity::Percent(100.0)
        );
    }

    /// Any nonempty sum fingerprint fully overlaps itself.
    #[test]
    fn overlap_self_similarity_is_full(content in proptest::collection::vec(any::<u8>(), 1..2048)) {
        let digests = chunk_sums(&content);
        prop_assert_eq!(
            overlap_similarity(&digests, &digests),
            Similarity::Percent(100.0)
        );
    }

    /// The sum fingerprint has one digest per started chunk.
    #[test]
    fn chunk_sums_length_law(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let digests = chunk_sums(&content);
        prop_assert_eq!(digests.len(), content.len().div_ceil(CHUNK_SIZE));
    }

    /// Chunking never loses or invents byte mass.
    #[test]
    fn chunk_sums_preserve_total(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let from_chunks: u64 = chunk_sums(&content).iter().sum();
        prop_assert_eq!(from_chunks, byte_total(&content));
    }

    /// A defined overlap score is a percentage in [0, 100].
    #[test]
    fn overlap_score_is_bounded(
        base in proptest::collection::vec(0u64..16, 1..64),
        target in proptest::collection::vec(0u64..16, 0..64),
    ) {
        match overlap_similarity(&base, &target) {
            Similarity::Percent(p) => prop_assert!((0.0..=100.0).contains(&p)),
            Similarity::Undefined => prop_assert!(false, "nonempty base must score"),
        }
    }

    /// Overlap never counts more matches than either side holds.
    #[test]
    fn overlap_matches_bounded_by_target(
        base in proptest::collection::vec(0u64..4, 1..32),
        target in proptest::collection::vec(0u64..4, 0..32),
    ) {
        if let Similarity::Percent(p) = overlap_similarity(&base, &target) {
            let matches = (p / 100.0 * base.len() as f64).round() as usize;
            prop_assert!(matches <= target.len());
        }
    }
}
