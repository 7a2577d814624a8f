//! End-to-end comparison runs over real files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use filesim::compare::{CompareConfig, CompareMode, Comparer};
use filesim::similarity::Similarity;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn comparer() -> Comparer {
    Comparer::new(CompareConfig::default().with_threads(2))
}

#[test]
fn positional_identical_files_score_100() {
    let dir = TempDir::new().unwrap();
    let content: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();
    let a = write_file(&dir, "a.bin", &content);
    let b = write_file(&dir, "b.bin", &content);

    let report = comparer().compare(&[a, b], CompareMode::Positional);

    assert_eq!(report.scores.len(), 1);
    assert_eq!(report.scores[0].score, Similarity::Percent(100.0));
    assert!(!report.has_skips());
}

#[test]
fn positional_compares_only_full_blocks() {
    // 1024 and 2000 bytes: one block each; the 2000-byte file's tail is
    // invisible to the comparison
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.bin", &vec![7u8; 1024]);
    let mut tail_differs = vec![7u8; 2000];
    tail_differs[1500] = 99;
    let b = write_file(&dir, "b.bin", &tail_differs);

    let report = comparer().compare(&[a, b], CompareMode::Positional);
    assert_eq!(report.scores[0].score, Similarity::Percent(100.0));
}

#[test]
fn positional_short_files_are_undefined() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.bin", b"short");
    let b = write_file(&dir, "b.bin", b"short");

    let report = comparer().compare(&[a, b], CompareMode::Positional);
    assert_eq!(report.scores.len(), 1);
    assert!(report.scores[0].score.is_undefined());
    // An undefined score is still a delivered result, not a skip
    assert_eq!(report.stats.units_completed, 1);
}

#[test]
fn overlap_scenario_zero_and_one_files() {
    // fileA, fileB: 50 zero bytes; fileC: 50 bytes of value 1
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "fileA", &[0u8; 50]);
    let b = write_file(&dir, "fileB", &[0u8; 50]);
    let c = write_file(&dir, "fileC", &[1u8; 50]);

    let report = comparer().compare(&[a.clone(), b.clone(), c], CompareMode::Overlap);
    assert_eq!(report.scores.len(), 3);

    for score in &report.scores {
        let expected = if score.left == a && score.right == b {
            100.0 // both fingerprints are [0]
        } else {
            0.0 // [0] vs [50]
        };
        assert_eq!(score.score, Similarity::Percent(expected));
    }
}

#[test]
fn overlap_is_asymmetric_between_runs() {
    // 200 bytes -> fingerprint [100, 100]; 100 bytes -> [100]
    let dir = TempDir::new().unwrap();
    let long = write_file(&dir, "long.bin", &[1u8; 200]);
    let short = write_file(&dir, "short.bin", &[1u8; 100]);

    let forward = comparer().compare(
        &[long.clone(), short.clone()],
        CompareMode::Overlap,
    );
    assert_eq!(forward.scores[0].score, Similarity::Percent(50.0));

    let backward = comparer().compare(&[short, long], CompareMode::Overlap);
    assert_eq!(backward.scores[0].score, Similarity::Percent(100.0));
}

#[test]
fn pairwise_run_produces_exactly_all_pairs() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..6)
        .map(|i| write_file(&dir, &format!("f{i}.bin"), &[i as u8; 100]))
        .collect();

    let report = comparer().compare(&paths, CompareMode::Overlap);
    assert_eq!(report.scores.len(), 6 * 5 / 2);
    assert_eq!(report.stats.units_dispatched, 15);
}

#[test]
fn unreadable_file_skips_only_its_pairs() {
    // N=4 with one missing file: (N-1)(N-2)/2 = 3 scores delivered
    let dir = TempDir::new().unwrap();
    let mut paths: Vec<PathBuf> = (0..3)
        .map(|i| write_file(&dir, &format!("ok{i}.bin"), &[0u8; 100]))
        .collect();
    paths.push(dir.path().join("missing.bin"));

    let report = comparer().compare(&paths, CompareMode::Overlap);

    assert_eq!(report.scores.len(), 3);
    assert_eq!(report.skipped.len(), 3);
    assert!(report.has_skips());
    for skip in &report.skipped {
        assert!(skip.unit.label().contains("missing.bin"));
    }
}

#[test]
fn totals_scenario_grand_total_and_group() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "fileA", &[0u8; 50]);
    let b = write_file(&dir, "fileB", &[0u8; 50]);
    let c = write_file(&dir, "fileC", &[1u8; 50]);

    let report = comparer().totals(&[a.clone(), b.clone(), c.clone()]);

    assert_eq!(report.grand_total, 50);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].total, 0);

    let mut members = report.groups[0].files.clone();
    members.sort();
    let mut expected = vec![a, b];
    expected.sort();
    assert_eq!(members, expected);

    // fileC has a different total and must not join the group
    assert!(!report.groups[0].files.contains(&c));
}

#[test]
fn totals_equal_sums_with_different_content_still_group() {
    // [2, 0] and [1, 1] have equal totals but different content
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.bin", &[2u8, 0u8]);
    let b = write_file(&dir, "b.bin", &[1u8, 1u8]);
    let c = write_file(&dir, "c.bin", &[9u8]);

    let report = comparer().totals(&[a, b, c]);

    assert_eq!(report.grand_total, 13);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].total, 2);
    assert_eq!(report.groups[0].files.len(), 2);
}

#[test]
fn totals_unreadable_file_is_reported_and_excluded() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.bin", &[5u8; 4]);
    let missing = dir.path().join("missing.bin");

    let report = comparer().totals(&[a, missing]);

    assert_eq!(report.grand_total, 20);
    assert_eq!(report.totals.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.stats.units_dispatched, 2);
    assert_eq!(report.stats.units_skipped, 1);
}

#[test]
fn empty_files_compare_cleanly() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.bin", b"");
    let b = write_file(&dir, "b.bin", b"");

    // Empty fingerprints: overlap base is empty, so the score is undefined
    let report = comparer().compare(&[a.clone(), b.clone()], CompareMode::Overlap);
    assert!(report.scores[0].score.is_undefined());

    // Totals: both files sum to zero and group together
    let report = comparer().totals(&[a, b]);
    assert_eq!(report.grand_total, 0);
    assert_eq!(report.groups.len(), 1);
}
