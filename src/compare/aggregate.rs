//! Result aggregation for comparison runs.
//!
//! The aggregate step owns all cross-unit state: it drains the tagged
//! outcomes delivered by the scheduler and derives the final report. The
//! totals mode builds its sum-to-files mapping here, after every worker has
//! joined, so no map is ever mutated concurrently.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::compare::{SkippedUnit, WorkUnit};
use crate::loader::LoadError;
use crate::similarity::PairScore;

/// Counters for one comparison run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareStats {
    /// Units enumerated and dispatched.
    pub units_dispatched: usize,
    /// Units that delivered a result.
    pub units_completed: usize,
    /// Units dropped because an input was unreadable.
    pub units_skipped: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl CompareStats {
    /// Whether every dispatched unit delivered a result.
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.units_skipped == 0
    }
}

/// Aggregate of a pairwise comparison run.
#[derive(Debug)]
pub struct CompareReport {
    /// Scored pairs, in delivery order (arbitrary between workers).
    pub scores: Vec<PairScore>,
    /// Units skipped due to unreadable inputs.
    pub skipped: Vec<SkippedUnit>,
    /// Run counters.
    pub stats: CompareStats,
}

impl CompareReport {
    /// Whether any unit was skipped.
    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Whole-file byte total of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTotal {
    /// The input file.
    pub path: PathBuf,
    /// Unsigned sum of every byte value in the file.
    pub total: u64,
    /// File length in bytes.
    pub bytes: u64,
}

/// Files sharing one identical byte total.
///
/// Equal totals are a heuristic signal of duplication, not a guarantee of
/// identical content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumGroup {
    /// The shared byte total.
    pub total: u64,
    /// All inputs with this total (always 2 or more).
    pub files: Vec<PathBuf>,
}

/// Aggregate of a totals run.
#[derive(Debug)]
pub struct TotalsReport {
    /// Sum of the byte totals of every readable input.
    pub grand_total: u64,
    /// Per-file totals, in delivery order.
    pub totals: Vec<FileTotal>,
    /// Collision groups of 2+ files with identical totals.
    pub groups: Vec<SumGroup>,
    /// Units skipped due to unreadable inputs.
    pub skipped: Vec<SkippedUnit>,
    /// Run counters.
    pub stats: CompareStats,
}

impl TotalsReport {
    /// Whether any unit was skipped.
    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Build a pairwise report from delivered outcomes.
#[must_use]
pub fn collect_pairwise(
    outcomes: Vec<(WorkUnit, Result<PairScore, LoadError>)>,
    elapsed: Duration,
) -> CompareReport {
    let mut stats = CompareStats {
        units_dispatched: outcomes.len(),
        elapsed,
        ..Default::default()
    };
    let mut scores = Vec::new();
    let mut skipped = Vec::new();

    for (unit, result) in outcomes {
        match result {
            Ok(score) => {
                stats.units_completed += 1;
                scores.push(score);
            }
            Err(error) => {
                log::warn!("Skipped {}: {}", unit.label(), error);
                stats.units_skipped += 1;
                skipped.push(SkippedUnit { unit, error });
            }
        }
    }

    log::debug!(
        "Pairwise run finished: {}/{} units scored in {:?}",
        stats.units_completed,
        stats.units_dispatched,
        stats.elapsed
    );

    CompareReport {
        scores,
        skipped,
        stats,
    }
}

/// Build a totals report from delivered outcomes.
///
/// Groups inputs by exact total and keeps only groups with 2+ members.
#[must_use]
pub fn collect_totals(
    outcomes: Vec<(WorkUnit, Result<FileTotal, LoadError>)>,
    elapsed: Duration,
) -> TotalsReport {
    let mut stats = CompareStats {
        units_dispatched: outcomes.len(),
        elapsed,
        ..Default::default()
    };
    let mut totals = Vec::new();
    let mut skipped = Vec::new();
    let mut grand_total: u64 = 0;
    let mut by_total: HashMap<u64, Vec<PathBuf>> = HashMap::new();

    for (unit, result) in outcomes {
        match result {
            Ok(file_total) => {
                stats.units_completed += 1;
                grand_total += file_total.total;
                by_total
                    .entry(file_total.total)
                    .or_default()
                    .push(file_total.path.clone());
                totals.push(file_total);
            }
            Err(error) => {
                log::warn!("Skipped {}: {}", unit.label(), error);
                stats.units_skipped += 1;
                skipped.push(SkippedUnit { unit, error });
            }
        }
    }

    let groups: Vec<SumGroup> = by_total
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(total, files)| SumGroup { total, files })
        .collect();

    log::debug!(
        "Totals run finished: {} files, grand total {}, {} collision group(s) in {:?}",
        stats.units_completed,
        grand_total,
        groups.len(),
        stats.elapsed
    );

    TotalsReport {
        grand_total,
        totals,
        groups,
        skipped,
        stats,
    }
}
