//! Work-unit scheduling and concurrent dispatch.
//!
//! # Overview
//!
//! The scheduler enumerates the work set (all unordered pairs for the
//! pairwise modes, all files for the totals mode), dispatches the units
//! onto a bounded rayon pool, and collects outcomes through a fan-in
//! channel.
//!
//! Two invariants hold regardless of mode:
//!
//! - The fan-in channel's capacity equals the exact unit count, so a
//!   worker's delivery never blocks.
//! - The sender side is dropped only after the pool scope has joined every
//!   spawned worker, so the channel is never closed while a unit might
//!   still deliver, and the consumer's drain terminates exactly when all
//!   outcomes are in.
//!
//! Workers are fully self-contained: each loads its own inputs, derives its
//! own fingerprints, and shares nothing with its siblings but the channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Instant;

use crate::compare::{aggregate, CompareConfig, CompareMode, CompareReport, TotalsReport, WorkUnit};
use crate::fingerprint::sums;
use crate::loader::{ContentLoader, FsLoader, LoadError};
use crate::similarity::{overlap_similarity, positional_similarity, PairScore};

/// Orchestrates concurrent comparison runs.
///
/// # Example
///
/// ```no_run
/// use filesim::compare::{Comparer, CompareMode};
/// use std::path::PathBuf;
///
/// let comparer = Comparer::with_defaults();
/// let paths = vec![PathBuf::from("a.bin"), PathBuf::from("b.bin")];
/// let report = comparer.compare(&paths, CompareMode::Positional);
///
/// for score in &report.scores {
///     println!("{} vs {}: {}", score.left.display(), score.right.display(), score.score);
/// }
/// ```
pub struct Comparer {
    config: CompareConfig,
    loader: Arc<dyn ContentLoader>,
}

impl Comparer {
    /// Create a comparer reading from the filesystem.
    #[must_use]
    pub fn new(config: CompareConfig) -> Self {
        Self::with_loader(config, Arc::new(FsLoader))
    }

    /// Create a comparer with a custom content loader.
    #[must_use]
    pub fn with_loader(config: CompareConfig, loader: Arc<dyn ContentLoader>) -> Self {
        Self { config, loader }
    }

    /// Create a comparer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CompareConfig::default())
    }

    /// Score every unordered pair of `paths` under the given algorithm.
    ///
    /// Dispatches `N*(N-1)/2` units. A unit whose input cannot be read is
    /// reported in [`CompareReport::skipped`]; all other pairs are
    /// unaffected.
    #[must_use]
    pub fn compare(&self, paths: &[PathBuf], mode: CompareMode) -> CompareReport {
        let units = enumerate_pairs(paths);
        log::info!(
            "Comparing {} files ({} pairs, {} mode) on {} workers",
            paths.len(),
            units.len(),
            mode,
            self.config.effective_threads()
        );

        let started = Instant::now();
        let loader = Arc::clone(&self.loader);
        let outcomes = self.dispatch("compare", units, move |unit| match unit {
            WorkUnit::Pair { left, right } => score_pair(loader.as_ref(), left, right, mode),
            WorkUnit::Single { path } => unreachable!("pairwise run got {}", path.display()),
        });

        aggregate::collect_pairwise(outcomes, started.elapsed())
    }

    /// Compute whole-file byte totals for every path and group collisions.
    ///
    /// Dispatches one unit per file. Unreadable files are reported in
    /// [`TotalsReport::skipped`] and excluded from the grand total and the
    /// collision groups.
    #[must_use]
    pub fn totals(&self, paths: &[PathBuf]) -> TotalsReport {
        let units: Vec<WorkUnit> = paths
            .iter()
            .map(|path| WorkUnit::Single { path: path.clone() })
            .collect();
        log::info!(
            "Totaling {} files on {} workers",
            units.len(),
            self.config.effective_threads()
        );

        let started = Instant::now();
        let loader = Arc::clone(&self.loader);
        let outcomes = self.dispatch("totals", units, move |unit| match unit {
            WorkUnit::Single { path } => total_file(loader.as_ref(), path),
            WorkUnit::Pair { left, right } => {
                unreachable!("totals run got {} vs {}", left.display(), right.display())
            }
        });

        aggregate::collect_totals(outcomes, started.elapsed())
    }

    /// Run every unit through `job` on the worker pool and collect the
    /// tagged outcomes.
    ///
    /// Returns one entry per dispatched unit, in delivery order (which is
    /// arbitrary between workers).
    fn dispatch<T, F>(
        &self,
        phase: &str,
        units: Vec<WorkUnit>,
        job: F,
    ) -> Vec<(WorkUnit, Result<T, LoadError>)>
    where
        T: Send,
        F: Fn(&WorkUnit) -> Result<T, LoadError> + Send + Sync,
    {
        let unit_count = units.len();
        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start(phase, unit_count);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.effective_threads())
            .build()
            .unwrap_or_else(|_| {
                log::warn!(
                    "Failed to create custom thread pool, using global pool with {} threads",
                    rayon::current_num_threads()
                );
                rayon::ThreadPoolBuilder::new().build().unwrap()
            });

        // Capacity equals the unit count, so no delivery can ever block.
        let (tx, rx) = mpsc::sync_channel(unit_count);
        let completed = AtomicUsize::new(0);
        let job = &job;
        let completed_ref = &completed;
        let config = &self.config;

        pool.scope(|scope| {
            for unit in units {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    log::trace!("Unit started: {}", unit.label());
                    let result = job(&unit);

                    let done = completed_ref.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(ref callback) = config.progress_callback {
                        callback.on_progress(done, &unit.label());
                    }

                    let _ = tx.send((unit, result));
                });
            }
        });

        // The scope has joined every worker; only now may the channel close.
        drop(tx);

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end(phase);
        }

        let outcomes: Vec<_> = rx.into_iter().collect();
        debug_assert_eq!(outcomes.len(), unit_count);
        outcomes
    }
}

/// Enumerate all unordered pairs of `paths`.
///
/// `i` ranges over `[0, N)` and `j` over `(i, N)`, so each pair appears
/// exactly once and never with `i == j`.
fn enumerate_pairs(paths: &[PathBuf]) -> Vec<WorkUnit> {
    let n = paths.len();
    let mut units = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            units.push(WorkUnit::Pair {
                left: paths[i].clone(),
                right: paths[j].clone(),
            });
        }
    }
    units
}

/// Worker body for one pairwise unit.
///
/// Loads both inputs (left first; a failing left means the right is never
/// read) and scores them under `mode`.
fn score_pair(
    loader: &dyn ContentLoader,
    left: &Path,
    right: &Path,
    mode: CompareMode,
) -> Result<PairScore, LoadError> {
    let left_content = loader.load(left)?;
    let right_content = loader.load(right)?;

    let score = match mode {
        CompareMode::Positional => positional_similarity(&left_content, &right_content),
        CompareMode::Overlap => {
            let base = sums::chunk_sums(&left_content);
            let target = sums::chunk_sums(&right_content);
            overlap_similarity(&base, &target)
        }
    };

    Ok(PairScore::new(left.to_path_buf(), right.to_path_buf(), score))
}

/// Worker body for one totals unit.
fn total_file(loader: &dyn ContentLoader, path: &Path) -> Result<aggregate::FileTotal, LoadError> {
    let content = loader.load(path)?;
    Ok(aggregate::FileTotal {
        path: path.to_path_buf(),
        total: sums::byte_total(&content),
        bytes: content.len() as u64,
    })
}
