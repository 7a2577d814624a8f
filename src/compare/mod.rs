//! Concurrent comparison orchestration.
//!
//! # Overview
//!
//! This module fans one unit of work per unordered input pair (or per input
//! file, for the totals mode) out across a bounded worker pool and fans the
//! results back into a single aggregate:
//!
//! 1. **Enumeration**: all `N*(N-1)/2` unordered pairs, or all `N` files.
//! 2. **Dispatch** (see [`scheduler`]): one self-contained worker per unit;
//!    each worker loads its own input(s), fingerprints, scores, and
//!    delivers exactly one tagged outcome into the fan-in channel.
//! 3. **Aggregation** (see [`aggregate`]): a single consumer drains the
//!    channel after every worker has returned and derives the report.
//!
//! A unit whose input cannot be read is skipped, not failed: the worker
//! delivers the cause, siblings keep running, and the report lists the
//! skipped units explicitly.

pub mod aggregate;
pub mod scheduler;

// Re-export main types
pub use aggregate::{CompareReport, CompareStats, FileTotal, SumGroup, TotalsReport};
pub use scheduler::Comparer;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::loader::LoadError;
use crate::progress::ProgressCallback;

/// Pairwise comparison algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Aligned 1 KiB block equality at matching indices.
    Positional,
    /// Order-independent chunk-sum overlap (base = first file of the pair).
    Overlap,
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareMode::Positional => write!(f, "positional"),
            CompareMode::Overlap => write!(f, "overlap"),
        }
    }
}

/// One dispatched unit of work.
///
/// Generated once during enumeration, immutable, and mapped 1:1 onto one
/// worker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkUnit {
    /// Unordered pair of inputs, scored by a pairwise algorithm.
    /// `left` is the base for asymmetric algorithms.
    Pair {
        /// First input of the pair
        left: PathBuf,
        /// Second input of the pair
        right: PathBuf,
    },
    /// Single input, reduced to its whole-file byte total.
    Single {
        /// The input file
        path: PathBuf,
    },
}

impl WorkUnit {
    /// Human-readable label for logs and progress display.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            WorkUnit::Pair { left, right } => {
                format!("{} vs {}", left.display(), right.display())
            }
            WorkUnit::Single { path } => path.display().to_string(),
        }
    }
}

/// A work unit that was dropped because an input could not be read.
///
/// Carries the cause so the aggregate can report the skip instead of
/// silently producing nothing.
#[derive(Debug)]
pub struct SkippedUnit {
    /// The unit that was skipped.
    pub unit: WorkUnit,
    /// Why it was skipped.
    pub error: LoadError,
}

/// Configuration for a comparison run.
#[derive(Clone, Default)]
pub struct CompareConfig {
    /// Number of worker threads. 0 means the default of 4.
    pub threads: usize,
    /// Optional progress callback.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl fmt::Debug for CompareConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareConfig")
            .field("threads", &self.threads)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl CompareConfig {
    /// Default worker thread count.
    pub const DEFAULT_THREADS: usize = 4;

    /// Set the worker thread count (clamped to at least 1).
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Effective worker thread count.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            Self::DEFAULT_THREADS
        } else {
            self.threads
        }
    }
}
