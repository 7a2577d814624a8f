//! JSON output formatter for comparison results.
//!
//! Provides machine-readable output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "mode": "overlap",
//!   "results": [
//!     {"left": "a.bin", "right": "b.bin", "percent": 66.666667}
//!   ],
//!   "skipped": [
//!     {"paths": ["a.bin", "gone.bin"], "error": "File not found: gone.bin"}
//!   ],
//!   "summary": {
//!     "units_dispatched": 3,
//!     "units_completed": 2,
//!     "units_skipped": 1,
//!     "elapsed_ms": 12,
//!     "exit_code": 3,
//!     "exit_code_name": "FS003"
//!   }
//! }
//! ```
//!
//! An undefined similarity (no comparable chunks) serializes as
//! `"percent": null`.

use std::io::Write;

use serde::Serialize;

use crate::compare::{CompareMode, CompareReport, CompareStats, SkippedUnit, TotalsReport, WorkUnit};
use crate::error::ExitCode;

/// A single scored pair in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonPairResult {
    /// First (base) input of the pair
    pub left: String,
    /// Second (target) input of the pair
    pub right: String,
    /// Similarity percentage; null when undefined
    pub percent: Option<f64>,
}

/// A skipped unit in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSkipped {
    /// Inputs the unit covered
    pub paths: Vec<String>,
    /// Why the unit was skipped
    pub error: String,
}

impl JsonSkipped {
    fn from_skipped_unit(skip: &SkippedUnit) -> Self {
        let paths = match &skip.unit {
            WorkUnit::Pair { left, right } => {
                vec![left.display().to_string(), right.display().to_string()]
            }
            WorkUnit::Single { path } => vec![path.display().to_string()],
        };
        Self {
            paths,
            error: skip.error.to_string(),
        }
    }
}

/// Run summary in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRunSummary {
    /// Units enumerated and dispatched
    pub units_dispatched: usize,
    /// Units that delivered a result
    pub units_completed: usize,
    /// Units skipped over unreadable inputs
    pub units_skipped: usize,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "FS000")
    pub exit_code_name: String,
}

impl JsonRunSummary {
    fn from_stats(stats: &CompareStats, exit_code: ExitCode) -> Self {
        Self {
            units_dispatched: stats.units_dispatched,
            units_completed: stats.units_completed,
            units_skipped: stats.units_skipped,
            elapsed_ms: stats.elapsed.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output for a pairwise run.
#[derive(Debug, Serialize)]
pub struct JsonCompareOutput {
    /// Comparison algorithm used
    pub mode: String,
    /// Scored pairs
    pub results: Vec<JsonPairResult>,
    /// Skipped units
    pub skipped: Vec<JsonSkipped>,
    /// Run summary
    pub summary: JsonRunSummary,
}

impl JsonCompareOutput {
    /// Build the JSON view of a pairwise report.
    #[must_use]
    pub fn new(report: &CompareReport, mode: CompareMode, exit_code: ExitCode) -> Self {
        Self {
            mode: mode.to_string(),
            results: report
                .scores
                .iter()
                .map(|s| JsonPairResult {
                    left: s.left.display().to_string(),
                    right: s.right.display().to_string(),
                    percent: s.score.as_percent(),
                })
                .collect(),
            skipped: report
                .skipped
                .iter()
                .map(JsonSkipped::from_skipped_unit)
                .collect(),
            summary: JsonRunSummary::from_stats(&report.stats, exit_code),
        }
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    pub fn write_to(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "{}", self.to_json_pretty()?)?;
        Ok(())
    }
}

/// One file's byte total in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFileTotal {
    /// The input file
    pub path: String,
    /// Unsigned sum of every byte value
    pub total: u64,
    /// File length in bytes
    pub bytes: u64,
}

/// One equal-total group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSumGroup {
    /// The shared byte total
    pub total: u64,
    /// Files sharing it (always 2 or more)
    pub files: Vec<String>,
}

/// Complete JSON output for a totals run.
#[derive(Debug, Serialize)]
pub struct JsonTotalsOutput {
    /// Sum of every readable file's byte total
    pub grand_total: u64,
    /// Per-file totals
    pub files: Vec<JsonFileTotal>,
    /// Candidate-duplicate groups (equal totals; heuristic only)
    pub groups: Vec<JsonSumGroup>,
    /// Skipped units
    pub skipped: Vec<JsonSkipped>,
    /// Run summary
    pub summary: JsonRunSummary,
}

impl JsonTotalsOutput {
    /// Build the JSON view of a totals report.
    #[must_use]
    pub fn new(report: &TotalsReport, exit_code: ExitCode) -> Self {
        Self {
            grand_total: report.grand_total,
            files: report
                .totals
                .iter()
                .map(|t| JsonFileTotal {
                    path: t.path.display().to_string(),
                    total: t.total,
                    bytes: t.bytes,
                })
                .collect(),
            groups: report
                .groups
                .iter()
                .map(|g| JsonSumGroup {
                    total: g.total,
                    files: g.files.iter().map(|p| p.display().to_string()).collect(),
                })
                .collect(),
            skipped: report
                .skipped
                .iter()
                .map(JsonSkipped::from_skipped_unit)
                .collect(),
            summary: JsonRunSummary::from_stats(&report.stats, exit_code),
        }
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    pub fn write_to(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "{}", self.to_json_pretty()?)?;
        Ok(())
    }
}
