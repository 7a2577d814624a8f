//! Output formatters for comparison results.
//!
//! This module renders run reports for humans (text, optionally colored)
//! and for scripts (JSON, see [`json`]). Result ordering follows the
//! aggregate's containers; nothing here sorts or deduplicates.

pub mod json;

// Re-export main types
pub use json::{JsonCompareOutput, JsonTotalsOutput};

use std::io::{self, Write};

use yansi::Paint;

use crate::compare::{CompareMode, CompareReport, SkippedUnit, TotalsReport};

/// Render a pairwise report as human-readable text.
///
/// One line per scored pair in the original report shape, followed by a
/// skip section when any unit was dropped.
pub fn render_compare_text(
    report: &CompareReport,
    mode: CompareMode,
    out: &mut impl Write,
) -> io::Result<()> {
    for score in &report.scores {
        writeln!(
            out,
            "Similarity between {} and {}: {}",
            score.left.display(),
            score.right.display(),
            score.score.bold()
        )?;
    }

    if report.scores.is_empty() && !report.has_skips() {
        writeln!(out, "Nothing to compare ({mode} mode)")?;
    }

    render_skips(&report.skipped, report.stats.units_dispatched, "comparisons", out)
}

/// Render a totals report as human-readable text.
///
/// Grand total first, then one line per equal-total group. Equal totals are
/// a heuristic signal only, and the output says so.
pub fn render_totals_text(report: &TotalsReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Grand total: {}", report.grand_total.bold())?;

    if report.groups.is_empty() {
        writeln!(out, "No files share a byte total")?;
    } else {
        for group in &report.groups {
            let files: Vec<String> = group
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            writeln!(
                out,
                "Sum {}: {} {}",
                group.total.bold(),
                files.join(", "),
                "(candidate duplicates: equal totals, contents may differ)".dim()
            )?;
        }
    }

    render_skips(&report.skipped, report.stats.units_dispatched, "files", out)
}

/// Render the skipped-unit section, if any.
fn render_skips(
    skipped: &[SkippedUnit],
    dispatched: usize,
    noun: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!("Skipped {} of {} {}:", skipped.len(), dispatched, noun).yellow()
    )?;
    for skip in skipped {
        writeln!(out, "  {}: {}", skip.unit.label(), skip.error)?;
    }
    Ok(())
}
