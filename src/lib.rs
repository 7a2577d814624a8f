//! filesim - Concurrent File Similarity Estimation
//!
//! A cross-platform Rust CLI application that scores every unordered pair of
//! its input files under two chunk-based similarity algorithms (aligned
//! block equality and chunk-sum overlap) and detects candidate duplicates by
//! whole-file byte-sum collision, running all comparisons concurrently on a
//! bounded worker pool.

pub mod cli;
pub mod compare;
pub mod error;
pub mod fingerprint;
pub mod loader;
pub mod logging;
pub mod output;
pub mod progress;
pub mod similarity;

use std::io;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::{Cli, Commands, OutputFormat, PairwiseArgs, RunArgs, SumsArgs};
use crate::compare::{CompareConfig, CompareMode, Comparer};
use crate::error::ExitCode;
use crate::output::{JsonCompareOutput, JsonTotalsOutput};
use crate::progress::Progress;

/// Run the application for the given parsed CLI.
///
/// Initializes logging and color handling, dispatches the selected
/// subcommand, renders the report, and returns the exit code: `Success`
/// when every unit delivered a result, `PartialSuccess` when any unit was
/// skipped over an unreadable input.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        yansi::disable();
    }

    match cli.command {
        Commands::Positional(args) => run_pairwise(&args, CompareMode::Positional, cli.quiet),
        Commands::Overlap(args) => run_pairwise(&args, CompareMode::Overlap, cli.quiet),
        Commands::Sums(args) => run_totals(&args, cli.quiet),
    }
}

/// Build a comparer from shared run options.
fn build_comparer(run: &RunArgs, quiet: bool) -> Comparer {
    let mut config = CompareConfig::default().with_threads(run.threads);

    // Progress display is text-mode only
    if !run.no_progress && run.output == OutputFormat::Text {
        config = config.with_progress_callback(Arc::new(Progress::new(quiet)));
    }

    Comparer::new(config)
}

fn run_pairwise(args: &PairwiseArgs, mode: CompareMode, quiet: bool) -> Result<ExitCode> {
    let comparer = build_comparer(&args.run, quiet);
    let report = comparer.compare(&args.files, mode);

    let exit_code = if report.has_skips() {
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    };

    let mut stdout = io::stdout().lock();
    match args.run.output {
        OutputFormat::Text => output::render_compare_text(&report, mode, &mut stdout)?,
        OutputFormat::Json => {
            JsonCompareOutput::new(&report, mode, exit_code).write_to(&mut stdout)?;
        }
    }

    Ok(exit_code)
}

fn run_totals(args: &SumsArgs, quiet: bool) -> Result<ExitCode> {
    let comparer = build_comparer(&args.run, quiet);
    let report = comparer.totals(&args.files);

    let exit_code = if report.has_skips() {
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    };

    let mut stdout = io::stdout().lock();
    match args.run.output {
        OutputFormat::Text => output::render_totals_text(&report, &mut stdout)?,
        OutputFormat::Json => {
            JsonTotalsOutput::new(&report, exit_code).write_to(&mut stdout)?;
        }
    }

    Ok(exit_code)
}
