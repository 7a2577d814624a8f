//! Command-line interface definitions for filesim.
//!
//! This module defines all CLI arguments, subcommands, and options using the
//! clap derive API. The CLI follows standard conventions with global options
//! (verbosity, color) and one subcommand per comparison mode.
//!
//! # Example
//!
//! ```bash
//! # Score pairs by aligned 1 KiB block equality
//! filesim positional a.bin b.bin c.bin
//!
//! # Score pairs by order-independent chunk-sum overlap, JSON output
//! filesim overlap a.bin b.bin --output json
//!
//! # Whole-file byte totals and duplicate-sum candidates
//! filesim sums *.bin
//!
//! # Verbose mode for debugging
//! filesim -v positional a.bin b.bin
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Concurrent file similarity estimation and duplicate-sum detection.
///
/// filesim scores every unordered pair of its input files under one of two
/// similarity algorithms, or groups files by identical whole-file byte
/// totals as a duplicate heuristic. Comparisons run concurrently on a
/// bounded worker pool; unreadable files skip their units without aborting
/// the run.
#[derive(Debug, Parser)]
#[command(name = "filesim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for filesim.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score file pairs by aligned 1 KiB block equality
    ///
    /// Blocks at matching indices are compared byte-for-byte up to the
    /// shorter file's block count; a trailing partial block is ignored.
    Positional(PairwiseArgs),

    /// Score file pairs by order-independent chunk-sum overlap
    ///
    /// Files are fingerprinted as 100-byte chunk sums; each chunk of the
    /// first file consumes at most one equal chunk of the second. The score
    /// is normalized by the first file's chunk count, so it is asymmetric.
    Overlap(PairwiseArgs),

    /// Report whole-file byte totals and equal-total groups
    ///
    /// Prints the grand total across all files plus candidate-duplicate
    /// groups of files whose byte totals collide exactly.
    Sums(SumsArgs),
}

/// Arguments for the pairwise subcommands.
#[derive(Debug, Args)]
pub struct PairwiseArgs {
    /// Files to compare pairwise
    #[arg(value_name = "FILE", num_args = 2.., required = true)]
    pub files: Vec<PathBuf>,

    /// Shared run options
    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the sums subcommand.
#[derive(Debug, Args)]
pub struct SumsArgs {
    /// Files to total
    #[arg(value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Shared run options
    #[command(flatten)]
    pub run: RunArgs,
}

/// Options shared by every comparison mode.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Number of worker threads
    #[arg(long, value_name = "N", default_value = "4")]
    pub threads: usize,

    /// Output format (text for humans, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Output format for run results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_requires_two_files() {
        assert!(Cli::try_parse_from(["filesim", "positional", "only.bin"]).is_err());
        assert!(Cli::try_parse_from(["filesim", "positional"]).is_err());
        assert!(Cli::try_parse_from(["filesim", "positional", "a.bin", "b.bin"]).is_ok());
    }

    #[test]
    fn test_overlap_accepts_many_files() {
        let cli = Cli::try_parse_from(["filesim", "overlap", "a", "b", "c", "d"]).unwrap();
        match cli.command {
            Commands::Overlap(args) => assert_eq!(args.files.len(), 4),
            _ => panic!("Expected overlap subcommand"),
        }
    }

    #[test]
    fn test_sums_accepts_single_file() {
        let cli = Cli::try_parse_from(["filesim", "sums", "a.bin"]).unwrap();
        match cli.command {
            Commands::Sums(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.bin")]);
                assert_eq!(args.run.threads, 4);
                assert_eq!(args.run.output, OutputFormat::Text);
            }
            _ => panic!("Expected sums subcommand"),
        }
    }

    #[test]
    fn test_sums_requires_a_file() {
        assert!(Cli::try_parse_from(["filesim", "sums"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["filesim", "-vv", "--json-errors", "positional", "a", "b"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json_errors);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["filesim", "-v", "-q", "sums", "a"]).is_err());
    }

    #[test]
    fn test_run_options() {
        let cli = Cli::try_parse_from([
            "filesim",
            "overlap",
            "a",
            "b",
            "--threads",
            "8",
            "--output",
            "json",
            "--no-progress",
        ])
        .unwrap();
        match cli.command {
            Commands::Overlap(args) => {
                assert_eq!(args.run.threads, 8);
                assert_eq!(args.run.output, OutputFormat::Json);
                assert!(args.run.no_progress);
            }
            _ => panic!("Expected overlap subcommand"),
        }
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
