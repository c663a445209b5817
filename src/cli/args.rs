//! Command line argument parsing for the levdist CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Levdist - Levenshtein edit distance between two files
#[derive(Parser, Debug, Clone)]
#[command(name = "levdist")]
#[command(about = "Compute the Levenshtein edit distance between the first lines of two files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LevdistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Evaluator to run
    #[arg(short, long, default_value = "dp")]
    pub algorithm: Algorithm,

    /// File holding the first symbol sequence (only its first line is read)
    #[arg(value_name = "FILE1")]
    pub file1: PathBuf,

    /// File holding the second symbol sequence (only its first line is read)
    #[arg(value_name = "FILE2")]
    pub file2: PathBuf,
}

impl LevdistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Evaluators selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Dynamic-programming evaluator (production path)
    Dp,
    /// Naive recursive evaluator (reference path, exponential time)
    Recursive,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_invocation() {
        let args = LevdistArgs::try_parse_from(["levdist", "a.txt", "b.txt"]).unwrap();

        assert_eq!(args.file1, PathBuf::from("a.txt"));
        assert_eq!(args.file2, PathBuf::from("b.txt"));
        assert!(matches!(args.algorithm, Algorithm::Dp));
        assert!(matches!(args.output_format, OutputFormat::Human));
    }

    #[test]
    fn test_algorithm_selection() {
        let args =
            LevdistArgs::try_parse_from(["levdist", "--algorithm", "recursive", "a.txt", "b.txt"])
                .unwrap();

        assert!(matches!(args.algorithm, Algorithm::Recursive));
    }

    #[test]
    fn test_exactly_two_files_required() {
        // Too few arguments fail before any I/O happens.
        assert!(LevdistArgs::try_parse_from(["levdist"]).is_err());
        assert!(LevdistArgs::try_parse_from(["levdist", "a.txt"]).is_err());

        // So do too many.
        assert!(LevdistArgs::try_parse_from(["levdist", "a.txt", "b.txt", "c.txt"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LevdistArgs::try_parse_from(["levdist", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LevdistArgs::try_parse_from(["levdist", "-vv", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = LevdistArgs::try_parse_from(["levdist", "--quiet", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            LevdistArgs::try_parse_from(["levdist", "--format", "json", "a.txt", "b.txt"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
