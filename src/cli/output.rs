//! Output formatting for the levdist CLI.

use serde::{Deserialize, Serialize};

use crate::cli::args::{Algorithm, LevdistArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceReport {
    pub file1: String,
    pub file2: String,
    pub len1: usize,
    pub len2: usize,
    pub algorithm: Algorithm,
    pub distance: usize,
    pub duration_ms: u64,
}

/// Output a report in the requested format.
pub fn output_result(report: &DistanceReport, args: &LevdistArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in human-readable format.
fn output_human(report: &DistanceReport, args: &LevdistArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!(
            "Sequence lengths: {} and {} symbol(s)",
            report.len1, report.len2
        );
        println!("Computed in {}ms", report.duration_ms);
    }

    println!("Minimum edits required to convert is {}.", report.distance);

    Ok(())
}

/// Output in JSON format.
fn output_json(report: &DistanceReport, args: &LevdistArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    println!("{json}");

    Ok(())
}
