//! Command implementation for the levdist CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::distance::{recursive, table};
use crate::error::Result;
use crate::sequence::read_first_line;

/// Execute the distance command.
pub fn execute_command(args: LevdistArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("Comparing: {}", args.file1.display());
        println!("With:      {}", args.file2.display());
        println!("Algorithm: {:?}", args.algorithm);
    }

    // Load both inputs before computing anything, so each failure is
    // reported against its own path.
    let loaded1 = read_first_line(&args.file1);
    let loaded2 = read_first_line(&args.file2);

    let (seq1, seq2) = match (loaded1, loaded2) {
        (Ok(s1), Ok(s2)) => (s1, s2),
        (Err(e1), Err(e2)) => {
            // Both inputs failed; report the first here, the caller
            // reports the second.
            eprintln!("Error: {e1}");
            return Err(e2);
        }
        (Err(e1), _) => return Err(e1),
        (_, Err(e2)) => return Err(e2),
    };

    if args.verbosity() > 2 {
        println!("Sequence 1: {} symbol(s)", seq1.len());
        println!("Sequence 2: {} symbol(s)", seq2.len());
    }

    let start = Instant::now();

    let distance = match args.algorithm {
        Algorithm::Dp => {
            table::prefix_distance(seq1.symbols(), seq2.symbols(), seq1.len(), seq2.len())?
        }
        Algorithm::Recursive => {
            recursive::prefix_distance(seq1.symbols(), seq2.symbols(), seq1.len(), seq2.len())?
        }
    };

    let duration = start.elapsed();

    output_result(
        &DistanceReport {
            file1: args.file1.to_string_lossy().to_string(),
            file2: args.file2.to_string_lossy().to_string(),
            len1: seq1.len(),
            len2: seq2.len(),
            algorithm: args.algorithm,
            distance,
            duration_ms: duration.as_millis() as u64,
        },
        &args,
    )?;

    Ok(())
}
