//! Levdist CLI binary.

use clap::Parser;
use levdist::cli::{args::*, commands::*};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = LevdistArgs::parse();

    // Execute the command; every error kind maps to its own exit code.
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
