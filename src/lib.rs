//! # Levdist
//!
//! A small, correct Levenshtein edit distance library and CLI for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Dynamic-programming evaluator with full cost table and rolling two-row variants
//! - Naive recursive evaluator for correctness cross-checking
//! - First-line file loader with an explicit error taxonomy

pub mod cli;
pub mod distance;
pub mod error;
pub mod sequence;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
